//! Stadium to city lookup for the league-wide calendar.

/// City of a stadium. Unknown stadiums are returned unchanged.
pub fn city_for_venue(venue: &str) -> &str {
    let stadium = venue.trim().trim_start_matches('@');
    match stadium {
        "잠실" | "고척" => "서울",
        "문학" => "인천",
        "수원" => "수원",
        "대전" => "대전",
        "대구" => "대구",
        "광주" => "광주",
        "사직" => "부산",
        "창원" => "창원",
        other => other,
    }
}
