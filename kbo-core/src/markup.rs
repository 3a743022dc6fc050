//! Text extraction from the HTML fragments embedded in schedule cells.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").expect("`span` is a valid selector"));

/// Token between the two team names in a matchup cell.
pub const MATCHUP_SEPARATOR: &str = "vs";

/// How the two team names of a matchup cell were recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matchup {
    /// Cell text split on the `vs` token into exactly two names.
    Separated { away: String, home: String },
    /// First and last `<span>` fragments of the cell.
    Fragments { away: String, home: String },
    /// Neither strategy produced two names (e.g. a cancellation notice).
    Unparsed,
}

impl Matchup {
    /// `(away, home)` when the cell named two teams.
    pub fn teams(&self) -> Option<(&str, &str)> {
        match self {
            Matchup::Separated { away, home } | Matchup::Fragments { away, home } => {
                Some((away, home))
            }
            Matchup::Unparsed => None,
        }
    }
}

/// Visible text of a markup fragment, trimmed.
pub fn strip_markup(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extract `(away, home)` from a matchup cell such as
/// `<span>KT</span><em><span>vs</span></em><span>LG</span>`.
///
/// Text nodes are trimmed and concatenated before splitting on `vs`, so
/// `KT vs LG` and the nested-span form both yield `KT`/`LG`. Only when the
/// split does not give exactly two non-empty names are the outer spans used.
pub fn extract_matchup(markup: &str) -> Matchup {
    let fragment = Html::parse_fragment(markup);

    let text: String = fragment.root_element().text().map(str::trim).collect();
    let parts: Vec<&str> = text.split(MATCHUP_SEPARATOR).map(str::trim).collect();
    if let [away, home] = parts.as_slice() {
        if !away.is_empty() && !home.is_empty() {
            return Matchup::Separated {
                away: away.to_string(),
                home: home.to_string(),
            };
        }
    }

    let spans: Vec<String> = fragment
        .select(&SPAN)
        .map(|span| span.text().map(str::trim).collect::<String>())
        .filter(|s| !s.is_empty())
        .collect();

    match (spans.first(), spans.last()) {
        (Some(away), Some(home)) if spans.len() >= 2 => Matchup::Fragments {
            away: away.clone(),
            home: home.clone(),
        },
        _ => Matchup::Unparsed,
    }
}
