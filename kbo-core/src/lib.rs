//! Core of kbo-calendar.
//!
//! Turns the league's schedule rows into per-team text schedules and
//! iCalendar files:
//! - `normalize` folds raw rows into `GameRecord`s
//! - `store` writes and reads the per-team text files
//! - `ics` builds per-team and league calendars from those files
//!
//! Fetching is left to the caller through `crawl::ScheduleSource`.

pub mod constants;
pub mod crawl;
pub mod error;
pub mod game;
pub mod ics;
pub mod markup;
pub mod normalize;
pub mod protocol;
pub mod roster;
pub mod settings;
pub mod store;
pub mod venue;

pub use error::{ScheduleError, ScheduleResult};
pub use game::{GameRecord, Side, TeamPerspectiveLine};
pub use roster::Roster;
pub use settings::ScheduleConfig;
