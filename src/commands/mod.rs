pub mod config;
pub mod crawl;
pub mod ics;
pub mod merge;
