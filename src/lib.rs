//! Concurrent scraper for the Forex Factory economic calendar.
//!
//! One page per calendar day is fetched and parsed on a bounded worker
//! pool; completed days are merged into a single in-memory table that is
//! snapshotted to CSV on several cadences (after every day, every Nth
//! day, hourly, and whenever a day fails) so a crash never loses what was
//! already scraped.

pub mod checkpoint;
pub mod csv;
pub mod dates;
pub mod error;
pub mod event;
pub mod fetch;
mod macros;
pub mod parse;
pub mod process;

pub use error::{Error, Result};

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

/// Settings for one scraping run.
#[derive(Debug, Clone)]
pub struct Config {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_workers: usize,
    pub backup_every_n: usize,
    pub out_dir: PathBuf,
    pub settle: Duration,
    pub task_timeout: Duration,
}
