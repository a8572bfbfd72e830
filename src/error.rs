use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("The selector you are trying to scrape for is malformed. Selector: {0}")]
    ParseBadSelector(String),

    #[error("Task ran past the {0} second limit")]
    TaskTimeout(u64),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
