use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{info_time, Result};

const CALENDAR_URL: &str = "https://www.forexfactory.com/calendar?day=";
const USER_AGENT: &str = "Mozilla/5.0";

/// Source of rendered calendar markup for one date key. The production
/// impl talks to the site; tests substitute scripted pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_day(&self, date_key: &str) -> Result<String>;
}

/// Fetches calendar pages over HTTP with a shared client.
///
/// The calendar fills its rows in client-side shortly after the document
/// arrives, so each fetch waits out a fixed settle delay before handing
/// the markup to the parser. The delay is a timing assumption, not a
/// readiness signal.
pub struct CalendarFetcher {
    client: Client,
    settle: Duration,
}

impl CalendarFetcher {
    pub fn new(settle: Duration) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, settle })
    }
}

#[async_trait]
impl PageFetcher for CalendarFetcher {
    async fn fetch_day(&self, date_key: &str) -> Result<String> {
        let url = format!("{CALENDAR_URL}{date_key}");
        info_time!("Scraping: {url}");

        let res = self.client.get(&url).send().await?;
        let html = res.text().await?;

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        Ok(html)
    }
}
