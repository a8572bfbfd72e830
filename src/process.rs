use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::checkpoint::Checkpoints;
use crate::dates::date_range;
use crate::event::EventRecord;
use crate::fetch::PageFetcher;
use crate::parse::parse_calendar;
use crate::{info_time, Config, Error, Result};

/// What one run ended with. Failures are per-day and per-checkpoint;
/// neither kind aborts the run.
#[derive(Debug)]
pub struct RunSummary {
    pub completed_dates: usize,
    pub total_records: usize,
    pub failed_dates: Vec<(String, String)>,
    pub failed_checkpoints: Vec<String>,
}

/// Scrapes the configured date range on a bounded worker pool and
/// checkpoints the accumulated table as days complete.
///
/// Days finish in whatever order the network allows; the table keeps
/// completion order, not calendar order. This loop is the sole mutator
/// of the table and the checkpoint state, so neither is locked.
pub async fn run(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Result<RunSummary> {
    let keys = date_range(config.start_date, config.end_date)?;
    info_time!(
        "Started scraping {} days with {} workers",
        keys.len(),
        config.max_workers
    );

    let mut checkpoints = Checkpoints::new(&config.out_dir, config.backup_every_n);
    let mut table: Vec<EventRecord> = Vec::new();
    let mut failed_dates: Vec<(String, String)> = Vec::new();

    let mut pending = keys.into_iter();
    let mut pool: JoinSet<(String, Result<Vec<EventRecord>>)> = JoinSet::new();
    for date in pending.by_ref().take(config.max_workers.max(1)) {
        spawn_worker(&mut pool, date, fetcher.clone(), config.task_timeout);
    }

    while let Some(joined) = pool.join_next().await {
        let (date, outcome) = joined?;
        match outcome {
            Ok(records) => {
                info_time!("Completed scraping for {date}, got {} entries", records.len());
                table.extend(records);
                checkpoints.on_success(&table).await;
                info_time!(
                    "Table at {} entries after {} dates",
                    table.len(),
                    checkpoints.completed()
                );
            }
            Err(err) => {
                checkpoints.on_failure(&table).await;
                info_time!("Error scraping {date}: {err}");
                failed_dates.push((date, err.to_string()));
            }
        }

        if let Some(date) = pending.next() {
            spawn_worker(&mut pool, date, fetcher.clone(), config.task_timeout);
        }
    }

    checkpoints.finalize(&table).await;
    info_time!(
        "Run finished: {} days merged, {} failed, {} entries total",
        checkpoints.completed(),
        failed_dates.len(),
        table.len()
    );
    for name in checkpoints.failed_writes() {
        info_time!("WARNING: checkpoint write failed: {name}");
    }

    Ok(RunSummary {
        completed_dates: checkpoints.completed(),
        total_records: table.len(),
        failed_dates,
        failed_checkpoints: checkpoints.failed_writes().to_vec(),
    })
}

fn spawn_worker(
    pool: &mut JoinSet<(String, Result<Vec<EventRecord>>)>,
    date: String,
    fetcher: Arc<dyn PageFetcher>,
    limit: Duration,
) {
    pool.spawn(async move {
        let outcome = scrape_day(fetcher.as_ref(), &date, limit).await;
        (date, outcome)
    });
}

/// One unit of work: fetch the day's page and parse its rows. The limit
/// covers both steps so a hung fetch cannot hold a pool slot forever.
async fn scrape_day(
    fetcher: &dyn PageFetcher,
    date: &str,
    limit: Duration,
) -> Result<Vec<EventRecord>> {
    let task = async {
        let html = fetcher.fetch_day(date).await?;
        parse_calendar(html).await
    };
    match tokio::time::timeout(limit, task).await {
        Ok(outcome) => outcome,
        Err(_) => Err(Error::TaskTimeout(limit.as_secs())),
    }
}
