use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;

use ffcal::fetch::CalendarFetcher;
use ffcal::{checkpoint, info_time, process, Config, Result};

#[derive(Parser)]
#[command(name = "ffcal", version, about = "Forex Factory economic-calendar scraper")]
struct Cli {
    /// First calendar day to scrape (YYYY-MM-DD)
    #[arg(long, default_value = "2017-04-20")]
    start_date: NaiveDate,

    /// Last calendar day to scrape, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = "2019-11-11")]
    end_date: NaiveDate,

    /// Days fetched in parallel
    #[arg(long, default_value_t = 10)]
    max_workers: usize,

    /// Write a numbered backup snapshot every N completed days
    #[arg(long, default_value_t = 5)]
    backup_every_n: usize,

    /// Directory the CSV snapshots are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Seconds to wait after page load for client-side rendering
    #[arg(long, default_value_t = 5)]
    settle_secs: u64,

    /// Hard per-day limit covering fetch and parse, in seconds
    #[arg(long, default_value_t = 120)]
    task_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        start_date: cli.start_date,
        end_date: cli.end_date,
        max_workers: cli.max_workers,
        backup_every_n: cli.backup_every_n,
        out_dir: cli.out_dir,
        settle: Duration::from_secs(cli.settle_secs),
        task_timeout: Duration::from_secs(cli.task_timeout_secs),
    };

    let start_time = chrono::Local::now();
    let fetcher = Arc::new(CalendarFetcher::new(config.settle)?);
    let summary = process::run(&config, fetcher).await?;

    info_time!(
        start_time,
        "Scraping complete. Saved {} entries to {}",
        summary.total_records,
        checkpoint::FINAL_FILE
    );
    info_time!(
        "Temporary file {} kept as additional backup",
        checkpoint::TEMP_FILE
    );

    Ok(())
}
