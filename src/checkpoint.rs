use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::event::EventRecord;
use crate::{csv, info_time};

/// Terminal snapshot name; every other snapshot derives its name from it.
pub const FINAL_FILE: &str = "forexfactory_calendar_full.csv";
/// Latest-state snapshot, rewritten after every merged day.
pub const TEMP_FILE: &str = "temp_forexfactory_calendar_full.csv";

/// Snapshot policy state for one run.
///
/// Owned by the result-consuming loop, which is the only caller, so
/// writes happen strictly one after another and none of this needs a
/// lock. A failed write is remembered for the end-of-run warning but
/// never stops the run.
pub struct Checkpoints {
    out_dir: PathBuf,
    backup_every_n: usize,
    completed: usize,
    hourly_written: HashSet<String>,
    failed_writes: Vec<String>,
}

impl Checkpoints {
    pub fn new(out_dir: &Path, backup_every_n: usize) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            backup_every_n,
            completed: 0,
            hourly_written: HashSet::new(),
            failed_writes: Vec::new(),
        }
    }

    /// Number of days merged so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Snapshot names whose write failed, in occurrence order.
    pub fn failed_writes(&self) -> &[String] {
        &self.failed_writes
    }

    /// Runs after every successful merge: rewrite the temp snapshot with
    /// the full table, then the numbered backup every Nth day and the
    /// hourly backup the first time each hour bucket is seen.
    pub async fn on_success(&mut self, table: &[EventRecord]) {
        self.completed += 1;
        self.write(TEMP_FILE.to_string(), table).await;

        if self.backup_every_n > 0 && self.completed % self.backup_every_n == 0 {
            let name = format!("backup_{}_{FINAL_FILE}", self.completed);
            self.write(name, table).await;
        }

        let bucket = Local::now().format("%Y%m%d_%H").to_string();
        if !self.hourly_written.contains(&bucket) {
            let name = format!("hourly_backup_{bucket}_{FINAL_FILE}");
            if self.write(name, table).await {
                self.hourly_written.insert(bucket);
            }
        }
    }

    /// Emergency snapshot after a failed day, if anything was merged.
    pub async fn on_failure(&mut self, table: &[EventRecord]) {
        if table.is_empty() {
            return;
        }
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let name = format!("error_backup_{stamp}_{FINAL_FILE}");
        self.write(name, table).await;
    }

    /// Terminal snapshot, written even when every day failed.
    pub async fn finalize(&mut self, table: &[EventRecord]) {
        self.write(FINAL_FILE.to_string(), table).await;
    }

    async fn write(&mut self, name: String, table: &[EventRecord]) -> bool {
        let path = self.out_dir.join(&name);
        match csv::write_atomic(&path, &csv::to_csv_string(table)).await {
            Ok(()) => {
                info_time!("Saved {} entries to {}", table.len(), name);
                true
            }
            Err(err) => {
                info_time!("Failed to write checkpoint {}: {}", name, err);
                self.failed_writes.push(name);
                false
            }
        }
    }
}
