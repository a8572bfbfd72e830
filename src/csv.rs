use std::path::{Path, PathBuf};

use tokio::fs;

use crate::event::EventRecord;
use crate::Result;

/// Renders the full table as CSV: header row first, then one row per
/// record in table order. Fields containing the separator, quotes or
/// line breaks are quoted with double-quote escaping.
pub fn to_csv_string(records: &[EventRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    push_row(&mut out, EventRecord::HEADER);
    for record in records {
        push_row(&mut out, record.fields());
    }
    out
}

fn push_row<'a, I>(out: &mut String, row: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut first = true;
    for cell in row {
        if !first {
            out.push(',');
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes to a `.tmp` sibling and renames it over `path`, so a write
/// that fails midway never leaves a truncated file at the target name.
pub async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
