use chrono::{Duration, NaiveDate};

use crate::{Error, Result};

/// Generates the inclusive list of date keys between `start` and `end`,
/// one per calendar day, formatted the way the calendar URL expects
/// (e.g. `apr20.2017`).
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<String>> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }

    let days = (end - start).num_days() as usize + 1;
    let mut keys = Vec::with_capacity(days);
    let mut current = start;
    while current <= end {
        keys.push(date_key(current));
        current += Duration::days(1);
    }

    Ok(keys)
}

fn date_key(date: NaiveDate) -> String {
    date.format("%b%d.%Y").to_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_of_both_endpoints() {
        let keys = date_range(day(2017, 4, 20), day(2017, 4, 22)).unwrap();
        assert_eq!(keys, ["apr20.2017", "apr21.2017", "apr22.2017"]);
    }

    #[test]
    fn single_day_range() {
        let keys = date_range(day(2019, 11, 11), day(2019, 11, 11)).unwrap();
        assert_eq!(keys, ["nov11.2019"]);
    }

    #[test]
    fn key_count_matches_span() {
        let keys = date_range(day(2017, 4, 20), day(2019, 11, 11)).unwrap();
        assert_eq!(keys.len(), 936);
        assert_eq!(keys.first().unwrap(), "apr20.2017");
        assert_eq!(keys.last().unwrap(), "nov11.2019");
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        let keys = date_range(day(2018, 12, 30), day(2019, 1, 2)).unwrap();
        assert_eq!(
            keys,
            ["dec30.2018", "dec31.2018", "jan01.2019", "jan02.2019"]
        );
    }

    #[test]
    fn start_after_end_is_an_error() {
        let err = date_range(day(2019, 1, 2), day(2019, 1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }
}
