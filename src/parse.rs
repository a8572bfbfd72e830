use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::event::EventRecord;
use crate::{Error, Result};

/// Severity labels carry this suffix in the impact cell's title attribute.
const IMPACT_SUFFIX: &str = " Impact Expected";

/// Parses one day's calendar page into records, off the async runtime.
pub async fn parse_calendar(html: String) -> Result<Vec<EventRecord>> {
    spawn_blocking(move || parse_calendar_rows(&html)).await?
}

/// Scans `tr.calendar__row` elements top to bottom. A day-breaker row
/// sets the date label applied to the data rows that follow it and emits
/// nothing itself. A data row needs a non-empty time cell to produce a
/// record; anything else is skipped silently. Record order follows row
/// order on the page.
pub fn parse_calendar_rows(html: &str) -> Result<Vec<EventRecord>> {
    let doc = Html::parse_document(html);

    let row_selector = create_selector("tr.calendar__row")?;
    let day_selector = create_selector("td.calendar__cell span")?;
    let time_selector = create_selector("td.calendar__time span")?;
    let currency_selector = create_selector("td.calendar__currency span")?;
    let impact_selector = create_selector("td.calendar__impact span[title]")?;
    let title_selector = create_selector("td.calendar__event span.calendar__event-title")?;
    let actual_selector = create_selector("td.calendar__actual span")?;
    let forecast_selector = create_selector("td.calendar__forecast span")?;
    let previous_selector = create_selector("td.calendar__previous span")?;

    let mut records = Vec::new();
    let mut current_date = String::new();

    for row in doc.select(&row_selector) {
        if row
            .value()
            .classes()
            .any(|class| class == "calendar__row--day-breaker")
        {
            if let Some(span) = row.select(&day_selector).next() {
                current_date = cell_text(span);
            }
            continue;
        }

        let Some(time) = row.select(&time_selector).next().map(cell_text) else {
            continue;
        };
        if time.is_empty() {
            continue;
        }

        let impact = row
            .select(&impact_selector)
            .next()
            .and_then(|span| span.value().attr("title"))
            .map(|title| title.replace(IMPACT_SUFFIX, ""))
            .unwrap_or_default();

        records.push(EventRecord {
            date: current_date.clone(),
            time,
            currency: select_text(&row, &currency_selector),
            impact,
            event_title: select_text(&row, &title_selector),
            actual: select_text(&row, &actual_selector),
            forecast: select_text(&row, &forecast_selector),
            previous: select_text(&row, &previous_selector),
        });
    }

    Ok(records)
}

fn select_text(row: &ElementRef, selector: &Selector) -> String {
    row.select(selector).next().map(cell_text).unwrap_or_default()
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseBadSelector(sel_str.into()))
}
