/// One calendar row as scraped. Every field is the raw page string,
/// possibly empty; nothing is coerced to numbers or dates.
///
/// `date` is the label taken from the preceding day-breaker row, which
/// is why it is not the same string as the page's date key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub date: String,
    pub time: String,
    pub currency: String,
    pub impact: String,
    pub event_title: String,
    pub actual: String,
    pub forecast: String,
    pub previous: String,
}

impl EventRecord {
    /// Column header shared by every snapshot file.
    pub const HEADER: [&'static str; 8] = [
        "Date",
        "Time",
        "Currency",
        "Impact",
        "Event Title",
        "Actual",
        "Forecast",
        "Previous",
    ];

    /// Field values in header order.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.date,
            &self.time,
            &self.currency,
            &self.impact,
            &self.event_title,
            &self.actual,
            &self.forecast,
            &self.previous,
        ]
    }
}
