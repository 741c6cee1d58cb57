// src/date.rs
use std::fmt;

use chrono::NaiveDate;

/// A single fully resolved calendar day and its textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateSpec(NaiveDate);

impl DateSpec {
    pub fn new(date: NaiveDate) -> Self {
        DateSpec(date)
    }

    /// Parse the compact `YYYYMMDD` form used on the command line and in
    /// input/output filenames.
    pub fn parse_compact(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, "%Y%m%d").map(DateSpec)
    }

    /// `YYYYMMDD`, for filenames.
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// `YYYY.MM.DD`, for the date-partitioned output directory.
    pub fn dotted(&self) -> String {
        self.0.format("%Y.%m.%d").to_string()
    }

    /// Start of the covered day, ISO 8601.
    pub fn coverage_start(&self) -> String {
        self.0.format("%Y-%m-%dT00:00:00Z").to_string()
    }

    /// End of the covered day, ISO 8601.
    pub fn coverage_end(&self) -> String {
        self.0.format("%Y-%m-%dT23:59:59Z").to_string()
    }

    /// Value of the time coordinate: whole days since 1970-01-01.
    pub fn days_since_epoch(&self) -> i64 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        self.0.signed_duration_since(epoch).num_days()
    }

    pub fn succ(&self) -> Self {
        DateSpec(self.0.succ_opt().expect("date overflow"))
    }
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// All days from `start` through `end`, inclusive.
pub fn date_range(start: DateSpec, end: DateSpec) -> Vec<DateSpec> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = current.succ();
    }
    dates
}
