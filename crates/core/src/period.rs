use chrono::{Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range for a report query.
///
/// No local validation is performed: an out-of-order or otherwise invalid
/// range is rejected by the remote API, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Create a period covering the given dates, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `count` days leading up to and including today.
    pub fn days(count: u64) -> Self {
        let end = Local::now().date_naive();
        Self {
            start: end - Days::new(count),
            end,
        }
    }

    /// The `count` calendar months leading up to and including today.
    pub fn months(count: u32) -> Self {
        let end = Local::now().date_naive();
        Self {
            start: end - Months::new(count),
            end,
        }
    }

    /// The `count` years leading up to and including today.
    pub fn years(count: u32) -> Self {
        Self::months(count * 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_dates_as_given() {
        let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 1, 31).unwrap();
        let period = Period::new(start, end);
        assert_eq!(period.start, start);
        assert_eq!(period.end, end);
    }

    #[test]
    fn new_does_not_reorder_reversed_ranges() {
        // Invalid ranges are the remote API's problem, not ours.
        let start = NaiveDate::from_ymd_opt(2016, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let period = Period::new(start, end);
        assert!(period.start > period.end);
    }

    #[test]
    fn days_spans_the_requested_count() {
        let period = Period::days(7);
        assert_eq!(period.end - period.start, chrono::Duration::days(7));
    }

    #[test]
    fn days_ends_today() {
        let period = Period::days(30);
        assert_eq!(period.end, Local::now().date_naive());
    }

    #[test]
    fn years_equals_twelve_months() {
        assert_eq!(Period::years(1), Period::months(12));
    }
}
