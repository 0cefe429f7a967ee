//! The in-memory pair of tables every render pass reads from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rental::{DailyRecord, HourlyRecord, RentalRecord};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `true` when `start > end`, i.e. the range selects nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Restrict both ends to `bounds`, the way a date picker limited to the
    /// data span would.
    pub fn clamp_to(&self, bounds: &DateRange) -> DateRange {
        DateRange {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }

    /// Number of calendar days covered (0 when inverted).
    pub fn num_days(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

/// Daily and hourly tables, each sorted chronologically.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl Dataset {
    pub fn new(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Self {
        Self { daily, hourly }
    }

    /// `[min(date), max(date)]` of the daily table, or `None` when it is empty.
    pub fn date_bounds(&self) -> Option<DateRange> {
        date_span(&self.daily)
    }
}

/// Earliest and latest date among `records`.
pub fn date_span<R: RentalRecord>(records: &[R]) -> Option<DateRange> {
    let mut dates = records.iter().map(RentalRecord::date);
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RentalCounts;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(d: NaiveDate) -> DailyRecord {
        DailyRecord {
            date: d,
            season: "Spring".to_string(),
            weekday: "Sat".to_string(),
            month: 1,
            year: 2011,
            counts: RentalCounts::new(1, 1),
        }
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 3));
        assert!(range.contains(date(2011, 1, 1)));
        assert!(range.contains(date(2011, 1, 3)));
        assert!(!range.contains(date(2011, 1, 4)));
        assert_eq!(range.num_days(), 3);
    }

    #[test]
    fn test_range_clamp_to_bounds() {
        let bounds = DateRange::new(date(2011, 1, 1), date(2012, 12, 31));
        let requested = DateRange::new(date(2010, 6, 1), date(2013, 1, 1));
        assert_eq!(requested.clamp_to(&bounds), bounds);
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        let range = DateRange::new(date(2011, 2, 1), date(2011, 1, 1));
        assert!(range.is_inverted());
        assert_eq!(range.num_days(), 0);
    }

    #[test]
    fn test_date_bounds() {
        let dataset = Dataset::new(
            vec![day(date(2011, 1, 5)), day(date(2011, 1, 1)), day(date(2011, 1, 3))],
            vec![],
        );
        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.start, date(2011, 1, 1));
        assert_eq!(bounds.end, date(2011, 1, 5));
        assert!(Dataset::default().date_bounds().is_none());
    }
}
