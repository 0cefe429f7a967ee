//! Rental records as loaded from the cleaned daily and hourly tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Rental counts for one time bucket.
///
/// `cnt` is kept alongside its two components rather than derived, so that
/// the loader can check the `cnt = casual + registered` invariant on the raw
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCounts {
    pub casual: i64,
    pub registered: i64,
    pub cnt: i64,
}

impl RentalCounts {
    /// Build consistent counts from the two user classes.
    pub fn new(casual: i64, registered: i64) -> Self {
        Self {
            casual,
            registered,
            cnt: casual + registered,
        }
    }

    /// `cnt == casual + registered`; an overflowing sum is inconsistent.
    pub fn is_consistent(&self) -> bool {
        self.casual.checked_add(self.registered) == Some(self.cnt)
    }
}

impl AddAssign for RentalCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.casual += rhs.casual;
        self.registered += rhs.registered;
        self.cnt += rhs.cnt;
    }
}

/// One row of the daily table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: String,
    pub weekday: String,
    pub month: u32,
    pub year: i32,
    pub counts: RentalCounts,
}

/// One row of the hourly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u32,
    pub season: String,
    pub weekday: String,
    pub month: u32,
    pub year: i32,
    pub counts: RentalCounts,
}

/// Common view over daily and hourly rows used by the range filter and the
/// aggregators that work on either table.
pub trait RentalRecord {
    fn date(&self) -> NaiveDate;
    fn counts(&self) -> RentalCounts;
    fn season(&self) -> &str;
    fn weekday(&self) -> &str;
    /// `(year, month)` bucket of the row.
    fn year_month(&self) -> (i32, u32);
}

impl RentalRecord for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn counts(&self) -> RentalCounts {
        self.counts
    }

    fn season(&self) -> &str {
        &self.season
    }

    fn weekday(&self) -> &str {
        &self.weekday
    }

    fn year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

impl RentalRecord for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn counts(&self) -> RentalCounts {
        self.counts
    }

    fn season(&self) -> &str {
        &self.season
    }

    fn weekday(&self) -> &str {
        &self.weekday
    }

    fn year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_new_is_consistent() {
        let counts = RentalCounts::new(10, 20);
        assert_eq!(counts.cnt, 30);
        assert!(counts.is_consistent());
    }

    #[test]
    fn test_counts_detects_mismatch() {
        let counts = RentalCounts {
            casual: 1,
            registered: 1,
            cnt: 3,
        };
        assert!(!counts.is_consistent());
    }

    #[test]
    fn test_counts_overflow_is_inconsistent() {
        let counts = RentalCounts {
            casual: i64::MAX,
            registered: 1,
            cnt: i64::MIN,
        };
        assert!(!counts.is_consistent());
    }

    #[test]
    fn test_counts_add_assign() {
        let mut total = RentalCounts::default();
        total += RentalCounts::new(10, 20);
        total += RentalCounts::new(5, 15);
        assert_eq!(total, RentalCounts::new(15, 35));
    }

    #[test]
    fn test_hourly_record_year_month() {
        let record = HourlyRecord {
            date: NaiveDate::from_ymd_opt(2012, 7, 4).unwrap(),
            hour: 17,
            season: "Fall".to_string(),
            weekday: "Wed".to_string(),
            month: 7,
            year: 2012,
            counts: RentalCounts::new(100, 400),
        };
        assert_eq!(record.year_month(), (2012, 7));
        assert_eq!(RentalRecord::season(&record), "Fall");
    }
}
