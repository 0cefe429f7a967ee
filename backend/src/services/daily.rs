use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::api::{DailyTotal, DashboardMetrics, DateCount};
use crate::models::{date_span, RentalCounts, RentalRecord};

/// Resample to one point per calendar day.
///
/// The series covers every day from the first to the last date of `records`;
/// days with no rows contribute zero counts.
pub fn compute_daily_totals<R: RentalRecord>(records: &[R]) -> Vec<DailyTotal> {
    let Some(span) = date_span(records) else {
        return vec![];
    };

    let mut by_date: BTreeMap<NaiveDate, RentalCounts> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date()).or_default() += record.counts();
    }

    span.start
        .iter_days()
        .take_while(|date| *date <= span.end)
        .map(|date| DailyTotal {
            date,
            counts: by_date.get(&date).copied().unwrap_or_default(),
        })
        .collect()
}

/// Sum one count per date, largest first (ties by date).
fn totals_by_date<R: RentalRecord>(
    records: &[R],
    pick: impl Fn(&RentalCounts) -> i64,
) -> Vec<DateCount> {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date()).or_insert(0) += pick(&record.counts());
    }

    let mut totals: Vec<DateCount> = by_date
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect();
    totals.sort_by(|a, b| b.count.cmp(&a.count).then(a.date.cmp(&b.date)));
    totals
}

/// Casual rentals per date, descending by count.
pub fn compute_casual_totals<R: RentalRecord>(records: &[R]) -> Vec<DateCount> {
    totals_by_date(records, |c| c.casual)
}

/// Registered rentals per date, descending by count.
pub fn compute_registered_totals<R: RentalRecord>(records: &[R]) -> Vec<DateCount> {
    totals_by_date(records, |c| c.registered)
}

/// Compute the metrics row from the three date-level views.
pub fn compute_metrics(
    daily: &[DailyTotal],
    registered: &[DateCount],
    casual: &[DateCount],
) -> DashboardMetrics {
    DashboardMetrics {
        total_users: daily.iter().map(|d| d.counts.cnt).sum(),
        total_registered_users: registered.iter().map(|d| d.count).sum(),
        total_casual_users: casual.iter().map(|d| d.count).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn day(d: u32, casual: i64, registered: i64) -> DailyRecord {
        DailyRecord {
            date: date(d),
            season: "Spring".to_string(),
            weekday: "Mon".to_string(),
            month: 1,
            year: 2011,
            counts: RentalCounts::new(casual, registered),
        }
    }

    #[test]
    fn test_daily_totals_fill_gaps() {
        let records = vec![day(1, 10, 20), day(4, 5, 15)];
        let totals = compute_daily_totals(&records);

        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].counts.cnt, 30);
        assert_eq!(totals[1].counts, RentalCounts::default());
        assert_eq!(totals[2].date, date(3));
        assert_eq!(totals[3].counts.cnt, 20);
    }

    #[test]
    fn test_daily_totals_empty() {
        let records: Vec<DailyRecord> = vec![];
        assert!(compute_daily_totals(&records).is_empty());
    }

    #[test]
    fn test_casual_totals_sorted_descending() {
        let records = vec![day(1, 10, 20), day(2, 5, 15), day(3, 40, 1)];
        let totals = compute_casual_totals(&records);

        let counts: Vec<i64> = totals.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![40, 10, 5]);
        assert_eq!(totals[0].date, date(3));
    }

    #[test]
    fn test_registered_totals_ties_by_date() {
        let records = vec![day(2, 0, 7), day(1, 0, 7)];
        let totals = compute_registered_totals(&records);
        assert_eq!(totals[0].date, date(1));
        assert_eq!(totals[1].date, date(2));
    }

    #[test]
    fn test_compute_metrics() {
        let records = vec![day(1, 10, 20), day(2, 5, 15)];
        let metrics = compute_metrics(
            &compute_daily_totals(&records),
            &compute_registered_totals(&records),
            &compute_casual_totals(&records),
        );

        assert_eq!(metrics.total_users, 50);
        assert_eq!(metrics.total_registered_users, 35);
        assert_eq!(metrics.total_casual_users, 15);
    }
}
