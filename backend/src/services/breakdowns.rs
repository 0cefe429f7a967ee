use std::collections::{BTreeMap, HashMap};

use crate::api::{HourTotal, SeasonTotal, WeekdayMean, YearMonthTotal};
use crate::models::{HourlyRecord, RentalCounts, RentalRecord};

/// Total rentals per season label, largest first (ties by label).
pub fn compute_by_season<R: RentalRecord>(records: &[R]) -> Vec<SeasonTotal> {
    let mut season_groups: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *season_groups.entry(record.season()).or_insert(0) += record.counts().cnt;
    }

    let mut totals: Vec<SeasonTotal> = season_groups
        .into_iter()
        .map(|(season, cnt)| SeasonTotal {
            season: season.to_string(),
            cnt,
        })
        .collect();
    totals.sort_by(|a, b| b.cnt.cmp(&a.cnt).then_with(|| a.season.cmp(&b.season)));
    totals
}

/// Total rentals per hour of day, largest first (ties by hour).
pub fn compute_by_hour(records: &[HourlyRecord]) -> Vec<HourTotal> {
    let mut hour_groups: BTreeMap<u32, i64> = BTreeMap::new();
    for record in records {
        *hour_groups.entry(record.hour).or_insert(0) += record.counts.cnt;
    }

    let mut totals: Vec<HourTotal> = hour_groups
        .into_iter()
        .map(|(hour, cnt)| HourTotal { hour, cnt })
        .collect();
    totals.sort_by(|a, b| b.cnt.cmp(&a.cnt).then(a.hour.cmp(&b.hour)));
    totals
}

/// Mean rentals per weekday label, largest first (ties by label).
pub fn compute_by_weekday<R: RentalRecord>(records: &[R]) -> Vec<WeekdayMean> {
    // (sum, number of rows)
    let mut weekday_groups: HashMap<&str, (i64, usize)> = HashMap::new();
    for record in records {
        let entry = weekday_groups.entry(record.weekday()).or_insert((0, 0));
        entry.0 += record.counts().cnt;
        entry.1 += 1;
    }

    let mut means: Vec<WeekdayMean> = weekday_groups
        .into_iter()
        .map(|(weekday, (sum, days))| WeekdayMean {
            weekday: weekday.to_string(),
            mean_cnt: sum as f64 / days as f64,
            days,
        })
        .collect();
    means.sort_by(|a, b| {
        b.mean_cnt
            .partial_cmp(&a.mean_cnt)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.weekday.cmp(&b.weekday))
    });
    means
}

/// Summed counts per (year, month), in calendar order.
pub fn compute_by_year_month<R: RentalRecord>(records: &[R]) -> Vec<YearMonthTotal> {
    let mut month_groups: BTreeMap<(i32, u32), RentalCounts> = BTreeMap::new();
    for record in records {
        *month_groups.entry(record.year_month()).or_default() += record.counts();
    }

    month_groups
        .into_iter()
        .map(|((year, month), counts)| YearMonthTotal {
            year,
            month,
            counts,
        })
        .collect()
}
