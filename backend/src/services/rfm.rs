use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::api::RfmEntry;
use crate::models::RentalRecord;

/// Recency and frequency of rentals per weekday label.
///
/// `frequency` is the summed `cnt` of the group. `recency` is the number of
/// days from the group's latest date to the latest date of the whole input,
/// so it is never negative. Groups come back ordered by label.
pub fn compute_rfm<R: RentalRecord>(records: &[R]) -> Vec<RfmEntry> {
    // (latest date, summed cnt)
    let mut weekday_groups: BTreeMap<&str, (NaiveDate, i64)> = BTreeMap::new();
    for record in records {
        let entry = weekday_groups
            .entry(record.weekday())
            .or_insert((record.date(), 0));
        entry.0 = entry.0.max(record.date());
        entry.1 += record.counts().cnt;
    }

    let Some(recent_date) = weekday_groups.values().map(|(last, _)| *last).max() else {
        return vec![];
    };

    weekday_groups
        .into_iter()
        .map(|(weekday, (last, frequency))| RfmEntry {
            weekday: weekday.to_string(),
            recency: (recent_date - last).num_days(),
            frequency,
        })
        .collect()
}
