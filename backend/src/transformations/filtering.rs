use chrono::NaiveDate;
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{DailyRecord, Dataset, DateRange, HourlyRecord, RentalRecord};

/// Keep the records whose date lies in `range` (inclusive), preserving order.
///
/// An inverted range (`start > end`) selects nothing.
pub fn filter_by_date_range<R: RentalRecord + Clone>(records: &[R], range: &DateRange) -> Vec<R> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

/// Turn the optional `start`/`end` a caller asked for into the range to render.
///
/// Missing ends default to the data bounds and out-of-bounds ends are clamped
/// to them. A range that still starts after it ends is rejected.
pub fn resolve_range(
    bounds: &DateRange,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<DateRange> {
    let requested = DateRange::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end));
    let range = requested.clamp_to(bounds);
    if range != requested {
        warn!(
            requested_start = %requested.start,
            requested_end = %requested.end,
            start = %range.start,
            end = %range.end,
            "Requested range clamped to data bounds"
        );
    }

    if range.is_inverted() {
        return Err(DashboardError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(range)
}

/// Daily and hourly rows inside the selected range.
#[derive(Debug, Clone)]
pub struct FilteredTables {
    pub range: DateRange,
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl FilteredTables {
    pub fn new(dataset: &Dataset, range: DateRange) -> Self {
        Self {
            range,
            daily: filter_by_date_range(&dataset.daily, &range),
            hourly: filter_by_date_range(&dataset.hourly, &range),
        }
    }
}
