use chrono::NaiveDate;
use tracing::debug;

use super::breakdowns::{compute_by_hour, compute_by_season, compute_by_weekday, compute_by_year_month};
use super::daily::{
    compute_casual_totals, compute_daily_totals, compute_metrics, compute_registered_totals,
};
use super::rfm::compute_rfm;
use crate::api::DashboardData;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Dataset, DateRange};
use crate::transformations::{resolve_range, FilteredTables};

/// Compute every view from the tables already restricted to the selection.
///
/// All breakdowns read the filtered tables, including the hour, weekday and
/// recency views.
pub fn build_dashboard_data(tables: &FilteredTables, bounds: DateRange) -> DashboardData {
    let daily = compute_daily_totals(&tables.daily);
    let casual_by_date = compute_casual_totals(&tables.daily);
    let registered_by_date = compute_registered_totals(&tables.daily);
    let metrics = compute_metrics(&daily, &registered_by_date, &casual_by_date);

    DashboardData {
        range: tables.range,
        bounds,
        metrics,
        daily,
        casual_by_date,
        registered_by_date,
        by_season: compute_by_season(&tables.daily),
        by_hour: compute_by_hour(&tables.hourly),
        by_weekday: compute_by_weekday(&tables.daily),
        by_year_month: compute_by_year_month(&tables.daily),
        rfm: compute_rfm(&tables.daily),
    }
}

/// One render pass: resolve the requested range, filter, aggregate.
///
/// `start` and `end` default to the data bounds when absent.
pub fn compute_dashboard_data(
    dataset: &Dataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<DashboardData> {
    let bounds = dataset
        .date_bounds()
        .ok_or(DashboardError::EmptyDataset("daily"))?;
    let range = resolve_range(&bounds, start, end)?;

    let tables = FilteredTables::new(dataset, range);
    debug!(
        start = %range.start,
        end = %range.end,
        days = range.num_days(),
        daily_rows = tables.daily.len(),
        hourly_rows = tables.hourly.len(),
        "Computing dashboard views"
    );

    Ok(build_dashboard_data(&tables, bounds))
}
