use std::path::Path;
use tracing::info;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{DailyRecord, Dataset, DateRange, HourlyRecord};
use crate::parsing::csv_parser;

/// Row counts and date span of a freshly loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub bounds: DateRange,
}

impl LoadSummary {
    pub fn new(dataset: &Dataset, bounds: DateRange) -> Self {
        Self {
            daily_rows: dataset.daily.len(),
            hourly_rows: dataset.hourly.len(),
            bounds,
        }
    }
}

/// Unified interface for loading the two rental tables
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load both tables, normalize their order and check key uniqueness.
    ///
    /// Any failure aborts the whole load; there is no partial dataset.
    pub fn load(daily_path: &Path, hourly_path: &Path) -> DashboardResult<Dataset> {
        let daily = Self::load_daily(daily_path)?;
        let hourly = Self::load_hourly(hourly_path)?;
        let dataset = Dataset::new(daily, hourly);

        let bounds = dataset
            .date_bounds()
            .ok_or(DashboardError::EmptyDataset("daily"))?;
        let summary = LoadSummary::new(&dataset, bounds);
        info!(
            daily_rows = summary.daily_rows,
            hourly_rows = summary.hourly_rows,
            min_date = %summary.bounds.start,
            max_date = %summary.bounds.end,
            "Loaded rental dataset"
        );

        Ok(dataset)
    }

    /// Load the daily table sorted by date.
    pub fn load_daily(path: &Path) -> DashboardResult<Vec<DailyRecord>> {
        let mut records = csv_parser::parse_daily_csv(path)?;
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset("daily"));
        }
        normalize_daily(&mut records)?;
        Ok(records)
    }

    /// Load the hourly table sorted by date, then hour.
    pub fn load_hourly(path: &Path) -> DashboardResult<Vec<HourlyRecord>> {
        let mut records = csv_parser::parse_hourly_csv(path)?;
        normalize_hourly(&mut records)?;
        Ok(records)
    }
}

/// Sort chronologically and reject repeated dates.
pub fn normalize_daily(records: &mut [DailyRecord]) -> DashboardResult<()> {
    records.sort_by_key(|r| r.date);
    if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(DashboardError::DuplicateKey {
            table: "daily",
            key: pair[0].date.to_string(),
        });
    }
    Ok(())
}

/// Sort by (date, hour) and reject repeated pairs.
pub fn normalize_hourly(records: &mut [HourlyRecord]) -> DashboardResult<()> {
    records.sort_by_key(|r| (r.date, r.hour));
    if let Some(pair) = records
        .windows(2)
        .find(|w| (w[0].date, w[0].hour) == (w[1].date, w[1].hour))
    {
        return Err(DashboardError::DuplicateKey {
            table: "hourly",
            key: format!("{} hour {}", pair[0].date, pair[0].hour),
        });
    }
    Ok(())
}
