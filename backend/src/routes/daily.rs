use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::RentalCounts;

// =========================================================
// Daily renting types
// =========================================================

/// One calendar day of the resampled daily series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: RentalCounts,
}

/// A single count attached to a date (casual or registered totals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// The three scalars of the metrics row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub total_registered_users: i64,
    pub total_casual_users: i64,
}

/// Section heading for the daily line chart and metrics row
pub const DAILY_SECTION_TITLE: &str = "Daily Bike Renting";
