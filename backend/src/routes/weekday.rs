use serde::{Deserialize, Serialize};

// =========================================================
// Weekday breakdown types
// =========================================================

/// Mean daily rentals for one weekday label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayMean {
    pub weekday: String,
    pub mean_cnt: f64,
    /// Number of days averaged
    pub days: usize,
}

pub const WEEKDAY_SECTION_TITLE: &str = "Most and Least Bike Rentals Each Day";
