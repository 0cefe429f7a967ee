use serde::{Deserialize, Serialize};

// =========================================================
// Hour-of-day breakdown types
// =========================================================

/// Total rentals for one hour of the day (0-23).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotal {
    pub hour: u32,
    pub cnt: i64,
}

pub const HOUR_SECTION_TITLE: &str = "Most and Least Bike Rentals Each Hour";
