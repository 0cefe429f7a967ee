use serde::{Deserialize, Serialize};

// =========================================================
// Season breakdown types
// =========================================================

/// Total rentals for one season label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTotal {
    pub season: String,
    pub cnt: i64,
}

pub const SEASON_SECTION_TITLE: &str = "Most and Least Bike Rentals Each Season";
