use serde::{Deserialize, Serialize};

// =========================================================
// Recency / frequency types
// =========================================================

/// Recency and frequency of rentals for one weekday label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfmEntry {
    pub weekday: String,
    /// Days between the latest date in the selection and the latest date of this weekday
    pub recency: i64,
    /// Total rentals on this weekday
    pub frequency: i64,
}

pub const RFM_SECTION_TITLE: &str = "RFM Analysis (Weekday)";
