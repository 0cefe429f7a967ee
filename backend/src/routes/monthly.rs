use serde::{Deserialize, Serialize};

use crate::models::RentalCounts;
use crate::parsing::fields::month_label;

// =========================================================
// Year/month breakdown types
// =========================================================

/// Summed counts for one (year, month) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonthTotal {
    pub year: i32,
    pub month: u32,
    #[serde(flatten)]
    pub counts: RentalCounts,
}

impl YearMonthTotal {
    /// Axis label such as `2011-Jan`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.year, month_label(self.month))
    }
}

pub const MONTHLY_SECTION_TITLE: &str = "Sum of Registered User Each Month";
