//! Public API surface for the dashboard.
//!
//! This file consolidates the view types served by the HTTP layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{DateRange, RentalCounts};
pub use crate::routes::daily::DailyTotal;
pub use crate::routes::daily::DashboardMetrics;
pub use crate::routes::daily::DateCount;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::hourly::HourTotal;
pub use crate::routes::monthly::YearMonthTotal;
pub use crate::routes::rfm::RfmEntry;
pub use crate::routes::season::SeasonTotal;
pub use crate::routes::weekday::WeekdayMean;
