//! Service layer: the aggregations behind each dashboard section.
//!
//! Every function here is a pure transformation of the (already filtered)
//! records it is given; none of them mutates its input or keeps state
//! between render passes.

pub mod breakdowns;
pub mod daily;
pub mod dashboard;
pub mod rfm;

pub use breakdowns::{compute_by_hour, compute_by_season, compute_by_weekday, compute_by_year_month};
pub use daily::{
    compute_casual_totals, compute_daily_totals, compute_metrics, compute_registered_totals,
};
pub use dashboard::{build_dashboard_data, compute_dashboard_data};
pub use rfm::compute_rfm;
