use serde::{Deserialize, Serialize};

use super::daily::{DailyTotal, DashboardMetrics, DateCount};
use super::hourly::HourTotal;
use super::monthly::YearMonthTotal;
use super::rfm::RfmEntry;
use super::season::SeasonTotal;
use super::weekday::WeekdayMean;
use crate::models::DateRange;

// =========================================================
// Complete dashboard payload
// =========================================================

/// Every view computed for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Range the views were computed over
    pub range: DateRange,
    /// Full span of the loaded data (the picker's limits)
    pub bounds: DateRange,
    pub metrics: DashboardMetrics,
    pub daily: Vec<DailyTotal>,
    pub casual_by_date: Vec<DateCount>,
    pub registered_by_date: Vec<DateCount>,
    pub by_season: Vec<SeasonTotal>,
    pub by_hour: Vec<HourTotal>,
    pub by_weekday: Vec<WeekdayMean>,
    pub by_year_month: Vec<YearMonthTotal>,
    pub rfm: Vec<RfmEntry>,
}

/// Page header
pub const DASHBOARD_TITLE: &str = "Capital Bike Sharing Analysis Dashboard";

/// Path of the HTML dashboard
pub const DASHBOARD_PAGE: &str = "/";
/// Path of the JSON payload behind the dashboard
pub const GET_DASHBOARD_DATA: &str = "/v1/dashboard";
/// Path of the date bounds endpoint
pub const GET_DATE_BOUNDS: &str = "/v1/bounds";
/// Path of the sidebar image
pub const LOGO_ASSET: &str = "/assets/logo";
