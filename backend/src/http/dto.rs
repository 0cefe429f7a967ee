//! Data Transfer Objects for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::parsing::fields::parse_date;

/// Query parameters selecting the date range.
///
/// Both ends are optional; an empty value (a cleared date input) counts as
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeQuery {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RangeQuery {
    /// Parse both ends, rejecting values that are not `YYYY-MM-DD` dates.
    pub fn dates(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
        Ok((
            parse_query_date("start", self.start.as_deref())?,
            parse_query_date("end", self.end.as_deref())?,
        ))
    }
}

fn parse_query_date(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {} date: {}", name, value))),
    }
}

/// Date bounds of the loaded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsResponse {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Rows in the daily table
    pub daily_rows: usize,
    /// Rows in the hourly table
    pub hourly_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_absent() {
        let query = RangeQuery {
            start: Some(String::new()),
            end: None,
        };
        assert_eq!(query.dates().unwrap(), (None, None));
    }

    #[test]
    fn test_dates_parsed() {
        let query = RangeQuery {
            start: Some("2011-02-01".to_string()),
            end: Some("2011-03-01".to_string()),
        };
        let (start, end) = query.dates().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2011, 2, 1));
        assert_eq!(end, NaiveDate::from_ymd_opt(2011, 3, 1));
    }

    #[test]
    fn test_garbage_date_rejected() {
        let query = RangeQuery {
            start: Some("yesterday".to_string()),
            end: None,
        };
        assert!(matches!(query.dates(), Err(AppError::BadRequest(_))));
    }
}
