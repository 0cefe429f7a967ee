//! Error types for loading and rendering the dashboard.
//!
//! Every failure in the load → filter → aggregate → render pipeline surfaces
//! as a [`DashboardError`]. Load errors are fatal for the server binary; errors
//! raised while serving a request fail that request as a whole.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors raised while loading data, computing views or reading configuration.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or a column cast failed.
    #[error("failed to read table: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A required column is absent from the input file.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: &'static str, column: String },

    /// A cell could not be interpreted (null, unparsable date, out-of-range value).
    #[error("invalid value in column '{column}' at row {row}: {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },

    /// `cnt` does not equal `casual + registered`.
    #[error(
        "{table} row {row}: cnt ({cnt}) != casual ({casual}) + registered ({registered})"
    )]
    InvariantViolation {
        table: &'static str,
        row: usize,
        casual: i64,
        registered: i64,
        cnt: i64,
    },

    /// Two rows share the same date (daily) or date and hour (hourly).
    #[error("duplicate key {key} in {table} table")]
    DuplicateKey { table: &'static str, key: String },

    /// The table holds no rows at all.
    #[error("{0} table is empty")]
    EmptyDataset(&'static str),

    /// The selected range starts after it ends.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    pub(crate) fn invalid_value(
        row: usize,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        DashboardError::InvalidValue {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the data.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DashboardError::InvalidRange { .. })
    }
}
