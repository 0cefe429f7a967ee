//! Parsers for the cleaned bike rental CSV files.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Read the daily and hourly CSV files into typed records
//! - [`fields`]: Cell-level parsing for dates and month labels
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_dashboard::parsing::csv_parser::parse_daily_csv;
//! use std::path::Path;
//!
//! let days = parse_daily_csv(Path::new("dashboard/day_clean.csv"))
//!     .expect("Failed to parse daily table");
//! ```

pub mod csv_parser;
pub mod fields;


pub use csv_parser::{parse_daily_csv, parse_hourly_csv};
