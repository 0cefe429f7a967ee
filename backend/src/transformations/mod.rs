//! Row selection over the loaded tables.
//!
//! # Modules
//!
//! - [`filtering`]: Restrict daily and hourly records to a date range
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_dashboard::models::{Dataset, DateRange};
//! use bikeshare_dashboard::transformations::filter_by_date_range;
//!
//! # fn example(dataset: &Dataset, range: DateRange) {
//! let january = filter_by_date_range(&dataset.daily, &range);
//! # }
//! ```

pub mod filtering;

pub use filtering::{filter_by_date_range, resolve_range, FilteredTables};
