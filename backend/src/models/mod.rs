//! Domain types for the bike rental tables.

pub mod dataset;
pub mod rental;

pub use dataset::{date_span, DateRange, Dataset};
pub use rental::{DailyRecord, HourlyRecord, RentalCounts, RentalRecord};
