//! View types for each dashboard section plus the paths they are served on.

pub mod daily;
pub mod dashboard;
pub mod hourly;
pub mod monthly;
pub mod rfm;
pub mod season;
pub mod weekday;
