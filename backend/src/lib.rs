//! # Bike Sharing Dashboard
//!
//! Analytics backend for the Capital Bike Sharing rental data.
//!
//! The crate loads the cleaned daily and hourly rental tables once, and for
//! every requested date range recomputes a fixed set of views (daily series,
//! season/hour/weekday breakdowns, monthly registered totals, recency and
//! frequency per weekday) which are served as an HTML dashboard or JSON.
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV reading with polars and per-row field parsing
//! - [`io`]: Dataset loading and normalization
//! - [`transformations`]: Date range resolution and filtering
//! - [`services`]: The aggregations behind each view
//! - [`routes`]: View types and section titles
//! - [`render`]: ECharts options and the HTML page
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: TOML configuration with environment overrides

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod routes;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{DashboardError, DashboardResult};
