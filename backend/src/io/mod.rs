//! Loading the daily and hourly tables into a [`Dataset`](crate::models::Dataset).

pub mod loaders;

pub use loaders::{DatasetLoader, LoadSummary};
