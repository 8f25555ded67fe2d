//! Return series model shared by the metrics, rolling and drawdown components.
//!
//! - [`DatedSeries`]: validated date-indexed periodic returns
//! - [`curve`]: cumulative, running-maximum and underwater curves

pub mod curve;
mod dated;

pub use curve::{cumulative, running_max, underwater};
pub use dated::{DatedSeries, parse_dates};
