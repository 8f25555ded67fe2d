//! Rolling calendar-window performance metrics.
//!
//! Slides a window measured in calendar days (not bars) across a dated return
//! series and evaluates the metrics engine once per eligible end date:
//! - Windows are inclusive on both ends: `[end - window_days, end]`
//! - The first `min_periods` dates only warm up and produce no record
//! - Sample counts vary with calendar gaps in the series

mod builder;
mod calendar;
mod engine;
mod types;

pub use builder::RollingBuilder;
pub use calendar::yearly_days_from_dates;
pub use engine::{RollingEvaluator, rolling_daily_performance};
pub use types::{RollingConfig, RollingRecord};
