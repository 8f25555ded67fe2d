// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Performance Stats - Rust Core Library
//!
//! Pure function layer from "return series in" to "statistics out" for the
//! Cream trading system.
//!
//! # Components
//!
//! - **Metrics**: fixed-schema statistics over periodic returns
//!   (annualized return, Sharpe, Calmar, max drawdown, win rate, volatility,
//!   break-even point, new-high interval/coverage, drawdown risk)
//! - **Rolling**: the same statistics over calendar-day windows ending on
//!   each date after a warm-up
//! - **Drawdown**: top-N drawdown episodes with peak, valley and recovery dates
//!
//! All computation is synchronous and allocation-local: every call works on
//! its own copy of the input and keeps no state between calls.
//!
//! # Example
//!
//! ```ignore
//! use performance_stats::{MetricsOptions, daily_performance};
//!
//! let returns = [0.01, 0.02, -0.01, 0.03, 0.02, -0.02, 0.01, -0.01, 0.02, 0.01];
//! let stats = daily_performance(&returns, MetricsOptions::default());
//! assert_eq!(stats.win_rate, 0.7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Drawdown episode extraction.
pub mod drawdown;

/// Error types.
pub mod error;

/// Point-in-time performance metrics.
pub mod metrics;

/// Rolling-window performance metrics.
pub mod rolling;

/// Return series model and derived curves.
pub mod series;

/// Tracing subscriber setup.
pub mod telemetry;

pub use config::{ConfigError, StatsConfig, load_config, load_config_from_string};
pub use drawdown::{DrawdownConfig, DrawdownEpisode, DrawdownExtractor, top_drawdowns};
pub use error::{Result, StatsError};
pub use metrics::{
    MetricsOptions, PerformanceCalculator, PerformanceStats, break_even_point, daily_performance,
};
pub use rolling::{
    RollingBuilder, RollingConfig, RollingEvaluator, RollingRecord, rolling_daily_performance,
    yearly_days_from_dates,
};
pub use series::{DatedSeries, parse_dates};
