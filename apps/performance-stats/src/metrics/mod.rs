//! Performance metrics over a sequence of periodic returns.
//!
//! Implements the fixed statistics record used across the crate:
//! - Absolute and annualized return (simple, non-compounding)
//! - Sharpe and Calmar ratios, clamped against explosive short windows
//! - Maximum drawdown and drawdown risk
//! - Win rate, profit/loss ratio and edge
//! - Annual and downside volatility
//! - Break-even point, new-high interval and new-high coverage

mod calculator;
mod constants;
mod math;
mod types;

pub use calculator::{PerformanceCalculator, break_even_point, daily_performance};
pub use constants::DEFAULT_YEARLY_DAYS;
pub use types::{MetricsOptions, PerformanceStats};
