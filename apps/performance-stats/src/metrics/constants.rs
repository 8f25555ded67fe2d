//! Constants for performance metric calculations.

/// Trading periods per year used for annualization unless overridden.
pub const DEFAULT_YEARLY_DAYS: u32 = 252;

/// Decimal places for ordinary statistics.
pub const DIGITS: u32 = 4;
/// Decimal places for clamped ratios (Sharpe, Calmar).
pub const RATIO_DIGITS: u32 = 2;

pub const SHARPE_MIN: f64 = -5.0;
pub const SHARPE_MAX: f64 = 10.0;

pub const CALMAR_MIN: f64 = -10.0;
pub const CALMAR_MAX: f64 = 20.0;
/// Calmar when the curve never draws down.
pub const CALMAR_NO_DRAWDOWN: f64 = 10.0;

/// Profit/loss ratio when there are no losing periods.
pub const PROFIT_LOSS_NO_LOSS: f64 = 5.0;
