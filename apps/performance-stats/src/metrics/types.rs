//! Core types for performance metrics.

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_YEARLY_DAYS;

/// Options for a single metrics evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsOptions {
    /// Trading periods per year; scales every annualized figure (default 252).
    pub yearly_days: u32,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            yearly_days: DEFAULT_YEARLY_DAYS,
        }
    }
}

impl MetricsOptions {
    /// Options with a custom number of periods per year.
    #[must_use]
    pub const fn with_yearly_days(yearly_days: u32) -> Self {
        Self { yearly_days }
    }
}

/// Fixed-schema statistics over a return series.
///
/// Every field is present for every input; a degenerate series (empty, zero
/// variance or all zero) yields the all-zero record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    // Return metrics
    /// Sum of returns.
    pub absolute_return: f64,
    /// Mean return times periods per year.
    pub annual_return: f64,

    // Risk-adjusted metrics
    /// Sharpe ratio, clamped to [-5, 10] (2 decimals).
    pub sharpe: f64,
    /// Largest distance of the cumulative curve below its running maximum.
    pub max_drawdown: f64,
    /// Calmar ratio, clamped to [-10, 20] (2 decimals); 10 without drawdown.
    pub calmar: f64,

    // Period statistics
    /// Fraction of periods with a non-negative return.
    pub win_rate: f64,
    /// Mean non-negative return over absolute mean loss; 5 without losses.
    pub profit_loss_ratio: f64,
    /// `win_rate * profit_loss_ratio - (1 - win_rate)`.
    pub edge: f64,

    // Volatility
    /// Standard deviation scaled by `sqrt(yearly_days)`.
    pub annual_volatility: f64,
    /// Standard deviation of losing periods scaled by `sqrt(yearly_days)`.
    pub downside_volatility: f64,

    // Curve shape
    /// Fraction of periods with a non-zero return.
    pub nonzero_coverage: f64,
    /// Worst-first fraction of periods to discard before the rest is profitable.
    pub break_even_point: f64,
    /// Occurrences of the most common running-maximum value.
    pub new_high_interval: usize,
    /// Fraction of periods spent at a new high.
    pub new_high_coverage: f64,
    /// Max drawdown over annual volatility.
    pub drawdown_risk: f64,
}

impl PerformanceStats {
    /// Field names in schema order.
    pub const FIELD_NAMES: [&'static str; 15] = [
        "absolute_return",
        "annual_return",
        "sharpe",
        "max_drawdown",
        "calmar",
        "win_rate",
        "profit_loss_ratio",
        "edge",
        "annual_volatility",
        "downside_volatility",
        "nonzero_coverage",
        "break_even_point",
        "new_high_interval",
        "new_high_coverage",
        "drawdown_risk",
    ];

    /// `(name, value)` pairs in schema order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); 15] {
        let values = [
            self.absolute_return,
            self.annual_return,
            self.sharpe,
            self.max_drawdown,
            self.calmar,
            self.win_rate,
            self.profit_loss_ratio,
            self.edge,
            self.annual_volatility,
            self.downside_volatility,
            self.nonzero_coverage,
            self.break_even_point,
            self.new_high_interval as f64,
            self.new_high_coverage,
            self.drawdown_risk,
        ];

        let mut out = [("", 0.0); 15];
        for (slot, (name, value)) in out.iter_mut().zip(Self::FIELD_NAMES.iter().zip(values)) {
            *slot = (*name, value);
        }
        out
    }

    /// Whether every statistic is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|(_, v)| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        assert_eq!(MetricsOptions::default().yearly_days, 252);
        assert_eq!(MetricsOptions::with_yearly_days(365).yearly_days, 365);
    }

    #[test]
    fn test_default_is_zero() {
        assert!(PerformanceStats::default().is_zero());

        let stats = PerformanceStats {
            new_high_interval: 3,
            ..Default::default()
        };
        assert!(!stats.is_zero());
    }

    #[test]
    fn test_fields_follow_schema_order() {
        let stats = PerformanceStats {
            sharpe: 1.5,
            drawdown_risk: 0.25,
            ..Default::default()
        };
        let fields = stats.fields();
        assert_eq!(fields[2], ("sharpe", 1.5));
        assert_eq!(fields[14], ("drawdown_risk", 0.25));
        assert_eq!(
            fields.map(|(name, _)| name),
            PerformanceStats::FIELD_NAMES
        );
    }
}
