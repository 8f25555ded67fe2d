//! Performance calculator for periodic return series.

use tracing::debug;

use super::constants::{
    CALMAR_MAX, CALMAR_MIN, CALMAR_NO_DRAWDOWN, DIGITS, PROFIT_LOSS_NO_LOSS, RATIO_DIGITS,
    SHARPE_MAX, SHARPE_MIN,
};
use super::math::{clamp_round, mean, modal_frequency, round_to, std_dev};
use super::types::{MetricsOptions, PerformanceStats};
use crate::series::{cumulative, running_max};

/// Performance calculator for periodic returns.
///
/// All arithmetic is simple (non-compounding) and volatility uses the
/// population standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceCalculator {
    options: MetricsOptions,
}

impl PerformanceCalculator {
    /// Create a new performance calculator.
    #[must_use]
    pub const fn new(options: MetricsOptions) -> Self {
        Self { options }
    }

    /// Access the calculator options.
    #[must_use]
    pub const fn options(&self) -> &MetricsOptions {
        &self.options
    }

    /// Calculate all performance metrics.
    #[must_use]
    pub fn calculate(&self, returns: &[f64]) -> PerformanceStats {
        let Some(std) = std_dev(returns) else {
            return PerformanceStats::default();
        };
        if std == 0.0 || returns.iter().all(|r| *r == 0.0) {
            debug!(samples = returns.len(), "Degenerate return series");
            return PerformanceStats::default();
        }

        let n = returns.len() as f64;
        let yearly_days = f64::from(self.options.yearly_days);
        let annualizer = yearly_days.sqrt();

        let total: f64 = returns.iter().sum();
        let avg = total / n;
        let annual_return = avg * yearly_days;
        let sharpe = avg / std * annualizer;

        let cum = cumulative(returns);
        let peaks = running_max(&cum);
        let drawdowns: Vec<f64> = peaks.iter().zip(&cum).map(|(p, c)| p - c).collect();
        let max_drawdown = drawdowns.iter().copied().fold(0.0, f64::max);

        let calmar = if max_drawdown != 0.0 {
            annual_return / max_drawdown
        } else {
            CALMAR_NO_DRAWDOWN
        };

        let (wins, losses): (Vec<f64>, Vec<f64>) = returns.iter().partition(|r| **r >= 0.0);
        let win_rate = wins.len() as f64 / n;
        let avg_loss = mean(&losses).unwrap_or(0.0);
        let profit_loss_ratio = if avg_loss != 0.0 {
            mean(&wins).unwrap_or(0.0) / avg_loss.abs()
        } else {
            PROFIT_LOSS_NO_LOSS
        };
        let edge = win_rate * profit_loss_ratio - (1.0 - win_rate);

        let annual_volatility = std * annualizer;
        let downside_volatility = std_dev(&losses).unwrap_or(0.0) * annualizer;

        let nonzero_coverage = returns.iter().filter(|r| **r != 0.0).count() as f64 / n;
        let new_high_interval = modal_frequency(&peaks);
        let new_high_coverage = drawdowns.iter().filter(|d| **d == 0.0).count() as f64 / n;

        let stats = PerformanceStats {
            absolute_return: round_to(total, DIGITS),
            annual_return: round_to(annual_return, DIGITS),
            sharpe: clamp_round(sharpe, SHARPE_MIN, SHARPE_MAX, RATIO_DIGITS),
            max_drawdown: round_to(max_drawdown, DIGITS),
            calmar: clamp_round(calmar, CALMAR_MIN, CALMAR_MAX, RATIO_DIGITS),
            win_rate: round_to(win_rate, DIGITS),
            profit_loss_ratio: round_to(profit_loss_ratio, DIGITS),
            edge: round_to(edge, DIGITS),
            annual_volatility: round_to(annual_volatility, DIGITS),
            downside_volatility: round_to(downside_volatility, DIGITS),
            nonzero_coverage: round_to(nonzero_coverage, DIGITS),
            break_even_point: round_to(break_even_point(returns), DIGITS),
            new_high_interval,
            new_high_coverage: round_to(new_high_coverage, DIGITS),
            drawdown_risk: round_to(max_drawdown / annual_volatility, DIGITS),
        };

        debug!(
            samples = returns.len(),
            sharpe = stats.sharpe,
            max_drawdown = stats.max_drawdown,
            "Calculated performance stats"
        );

        stats
    }
}

/// Calculate performance statistics over daily (periodic) returns.
#[must_use]
pub fn daily_performance(returns: &[f64], options: MetricsOptions) -> PerformanceStats {
    PerformanceCalculator::new(options).calculate(returns)
}

/// Break-even point of a sequence of outcomes.
///
/// The fraction of outcomes that must be discarded, worst first, before the
/// remainder is net profitable. A losing total never breaks even (`1.0`).
/// Empty input yields `0.0`.
#[must_use]
pub fn break_even_point(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    if returns.iter().sum::<f64>() < 0.0 {
        return 1.0;
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let negative_prefixes = cumulative(&sorted).iter().filter(|c| **c < 0.0).count();
    (negative_prefixes + 1) as f64 / sorted.len() as f64
}
