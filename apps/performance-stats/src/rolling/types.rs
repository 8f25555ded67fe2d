//! Core types for rolling evaluation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::PerformanceStats;

/// Configuration for rolling evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingConfig {
    /// Window width in calendar days.
    pub window_days: u32,
    /// Leading samples that only warm up and produce no record.
    pub min_periods: usize,
    /// Periods per year; inferred from the dates when `None`.
    pub yearly_days: Option<u32>,
    /// Whether to evaluate windows in parallel.
    pub parallel: bool,
    /// Minimum window count before the parallel path is used.
    pub min_parallel_windows: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            window_days: 252,
            min_periods: 100,
            yearly_days: None,
            parallel: true,
            min_parallel_windows: 64,
        }
    }
}

/// Metrics for one window, tagged with its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingRecord {
    /// `window_end - window_days`.
    pub window_start: NaiveDate,
    /// Date the window ends on (inclusive).
    pub window_end: NaiveDate,
    /// Samples that fell inside the window.
    pub samples: usize,
    /// Statistics over the window.
    #[serde(flatten)]
    pub stats: PerformanceStats,
}
