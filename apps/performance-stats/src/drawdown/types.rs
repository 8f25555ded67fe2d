//! Core types for drawdown extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Episodes returned unless configured otherwise.
pub const DEFAULT_TOP: usize = 10;

/// Configuration for drawdown extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownConfig {
    /// Maximum number of episodes to extract.
    pub top: usize,
}

impl Default for DrawdownConfig {
    fn default() -> Self {
        Self { top: DEFAULT_TOP }
    }
}

/// A peak-to-valley-to-recovery excursion below a prior high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownEpisode {
    /// Last all-time high before the valley.
    pub peak: NaiveDate,
    /// Trough of the episode.
    pub valley: NaiveDate,
    /// First return to the prior high, `None` while the drawdown is open.
    pub recovery: Option<NaiveDate>,
    /// `cum[valley] - cum[peak]` (never positive).
    pub magnitude: f64,
    /// Calendar days from peak to valley.
    pub drawdown_days: i64,
    /// Calendar days from valley to recovery.
    pub recovery_days: Option<i64>,
    /// Calendar days from peak to recovery.
    pub new_high_days: Option<i64>,
}

impl DrawdownEpisode {
    /// Whether the curve has regained the prior high.
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        self.recovery.is_some()
    }
}
