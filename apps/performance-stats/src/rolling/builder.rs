//! Builder pattern for rolling evaluation configuration.

use super::engine::RollingEvaluator;
use super::types::RollingConfig;

/// Builder for rolling evaluation.
#[derive(Debug, Default)]
pub struct RollingBuilder {
    config: RollingConfig,
}

impl RollingBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub const fn from_config(config: RollingConfig) -> Self {
        Self { config }
    }

    /// Set window width in calendar days.
    #[must_use]
    pub const fn window_days(mut self, days: u32) -> Self {
        self.config.window_days = days;
        self
    }

    /// Set the number of warm-up samples.
    #[must_use]
    pub const fn min_periods(mut self, periods: usize) -> Self {
        self.config.min_periods = periods;
        self
    }

    /// Set periods per year instead of inferring them from the dates.
    #[must_use]
    pub const fn yearly_days(mut self, days: u32) -> Self {
        self.config.yearly_days = Some(days);
        self
    }

    /// Enable or disable parallel window evaluation.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the window count at which evaluation goes parallel.
    #[must_use]
    pub const fn min_parallel_windows(mut self, windows: usize) -> Self {
        self.config.min_parallel_windows = windows;
        self
    }

    /// Build the rolling evaluator.
    #[must_use]
    pub const fn build(self) -> RollingEvaluator {
        RollingEvaluator::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let evaluator = RollingBuilder::new()
            .window_days(90)
            .min_periods(20)
            .yearly_days(365)
            .parallel(false)
            .min_parallel_windows(8)
            .build();

        let config = evaluator.config();
        assert_eq!(config.window_days, 90);
        assert_eq!(config.min_periods, 20);
        assert_eq!(config.yearly_days, Some(365));
        assert!(!config.parallel);
        assert_eq!(config.min_parallel_windows, 8);
    }

    #[test]
    fn test_builder_defaults() {
        let evaluator = RollingBuilder::new().build();
        assert_eq!(*evaluator.config(), RollingConfig::default());
    }
}
