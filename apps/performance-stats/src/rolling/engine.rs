//! Rolling evaluation engine.

use std::time::Instant;

use chrono::{Days, NaiveDate};
use rayon::prelude::*;
use tracing::{debug, info};

use super::calendar::yearly_days_from_dates;
use super::types::{RollingConfig, RollingRecord};
use crate::error::{Result, StatsError};
use crate::metrics::{MetricsOptions, PerformanceCalculator};
use crate::series::DatedSeries;

/// Rolling evaluation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingEvaluator {
    config: RollingConfig,
}

impl RollingEvaluator {
    /// Create a new rolling evaluator.
    #[must_use]
    pub const fn new(config: RollingConfig) -> Self {
        Self { config }
    }

    /// Access the evaluator configuration.
    #[must_use]
    pub const fn config(&self) -> &RollingConfig {
        &self.config
    }

    /// Lazily evaluate every eligible window in end-date order.
    ///
    /// Parameters are validated before any window is evaluated.
    pub fn records<'a>(
        &self,
        series: &'a DatedSeries,
    ) -> Result<impl Iterator<Item = RollingRecord> + 'a> {
        let calculator = self.calculator(series)?;
        let window_days = self.config.window_days;

        Ok((self.config.min_periods..series.len())
            .map(move |end| evaluate_window(series, &calculator, window_days, end)))
    }

    /// Evaluate every eligible window.
    pub fn evaluate(&self, series: &DatedSeries) -> Result<Vec<RollingRecord>> {
        let calculator = self.calculator(series)?;
        let ends: Vec<usize> = (self.config.min_periods..series.len()).collect();
        let start_time = Instant::now();

        let records = if self.config.parallel && ends.len() >= self.config.min_parallel_windows {
            self.run_parallel(series, &calculator, &ends)
        } else {
            self.run_sequential(series, &calculator, &ends)
        };

        info!(
            windows = records.len(),
            window_days = self.config.window_days,
            yearly_days = calculator.options().yearly_days,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Rolling evaluation complete"
        );

        Ok(records)
    }

    fn calculator(&self, series: &DatedSeries) -> Result<PerformanceCalculator> {
        if self.config.window_days == 0 {
            return Err(StatsError::InvalidParameters {
                message: "window_days must be positive".to_string(),
            });
        }

        let yearly_days = match self.config.yearly_days {
            Some(0) => {
                return Err(StatsError::InvalidParameters {
                    message: "yearly_days must be positive".to_string(),
                });
            }
            Some(days) => days,
            None => yearly_days_from_dates(series.dates()),
        };

        debug!(
            samples = series.len(),
            min_periods = self.config.min_periods,
            yearly_days,
            "Prepared rolling evaluation"
        );

        Ok(PerformanceCalculator::new(MetricsOptions::with_yearly_days(
            yearly_days,
        )))
    }

    fn run_parallel(
        &self,
        series: &DatedSeries,
        calculator: &PerformanceCalculator,
        ends: &[usize],
    ) -> Vec<RollingRecord> {
        ends.par_iter()
            .map(|end| evaluate_window(series, calculator, self.config.window_days, *end))
            .collect()
    }

    fn run_sequential(
        &self,
        series: &DatedSeries,
        calculator: &PerformanceCalculator,
        ends: &[usize],
    ) -> Vec<RollingRecord> {
        ends.iter()
            .map(|end| evaluate_window(series, calculator, self.config.window_days, *end))
            .collect()
    }
}

/// Start date of the window ending on `end`.
fn window_start(end: NaiveDate, window_days: u32) -> NaiveDate {
    end.checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

fn evaluate_window(
    series: &DatedSeries,
    calculator: &PerformanceCalculator,
    window_days: u32,
    end: usize,
) -> RollingRecord {
    let dates = series.dates();
    let window_end = dates[end];
    let window_start = window_start(window_end, window_days);
    let first = dates[..=end].partition_point(|d| *d < window_start);
    let returns = &series.returns()[first..=end];

    RollingRecord {
        window_start,
        window_end,
        samples: returns.len(),
        stats: calculator.calculate(returns),
    }
}

/// Rolling daily performance over a dated return series.
///
/// `yearly_days` is inferred from the dates when `None`.
pub fn rolling_daily_performance(
    series: &DatedSeries,
    window_days: u32,
    min_periods: usize,
    yearly_days: Option<u32>,
) -> Result<Vec<RollingRecord>> {
    RollingEvaluator::new(RollingConfig {
        window_days,
        min_periods,
        yearly_days,
        ..RollingConfig::default()
    })
    .evaluate(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolling::RollingBuilder;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily(returns: &[f64]) -> DatedSeries {
        let start = date(2024, 1, 1);
        let dates = (0..returns.len())
            .map(|i| start + Days::new(i as u64))
            .collect();
        DatedSeries::new(dates, returns.to_vec()).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let series = daily(&[0.01, -0.02, 0.03, 0.01, -0.01, 0.02]);
        let evaluator = RollingBuilder::new()
            .window_days(3)
            .min_periods(2)
            .yearly_days(252)
            .build();

        let records = evaluator.evaluate(&series).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].window_end, date(2024, 1, 3));
        assert_eq!(records[0].window_start, date(2023, 12, 31));
        assert_eq!(records[0].samples, 3);

        assert_eq!(records[3].window_end, date(2024, 1, 6));
        assert_eq!(records[3].window_start, date(2024, 1, 3));
        assert_eq!(records[3].samples, 4);
    }

    #[test]
    fn test_calendar_gaps_shrink_windows() {
        let series = DatedSeries::new(
            vec![
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 10),
                date(2024, 1, 11),
            ],
            vec![0.01, -0.02, 0.03, -0.01],
        )
        .unwrap();
        let records = rolling_daily_performance(&series, 5, 1, Some(252)).unwrap();

        let samples: Vec<usize> = records.iter().map(|r| r.samples).collect();
        assert_eq!(samples, vec![2, 1, 2]);
        assert!(records[1].stats.is_zero());
    }

    #[test]
    fn test_warm_up_longer_than_series() {
        let series = daily(&[0.01, -0.02, 0.03]);
        let records = rolling_daily_performance(&series, 10, 3, Some(252)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_window_matches_direct_calculation() {
        let returns = [0.01, -0.02, 0.03, 0.01, -0.01, 0.02, 0.0, -0.03];
        let series = daily(&returns);
        let records = rolling_daily_performance(&series, 4, 5, Some(252)).unwrap();

        let calculator = PerformanceCalculator::new(MetricsOptions::default());
        let last = records.last().unwrap();
        assert_eq!(last.stats, calculator.calculate(&returns[3..]));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let returns: Vec<f64> = (0..200)
            .map(|i| f64::from((i * 37) % 11) / 100.0 - 0.05)
            .collect();
        let series = daily(&returns);

        let sequential = RollingBuilder::new()
            .window_days(30)
            .min_periods(20)
            .yearly_days(252)
            .parallel(false)
            .build()
            .evaluate(&series)
            .unwrap();
        let parallel = RollingBuilder::new()
            .window_days(30)
            .min_periods(20)
            .yearly_days(252)
            .parallel(true)
            .min_parallel_windows(1)
            .build()
            .evaluate(&series)
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_lazy_records_match_evaluate() {
        let series = daily(&[0.01, -0.02, 0.03, 0.01, -0.01, 0.02]);
        let evaluator = RollingBuilder::new()
            .window_days(2)
            .min_periods(1)
            .yearly_days(252)
            .build();

        let lazy: Vec<RollingRecord> = evaluator.records(&series).unwrap().collect();
        assert_eq!(lazy, evaluator.evaluate(&series).unwrap());
    }

    #[test]
    fn test_missing_return_does_not_poison_windows() {
        let series = daily(&[0.01, -0.02, f64::NAN, 0.01, -0.01, 0.02]);
        let records = rolling_daily_performance(&series, 10, 3, Some(252)).unwrap();

        assert_eq!(records.len(), 3);
        for record in &records {
            for (name, value) in record.stats.fields() {
                assert!(value.is_finite(), "{name} is not finite");
            }
        }

        let filled = daily(&[0.01, -0.02, 0.0, 0.01, -0.01, 0.02]);
        assert_eq!(
            records,
            rolling_daily_performance(&filled, 10, 3, Some(252)).unwrap()
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let series = daily(&[0.01, -0.02]);
        assert!(matches!(
            rolling_daily_performance(&series, 0, 0, None),
            Err(StatsError::InvalidParameters { .. })
        ));
        assert!(matches!(
            rolling_daily_performance(&series, 5, 0, Some(0)),
            Err(StatsError::InvalidParameters { .. })
        ));
    }
}
