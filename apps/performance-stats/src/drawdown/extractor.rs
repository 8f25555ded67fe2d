//! Drawdown episode extractor.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::types::{DrawdownConfig, DrawdownEpisode};
use crate::error::{Result, StatsError};
use crate::series::{DatedSeries, cumulative, underwater};

/// Working view over an immutable underwater curve.
///
/// Rounds never touch the curve itself: a resolved episode carves out the open
/// interval between its peak and recovery, an unresolved one moves the end
/// bound back to its peak. Carving preserves the underwater values of the
/// remaining points, since every carved interior lies below the peak that
/// bounds it.
///
/// Carved intervals are disjoint (each later peak is a live high, so it sits
/// outside every earlier interval) and kept sorted by peak, so the remaining
/// points are walked as contiguous ranges between them.
#[derive(Debug)]
struct WorkingCurve<'a> {
    underwater: &'a [f64],
    /// Exclusive end bound.
    end: usize,
    /// Open `(peak, recovery)` intervals removed from the view, sorted by peak.
    carved: Vec<(usize, usize)>,
}

impl<'a> WorkingCurve<'a> {
    fn new(underwater: &'a [f64], rounds: usize) -> Self {
        Self {
            underwater,
            end: underwater.len(),
            carved: Vec::with_capacity(rounds.min(underwater.len())),
        }
    }

    /// Remaining indices in ascending order.
    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let starts =
            std::iter::once(0).chain(self.carved.iter().map(|&(_, recovery)| recovery));
        let stops = self
            .carved
            .iter()
            .map(|&(peak, _)| peak + 1)
            .chain(std::iter::once(self.end));

        starts
            .zip(stops)
            .flat_map(move |(start, stop)| start..stop.min(self.end))
    }

    fn is_empty(&self) -> bool {
        self.indices().next().is_none()
    }

    /// Deepest remaining point, first on ties.
    fn valley(&self) -> Option<usize> {
        self.indices().fold(None, |best, i| match best {
            Some(b) if self.underwater[b] <= self.underwater[i] => Some(b),
            _ => Some(i),
        })
    }

    fn min(&self) -> Option<f64> {
        self.valley().map(|i| self.underwater[i])
    }

    /// Last remaining high strictly before `valley`.
    fn peak_before(&self, valley: usize) -> Option<usize> {
        self.indices()
            .take_while(|i| *i < valley)
            .filter(|i| self.underwater[*i] == 0.0)
            .last()
    }

    /// First remaining high at or after `valley`.
    fn recovery_from(&self, valley: usize) -> Option<usize> {
        self.indices()
            .skip_while(|i| *i < valley)
            .find(|i| self.underwater[*i] == 0.0)
    }

    fn carve(&mut self, peak: usize, recovery: Option<usize>) {
        match recovery {
            Some(recovery) => {
                let at = self.carved.partition_point(|&(p, _)| p < peak);
                self.carved.insert(at, (peak, recovery));
            }
            None => self.end = peak + 1,
        }
    }

    /// Whether another round could find a drawdown.
    fn exhausted(&self) -> bool {
        self.min().is_none_or(|m| m == 0.0)
    }
}

/// Drawdown extractor for dated return series.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawdownExtractor {
    config: DrawdownConfig,
}

impl DrawdownExtractor {
    /// Create a new extractor.
    #[must_use]
    pub const fn new(config: DrawdownConfig) -> Self {
        Self { config }
    }

    /// Access the extractor configuration.
    #[must_use]
    pub const fn config(&self) -> &DrawdownConfig {
        &self.config
    }

    /// Extract up to `top` episodes, deepest remaining trough first.
    ///
    /// A flat or non-decreasing curve yields no episodes.
    pub fn extract(&self, series: &DatedSeries) -> Result<Vec<DrawdownEpisode>> {
        let dates = series.dates();
        let cum = cumulative(series.returns());
        let underwater = underwater(&cum);
        let mut curve = WorkingCurve::new(&underwater, self.config.top);

        let mut episodes = Vec::new();
        if self.config.top == 0 || curve.exhausted() {
            return Ok(episodes);
        }

        for round in 0..self.config.top {
            let Some(valley) = curve.valley() else {
                break;
            };
            let peak = curve
                .peak_before(valley)
                .ok_or(StatsError::MissingPriorHigh {
                    valley: dates[valley],
                })?;
            let recovery = curve.recovery_from(valley);

            let episode = build_episode(
                dates[peak],
                dates[valley],
                recovery.map(|i| dates[i]),
                cum[valley] - cum[peak],
            );
            trace!(
                round,
                peak = %episode.peak,
                valley = %episode.valley,
                magnitude = episode.magnitude,
                recovered = episode.is_recovered(),
                "Found drawdown episode"
            );
            episodes.push(episode);

            curve.carve(peak, recovery);
            if curve.is_empty() || curve.exhausted() {
                break;
            }
        }

        debug!(
            samples = series.len(),
            episodes = episodes.len(),
            "Extracted drawdown episodes"
        );

        Ok(episodes)
    }
}

fn build_episode(
    peak: NaiveDate,
    valley: NaiveDate,
    recovery: Option<NaiveDate>,
    magnitude: f64,
) -> DrawdownEpisode {
    let drawdown_days = (valley - peak).num_days();
    let recovery_days = recovery.map(|r| (r - valley).num_days());

    DrawdownEpisode {
        peak,
        valley,
        recovery,
        magnitude,
        drawdown_days,
        recovery_days,
        new_high_days: recovery_days.map(|days| drawdown_days + days),
    }
}

/// Extract up to `top` drawdown episodes from a dated return series.
pub fn top_drawdowns(series: &DatedSeries, top: usize) -> Result<Vec<DrawdownEpisode>> {
    DrawdownExtractor::new(DrawdownConfig { top }).extract(series)
}
