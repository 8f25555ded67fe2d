//! Date-indexed return series.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::error::{Result, StatsError};

/// Periodic returns paired with strictly increasing dates.
///
/// Gaps are expected to be pre-filled with zero returns by the caller; the
/// series never invents missing dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedSeries {
    dates: Vec<NaiveDate>,
    returns: Vec<f64>,
}

impl DatedSeries {
    /// Build a series from already ordered dates and returns.
    ///
    /// Fails if the lengths differ or the dates are not strictly increasing.
    /// Non-finite returns are treated as zero.
    pub fn new(dates: Vec<NaiveDate>, mut returns: Vec<f64>) -> Result<Self> {
        if dates.len() != returns.len() {
            return Err(StatsError::LengthMismatch {
                dates: dates.len(),
                returns: returns.len(),
            });
        }

        for (index, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(StatsError::UnsortedDates {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        for r in &mut returns {
            *r = finite_or_zero(*r);
        }

        Ok(Self { dates, returns })
    }

    /// Build a series from unordered `(date, return)` points.
    ///
    /// Points are sorted by date and non-finite returns are treated as zero.
    /// Duplicate dates are rejected.
    pub fn from_unsorted(mut points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        points.sort_by_key(|(date, _)| *date);

        if let Some(pair) = points.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(StatsError::DuplicateDate { date: pair[0].0 });
        }

        let (dates, returns) = points
            .into_iter()
            .map(|(date, r)| (date, finite_or_zero(r)))
            .unzip();

        Ok(Self { dates, returns })
    }

    /// Dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns aligned with [`Self::dates`].
    #[must_use]
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Whether the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

const fn finite_or_zero(r: f64) -> f64 {
    if r.is_finite() { r } else { 0.0 }
}

/// Parse ISO-8601 date strings.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (truncated to their date).
pub fn parse_dates<S: AsRef<str>>(values: &[S]) -> Result<Vec<NaiveDate>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let value = value.as_ref().trim();
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc3339(value)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
                .ok_or_else(|| StatsError::InvalidDate {
                    index,
                    value: value.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_accepts_increasing_dates() {
        let series = DatedSeries::new(
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 5)],
            vec![0.01, -0.02, 0.0],
        )
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.returns()[1], -0.02);
    }

    #[test]
    fn test_new_zeroes_non_finite_returns() {
        let series = DatedSeries::new(
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)],
            vec![f64::NAN, 0.01, f64::NEG_INFINITY],
        )
        .unwrap();
        assert_eq!(series.returns(), &[0.0, 0.01, 0.0]);
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = DatedSeries::new(vec![date(2024, 1, 1)], vec![0.01, 0.02]).unwrap_err();
        assert_eq!(
            err,
            StatsError::LengthMismatch {
                dates: 1,
                returns: 2
            }
        );
    }

    #[test]
    fn test_new_rejects_unsorted_dates() {
        let err = DatedSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 1)],
            vec![0.01, 0.02],
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::UnsortedDates { index: 1, .. }));
    }

    #[test]
    fn test_from_unsorted_sorts_and_fills() {
        let series = DatedSeries::from_unsorted(vec![
            (date(2024, 1, 3), f64::NAN),
            (date(2024, 1, 1), 0.01),
            (date(2024, 1, 2), 0.02),
        ])
        .unwrap();
        assert_eq!(
            series.dates(),
            &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
        assert_eq!(series.returns(), &[0.01, 0.02, 0.0]);
    }

    #[test]
    fn test_from_unsorted_rejects_duplicates() {
        let err = DatedSeries::from_unsorted(vec![
            (date(2024, 1, 1), 0.01),
            (date(2024, 1, 1), 0.02),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            StatsError::DuplicateDate {
                date: date(2024, 1, 1)
            }
        );
    }

    #[test]
    fn test_parse_dates() {
        let dates = parse_dates(&["2024-01-02", "2024-01-03T15:00:00Z"]).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 1, 3)]);

        let err = parse_dates(&["2024-01-02", "not-a-date"]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidDate {
                index: 1,
                value: "not-a-date".to_string()
            }
        );
    }
}
