//! Trading-calendar inference from observed dates.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::metrics::DEFAULT_YEARLY_DAYS;

/// Periods per year implied by a set of dates.
///
/// Returns the largest number of distinct dates observed in any calendar
/// year. Spans shorter than a year cannot show a full calendar and fall back
/// to 252.
#[must_use]
pub fn yearly_days_from_dates(dates: &[NaiveDate]) -> u32 {
    let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
        return DEFAULT_YEARLY_DAYS;
    };

    let span_days = (*last - *first).num_days();
    if span_days < 365 {
        warn!(
            span_days,
            fallback = DEFAULT_YEARLY_DAYS,
            "Date span shorter than one year, using default yearly days"
        );
        return DEFAULT_YEARLY_DAYS;
    }

    let mut per_year: BTreeMap<i32, Vec<NaiveDate>> = BTreeMap::new();
    for date in dates {
        per_year.entry(date.year()).or_default().push(*date);
    }

    per_year
        .into_values()
        .map(|mut days| {
            days.sort_unstable();
            days.dedup();
            days.len() as u32
        })
        .max()
        .unwrap_or(DEFAULT_YEARLY_DAYS)
}
