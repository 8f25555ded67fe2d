//! Statistical math utilities for performance metric calculations.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculate mean of a slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Calculate population standard deviation (divides by `n`).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    Some((variance_sum / values.len() as f64).sqrt())
}

/// Round half-to-even at `digits` decimal places.
///
/// Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Clamp into `[min, max]`, then round.
pub fn clamp_round(value: f64, min: f64, max: f64, digits: u32) -> f64 {
    round_to(value.clamp(min, max), digits)
}

/// Number of occurrences of the most frequent value.
///
/// Counts total occurrences anywhere in the slice, not contiguous runs.
pub fn modal_frequency(values: &[f64]) -> usize {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for v in values {
        // -0.0 and 0.0 compare equal and must share a bucket
        let key = if *v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts.into_values().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_std_dev_is_population() {
        let Some(std) = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) else {
            panic!("std_dev should succeed for non-empty values");
        };
        assert!((std - 2.0).abs() < 1e-12);
        assert_eq!(std_dev(&[0.25]), Some(0.0));
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert!((round_to(-2.016_04, 2) + 2.02).abs() < 1e-12);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(f64::MAX, 4), f64::MAX);
    }

    #[test]
    fn test_clamp_round() {
        assert_eq!(clamp_round(12.345, -5.0, 10.0, 2), 10.0);
        assert_eq!(clamp_round(-7.0, -5.0, 10.0, 2), -5.0);
        assert!((clamp_round(1.234_56, -5.0, 10.0, 2) - 1.23).abs() < 1e-12);
    }

    #[test]
    fn test_modal_frequency() {
        assert_eq!(modal_frequency(&[0.5, 0.5, 0.75, 0.5, 1.0, 1.0]), 3);
        assert_eq!(modal_frequency(&[0.0, -0.0, 0.25]), 2);
        assert_eq!(modal_frequency(&[]), 0);
    }
}
