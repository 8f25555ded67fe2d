//! Derived curves over a return series.
//!
//! All curves use simple (non-compounding) arithmetic: the cumulative curve is
//! the running sum of returns.

/// Running sum of returns.
#[must_use]
pub fn cumulative(returns: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .scan(0.0, |acc, r| {
            *acc += r;
            Some(*acc)
        })
        .collect()
}

/// Running maximum of a curve.
#[must_use]
pub fn running_max(curve: &[f64]) -> Vec<f64> {
    curve
        .iter()
        .scan(f64::NEG_INFINITY, |peak, v| {
            *peak = peak.max(*v);
            Some(*peak)
        })
        .collect()
}

/// Distance of the cumulative curve below its running maximum.
///
/// Every value is `<= 0`, and exactly `0.0` at a new high.
#[must_use]
pub fn underwater(cum: &[f64]) -> Vec<f64> {
    cum.iter()
        .zip(running_max(cum))
        .map(|(c, peak)| c - peak)
        .collect()
}
