//! Error types for performance statistics.
//!
//! Degenerate return series are not errors: the metrics engine maps them to
//! an all-zero record. Errors here cover malformed dated input (rejected
//! before any window is evaluated) and internal invariant failures in the
//! drawdown extractor.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias for performance statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors from series construction, rolling evaluation and drawdown extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A date string could not be parsed.
    #[error("Invalid date '{value}' at position {index}")]
    InvalidDate {
        /// Position of the offending value.
        index: usize,
        /// The raw input.
        value: String,
    },

    /// Dates and returns differ in length.
    #[error("Length mismatch: {dates} dates but {returns} returns")]
    LengthMismatch {
        /// Number of dates supplied.
        dates: usize,
        /// Number of returns supplied.
        returns: usize,
    },

    /// Dates are not strictly increasing.
    #[error("Dates must be strictly increasing: {previous} followed by {current} at position {index}")]
    UnsortedDates {
        /// Position of the out-of-order date.
        index: usize,
        /// Date before the offending position.
        previous: NaiveDate,
        /// Offending date.
        current: NaiveDate,
    },

    /// The same date appears more than once.
    #[error("Duplicate date {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Invalid evaluation parameters.
    #[error("Invalid parameters: {message}")]
    InvalidParameters {
        /// Error message.
        message: String,
    },

    /// No all-time high precedes a detected valley.
    #[error("No prior high before drawdown valley {valley}")]
    MissingPriorHigh {
        /// Date of the valley.
        valley: NaiveDate,
    },
}
