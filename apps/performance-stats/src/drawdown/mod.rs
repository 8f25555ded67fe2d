//! Top-N drawdown episode extraction.
//!
//! Walks the underwater curve of a dated return series, repeatedly claiming
//! the deepest remaining trough together with its prior high and recovery,
//! then carving that territory out of the working view so later rounds
//! cannot re-detect it.

mod extractor;
mod types;

pub use extractor::{DrawdownExtractor, top_drawdowns};
pub use types::{DEFAULT_TOP, DrawdownConfig, DrawdownEpisode};
