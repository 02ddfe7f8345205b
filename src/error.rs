//! Error taxonomy for the matching engine
//!
//! Load-time failures are caught once by `ReferenceStore::load_or_empty` and
//! become a persistent degraded state; per-query failures are returned to the
//! caller as structured errors and never abort the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Input vector length does not match the fitted model dimensionality.
    #[error("feature vector has {got} values, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Reference dataset missing or unreadable at load time.
    #[error("reference dataset unavailable: {0}")]
    DatasetUnavailable(String),
}
