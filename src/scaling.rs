//! Feature Normalization
//!
//! Zero-mean / unit-variance scaling fitted once from the reference rows at
//! load time. Reference records and query inputs must pass through the same
//! fitted model, in the same feature order, or distance rankings are
//! meaningless. Population standard deviation (ddof = 0) matches how the
//! reference set itself was scaled.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::schema::FeatureVector;

/// Floor for per-feature standard deviation. A constant column would
/// otherwise divide by zero.
pub const MIN_STD: f64 = 1e-9;

/// Per-feature (mean, std) pairs. Immutable after fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingModel {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl ScalingModel {
    /// Fit from raw reference rows.
    ///
    /// All rows must share `dims` features; `dims` is authoritative so an
    /// empty dataset still yields a model of the right shape.
    pub fn fit(rows: &[FeatureVector], dims: usize) -> Self {
        let n = rows.len();
        let mut means = vec![0.0; dims];
        let mut stds = vec![MIN_STD; dims];

        if n > 0 {
            for row in rows {
                for (i, v) in row.iter().enumerate() {
                    means[i] += v;
                }
            }
            for m in &mut means {
                *m /= n as f64;
            }

            let mut variances = vec![0.0; dims];
            for row in rows {
                for (i, v) in row.iter().enumerate() {
                    let d = v - means[i];
                    variances[i] += d * d;
                }
            }
            for (s, var) in stds.iter_mut().zip(&variances) {
                *s = (var / n as f64).sqrt().max(MIN_STD);
            }
        }

        ScalingModel { means, stds }
    }

    /// Fitted dimensionality.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Apply the fitted transform: `(raw[i] - mean[i]) / std[i]`.
    ///
    /// Pure; fails only when the input length disagrees with the fitted
    /// dimensionality.
    pub fn normalize(&self, raw: &[f64]) -> Result<FeatureVector, MatchError> {
        if raw.len() != self.means.len() {
            return Err(MatchError::DimensionMismatch {
                expected: self.means.len(),
                got: raw.len(),
            });
        }

        Ok(raw
            .iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(v, (mean, std))| (v - mean) / std)
            .collect())
    }
}
