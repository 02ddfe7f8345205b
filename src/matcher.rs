//! Top-N Crop Matching
//!
//! Normalizes the query vector, computes Euclidean distance to every scaled
//! reference record in parallel, and keeps the N closest. Distance maps to a
//! similarity score of `100 - 100 * d`, which may go negative for very
//! distant inputs; callers must tolerate that rather than expect a clamp.
//!
//! Linear scan is O(records × dimensions) per query, fine at tens of
//! thousands of rows. A spatial index would be the first optimization at
//! larger scale, as long as tie order (load order) stays observable.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::MatchError;
use crate::store::ReferenceStore;
use crate::tips::{crop_tips, TipRecord};

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub crop: String,
    /// 100 = identical conditions; decreases with distance, can be negative.
    pub similarity: f64,
    /// None when no advisory exists for the crop.
    pub tips: Option<&'static TipRecord>,
}

/// Rank the `n` closest reference records for a raw (unscaled) input.
///
/// Empty or degraded store yields an empty vec. Ties on distance keep load
/// order. Fails only on a wrong-length input.
pub fn top_matches(
    store: &ReferenceStore,
    raw: &[f64],
    n: usize,
) -> Result<Vec<MatchResult>, MatchError> {
    if store.is_empty() || n == 0 {
        return Ok(Vec::new());
    }

    let input = store.scaling().normalize(raw)?;

    let mut distances: Vec<(usize, f64)> = store
        .records()
        .par_iter()
        .enumerate()
        .map(|(idx, record)| (idx, euclidean(&input, &record.features)))
        .collect();

    distances.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    distances.truncate(n);

    Ok(distances
        .into_iter()
        .map(|(idx, distance)| {
            let label = &store.records()[idx].label;
            MatchResult {
                crop: label.clone(),
                similarity: round2(100.0 - distance * 100.0),
                tips: crop_tips(label),
            }
        })
        .collect())
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RawRow;
    use approx::assert_relative_eq;
    use smallvec::smallvec;

    fn two_crop_store() -> ReferenceStore {
        ReferenceStore::from_rows(vec![
            RawRow::new(smallvec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rice"),
            RawRow::new(smallvec![10.0, 10.0, 10.0, 10.0, 10.0, 10.0], "wheat"),
        ])
    }

    #[test]
    fn exact_reference_vector_scores_100() {
        let store = two_crop_store();
        let results = top_matches(&store, &[0.0; 6], 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].crop, "rice");
        assert_relative_eq!(results[0].similarity, 100.0, epsilon = 1e-9);
        assert!(results[0].tips.is_some());
    }

    #[test]
    fn at_most_n_results_sorted_by_similarity() {
        let store = two_crop_store();

        let results = top_matches(&store, &[1.0; 6], 5).unwrap();
        assert_eq!(results.len(), 2); // fewer records than n
        assert!(results[0].similarity >= results[1].similarity);

        let results = top_matches(&store, &[1.0; 6], 1).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn distant_input_can_go_negative() {
        let store = two_crop_store();
        // Far outside the fitted range: distance > 1 in scaled space.
        let results = top_matches(&store, &[1000.0; 6], 2).unwrap();
        assert!(results[1].similarity < 0.0);
    }

    #[test]
    fn ties_keep_load_order() {
        let store = ReferenceStore::from_rows(vec![
            RawRow::new(smallvec![0.0, 0.0], "rice"),
            RawRow::new(smallvec![0.0, 0.0], "wheat"),
            RawRow::new(smallvec![10.0, 10.0], "maize"),
        ]);
        let results = top_matches(&store, &[0.0, 0.0], 2).unwrap();
        assert_eq!(results[0].crop, "rice");
        assert_eq!(results[1].crop, "wheat");
    }

    #[test]
    fn unknown_crop_still_returned_without_tips() {
        let store = ReferenceStore::from_rows(vec![RawRow::new(
            smallvec![1.0, 1.0],
            "samphire",
        )]);
        let results = top_matches(&store, &[1.0, 1.0], 1).unwrap();
        assert_eq!(results[0].crop, "samphire");
        assert!(results[0].tips.is_none());
        assert_relative_eq!(results[0].similarity, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn degraded_store_yields_empty() {
        let store = ReferenceStore::empty();
        let results = top_matches(&store, &[0.0; 7], 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn wrong_dimensionality_is_an_error() {
        let store = two_crop_store();
        assert!(matches!(
            top_matches(&store, &[0.0; 3], 1),
            Err(MatchError::DimensionMismatch { expected: 6, got: 3 })
        ));
    }

    #[test]
    fn similarity_is_rounded_to_two_decimals() {
        let store = two_crop_store();
        let results = top_matches(&store, &[3.0, 4.0, 5.0, 2.0, 7.0, 1.0], 2).unwrap();
        for r in &results {
            assert_relative_eq!(r.similarity, (r.similarity * 100.0).round() / 100.0);
        }
    }
}
