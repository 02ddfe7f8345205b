//! Crop Recommender - owning context for the matching engine
//!
//! Constructed once at process start and shared read-only afterwards; the
//! serving layer owns it and passes it to handlers explicitly. Loading never
//! aborts the process: a failed dataset load degrades to empty results.

use std::path::Path;

use crate::error::MatchError;
use crate::matcher::{top_matches, MatchResult};
use crate::resolver;
use crate::store::ReferenceStore;

/// Default number of matches returned to a farmer.
pub const DEFAULT_TOP_N: usize = 5;

pub struct CropRecommender {
    store: ReferenceStore,
}

impl CropRecommender {
    /// Load the reference dataset, degrading to empty results on failure.
    pub fn new(dataset_path: impl AsRef<Path>) -> Self {
        let path = dataset_path.as_ref();
        println!("Loading crop reference dataset: {}", path.display());
        let store = ReferenceStore::load_or_empty(path);
        Self { store }
    }

    /// Wrap an already-built store (tests, alternate loaders).
    pub fn with_store(store: ReferenceStore) -> Self {
        Self { store }
    }

    /// Whether queries are returning empty results because the dataset
    /// failed to load.
    pub fn is_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Rank the closest crops for direct measurements in canonical order.
    pub fn recommend(&self, raw: &[f64], n: usize) -> Result<Vec<MatchResult>, MatchError> {
        top_matches(&self.store, raw, n)
    }

    /// Rank crops for a farmer-supplied location and live temperature.
    ///
    /// `Ok(None)` means no reference data exists for the region at either
    /// fallback level; it is an absence, not a failure.
    pub fn recommend_for_location(
        &self,
        state: &str,
        district: &str,
        season: &str,
        temperature: f64,
        n: usize,
    ) -> Result<Option<Vec<MatchResult>>, MatchError> {
        let Some(features) = resolver::resolve(&self.store, state, district, season, temperature)
        else {
            return Ok(None);
        };
        top_matches(&self.store, &features, n).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RawRow;
    use smallvec::smallvec;

    fn recommender() -> CropRecommender {
        CropRecommender::with_store(ReferenceStore::from_rows(vec![
            RawRow::new(smallvec![90.0, 42.0, 43.0, 25.5, 80.0, 6.5, 200.0], "rice")
                .with_region("Punjab", "Ludhiana", Some("Kharif")),
            RawRow::new(smallvec![30.0, 60.0, 20.0, 18.0, 60.0, 7.0, 80.0], "wheat")
                .with_region("Punjab", "Ludhiana", Some("Rabi")),
        ]))
    }

    #[test]
    fn direct_measurements_rank_closest_first() {
        let r = recommender();
        let results = r
            .recommend(&[90.0, 42.0, 43.0, 25.5, 80.0, 6.5, 200.0], DEFAULT_TOP_N)
            .unwrap();
        assert_eq!(results[0].crop, "rice");
        assert_eq!(results[0].similarity, 100.0);
    }

    #[test]
    fn location_path_resolves_and_ranks() {
        let r = recommender();
        let results = r
            .recommend_for_location("punjab", "ludhiana", "kharif", 26.0, 2)
            .unwrap()
            .expect("region should resolve");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].crop, "rice");
    }

    #[test]
    fn unknown_location_is_explicit_absence() {
        let r = recommender();
        let results = r
            .recommend_for_location("Kerala", "Idukki", "Kharif", 26.0, 2)
            .unwrap();
        assert!(results.is_none());
    }

    #[test]
    fn degraded_recommender_returns_empty() {
        let r = CropRecommender::new("/nonexistent/crops.csv");
        assert!(r.is_degraded());
        assert!(r.recommend(&[0.0; 7], 5).unwrap().is_empty());
    }
}
