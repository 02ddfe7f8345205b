//! Location Resolver
//!
//! Synthesizes an input feature vector for farmers who supply a location
//! instead of raw measurements. Region lookup is delegated to the store;
//! the caller's temperature reading then overrides the historical value,
//! since it is live rather than an average.

use crate::schema::{FeatureVector, TEMPERATURE_INDEX};
use crate::store::ReferenceStore;

/// Resolve (state, district, season) to representative features with the
/// live temperature substituted in. None when the region is unknown at both
/// fallback levels; surface that as "no data for this location".
pub fn resolve(
    store: &ReferenceStore,
    state: &str,
    district: &str,
    season: &str,
    temperature: f64,
) -> Option<FeatureVector> {
    let mut features = store.query_by_region(state, district, season)?;
    if let Some(slot) = features.get_mut(TEMPERATURE_INDEX) {
        *slot = temperature;
    }
    Some(features)
}
