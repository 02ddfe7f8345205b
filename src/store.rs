//! Reference Store — loading and region lookup
//!
//! Loads the crop reference dataset with Polars (CSV or merged Parquet),
//! reconciles column names through the schema alias table, fits the scaling
//! model, and holds the scaled records immutably for the life of the
//! process. A failed load degrades to an empty store instead of aborting:
//! every query then returns empty results.

use std::path::Path;

use polars::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::MatchError;
use crate::scaling::ScalingModel;
use crate::schema::{
    resolve_column, FeatureVector, DISTRICT_ALIASES, FEATURE_ALIASES, FEATURE_COUNT,
    LABEL_ALIASES, SEASON_ALIASES, STATE_ALIASES,
};

/// One reference example: crop label plus features in scaled space.
#[derive(Debug, Clone)]
pub struct ReferenceRecord {
    pub label: String,
    pub features: FeatureVector,
}

/// Administrative-region tag for a row, normalized (trimmed, lowercased).
#[derive(Debug, Clone)]
struct RegionTag {
    state: String,
    district: String,
    season: Option<String>,
}

/// One row as assembled from the dataset, before scaling.
pub struct RawRow {
    pub features: FeatureVector,
    pub label: String,
    region: Option<RegionTag>,
}

impl RawRow {
    pub fn new(features: FeatureVector, label: impl Into<String>) -> Self {
        RawRow { features, label: label.into(), region: None }
    }

    pub fn with_region(
        mut self,
        state: &str,
        district: &str,
        season: Option<&str>,
    ) -> Self {
        self.region = Some(RegionTag {
            state: norm_key(state),
            district: norm_key(district),
            season: season.map(norm_key),
        });
        self
    }
}

/// In-memory reference table, read-only after construction.
pub struct ReferenceStore {
    records: Vec<ReferenceRecord>,
    /// Unscaled rows in load order, kept for region lookups.
    raw_rows: Vec<FeatureVector>,
    scaling: ScalingModel,
    /// (state, district, season) -> first matching row index.
    region_exact: FxHashMap<(String, String, String), usize>,
    /// (state, district) -> first matching row index.
    region_partial: FxHashMap<(String, String), usize>,
    degraded: bool,
}

impl ReferenceStore {
    /// Load and reconcile the reference dataset.
    ///
    /// Format is chosen by extension: `.parquet` for the merged dataset,
    /// CSV otherwise. Fails with `DatasetUnavailable` when the file is
    /// missing, unreadable, or has no recognizable label column.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let path = path.as_ref();
        let df = Self::read_frame(path)?;

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let label_col = resolve_column(LABEL_ALIASES, &columns).ok_or_else(|| {
            MatchError::DatasetUnavailable(format!(
                "no label column in {} (looked for {:?})",
                path.display(),
                LABEL_ALIASES
            ))
        })?;
        let labels = Self::string_column(&df, label_col)?;

        // Resolve each canonical feature; unresolved columns become zeros.
        let mut feature_cols: Vec<Option<Vec<f64>>> = Vec::with_capacity(FEATURE_COUNT);
        for alias in &FEATURE_ALIASES {
            match resolve_column(alias.aliases, &columns) {
                Some(name) => feature_cols.push(Some(Self::numeric_column(&df, name)?)),
                None => {
                    println!(
                        "  Column for '{}' not found, defaulting to 0.0",
                        alias.canonical
                    );
                    feature_cols.push(None);
                }
            }
        }

        // Region columns exist only in the district-level schema revisions.
        let states = resolve_column(STATE_ALIASES, &columns)
            .map(|c| Self::string_column(&df, c))
            .transpose()?;
        let districts = resolve_column(DISTRICT_ALIASES, &columns)
            .map(|c| Self::string_column(&df, c))
            .transpose()?;
        let seasons = resolve_column(SEASON_ALIASES, &columns)
            .map(|c| Self::string_column(&df, c))
            .transpose()?;

        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let Some(label) = labels[i].as_deref() else {
                continue; // unlabeled row is useless as a reference
            };

            let features: FeatureVector = feature_cols
                .iter()
                .map(|col| col.as_ref().map_or(0.0, |v| v[i]))
                .collect();

            let mut row = RawRow::new(features, label.trim());
            if let (Some(states), Some(districts)) = (&states, &districts) {
                if let (Some(state), Some(district)) = (&states[i], &districts[i]) {
                    let season = seasons.as_ref().and_then(|s| s[i].as_deref());
                    row = row.with_region(state, district, season);
                }
            }
            rows.push(row);
        }

        println!("  Reference rows: {}", rows.len());
        Ok(Self::build(rows, false))
    }

    /// Load, degrading to an empty store on any failure.
    ///
    /// This is the constructor the serving layer should use: the process
    /// stays up and every query returns empty results until an operator
    /// fixes the dataset and restarts.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(store) => store,
            Err(e) => {
                println!("  Reference dataset load failed, degrading: {e}");
                Self::empty()
            }
        }
    }

    /// Degraded store: no records, every query empty.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            raw_rows: Vec::new(),
            scaling: ScalingModel::fit(&[], FEATURE_COUNT),
            region_exact: FxHashMap::default(),
            region_partial: FxHashMap::default(),
            degraded: true,
        }
    }

    /// Build a store from pre-assembled rows (also the test seam).
    ///
    /// Fits the scaling model over all rows, scales each record, and indexes
    /// region tags. First row wins when several share a region key.
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        Self::build(rows, false)
    }

    fn build(rows: Vec<RawRow>, degraded: bool) -> Self {
        let raw_rows: Vec<FeatureVector> = rows.iter().map(|r| r.features.clone()).collect();
        let dims = raw_rows.first().map_or(FEATURE_COUNT, |r| r.len());
        let scaling = ScalingModel::fit(&raw_rows, dims);

        let mut records = Vec::with_capacity(rows.len());
        let mut region_exact = FxHashMap::default();
        let mut region_partial = FxHashMap::default();

        for (idx, row) in rows.into_iter().enumerate() {
            // Infallible: rows and model share dimensionality by construction.
            let features = scaling
                .normalize(&row.features)
                .unwrap_or_else(|_| row.features.clone());
            records.push(ReferenceRecord { label: row.label, features });

            if let Some(region) = row.region {
                let partial_key = (region.state.clone(), region.district.clone());
                if let Some(season) = region.season {
                    region_exact
                        .entry((region.state, region.district, season))
                        .or_insert(idx);
                }
                region_partial.entry(partial_key).or_insert(idx);
            }
        }

        Self { records, raw_rows, scaling, region_exact, region_partial, degraded }
    }

    /// Whether the store is serving empty results because the dataset
    /// failed to load.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Scaled records in load order.
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn scaling(&self) -> &ScalingModel {
        &self.scaling
    }

    /// Representative raw feature values for a region.
    ///
    /// Exact (state, district, season) first, then (state, district); all
    /// keys trimmed and compared case-insensitively. Returns the first
    /// matching row's unscaled features in load order, or None.
    pub fn query_by_region(
        &self,
        state: &str,
        district: &str,
        season: &str,
    ) -> Option<FeatureVector> {
        let key = (norm_key(state), norm_key(district), norm_key(season));
        if let Some(&idx) = self.region_exact.get(&key) {
            return Some(self.raw_rows[idx].clone());
        }
        let partial = (key.0, key.1);
        self.region_partial
            .get(&partial)
            .map(|&idx| self.raw_rows[idx].clone())
    }

    fn read_frame(path: &Path) -> Result<DataFrame, MatchError> {
        if !path.exists() {
            return Err(MatchError::DatasetUnavailable(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let is_parquet = path
            .extension()
            .map_or(false, |e| e.eq_ignore_ascii_case("parquet"));

        let result = if is_parquet {
            LazyFrame::scan_parquet(path, Default::default())
                .and_then(|lf| lf.collect())
        } else {
            CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.into()))
                .and_then(|r| r.finish())
        };

        result.map_err(|e| {
            MatchError::DatasetUnavailable(format!("{}: {e}", path.display()))
        })
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, MatchError> {
        let col = df
            .column(name)
            .and_then(|c| c.cast(&DataType::Float64))
            .map_err(|e| MatchError::DatasetUnavailable(format!("column '{name}': {e}")))?;
        let ca = col
            .f64()
            .map_err(|e| MatchError::DatasetUnavailable(format!("column '{name}': {e}")))?;
        Ok(ca.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, MatchError> {
        let col = df
            .column(name)
            .and_then(|c| c.cast(&DataType::String))
            .map_err(|e| MatchError::DatasetUnavailable(format!("column '{name}': {e}")))?;
        let ca = col
            .str()
            .map_err(|e| MatchError::DatasetUnavailable(format!("column '{name}': {e}")))?;
        Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
    }
}

fn norm_key(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn region_rows() -> Vec<RawRow> {
        vec![
            RawRow::new(smallvec![90.0, 42.0, 43.0, 25.5, 80.0, 6.5, 200.0], "rice")
                .with_region("Punjab", "Ludhiana", Some("Kharif")),
            RawRow::new(smallvec![30.0, 60.0, 20.0, 18.0, 60.0, 7.0, 80.0], "wheat")
                .with_region("Punjab", "Ludhiana", Some("Rabi")),
            RawRow::new(smallvec![40.0, 70.0, 30.0, 22.0, 65.0, 6.8, 100.0], "maize")
                .with_region("Karnataka", "Mysuru", Some("Kharif")),
        ]
    }

    #[test]
    fn exact_region_match_wins() {
        let store = ReferenceStore::from_rows(region_rows());
        let features = store.query_by_region("Punjab", "Ludhiana", "Rabi").unwrap();
        assert_eq!(features[0], 30.0);
    }

    #[test]
    fn falls_back_to_state_district() {
        let store = ReferenceStore::from_rows(region_rows());
        // No "Zaid" season recorded for Ludhiana: first Ludhiana row wins.
        let features = store.query_by_region("Punjab", "Ludhiana", "Zaid").unwrap();
        assert_eq!(features[0], 90.0);
    }

    #[test]
    fn region_keys_ignore_case_and_whitespace() {
        let store = ReferenceStore::from_rows(region_rows());
        let a = store.query_by_region("  PUNJAB ", "ludhiana", " kharif").unwrap();
        let b = store.query_by_region("punjab", "Ludhiana", "Kharif").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unmatched_region_is_none() {
        let store = ReferenceStore::from_rows(region_rows());
        assert!(store.query_by_region("Kerala", "Idukki", "Kharif").is_none());
    }

    #[test]
    fn empty_store_is_degraded() {
        let store = ReferenceStore::empty();
        assert!(store.is_degraded());
        assert!(store.is_empty());
        assert!(store.query_by_region("Punjab", "Ludhiana", "Kharif").is_none());
    }

    #[test]
    fn missing_file_degrades_instead_of_panicking() {
        let store = ReferenceStore::load_or_empty("/nonexistent/crops.csv");
        assert!(store.is_degraded());
    }

    #[test]
    fn records_are_scaled_in_load_order() {
        let rows = vec![
            RawRow::new(smallvec![0.0, 0.0], "rice"),
            RawRow::new(smallvec![10.0, 10.0], "wheat"),
        ];
        let store = ReferenceStore::from_rows(rows);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].label, "rice");
        // Scaled space: endpoints of a two-point fit land at -1 / +1.
        assert!((store.records()[0].features[0] + 1.0).abs() < 1e-9);
        assert!((store.records()[1].features[0] - 1.0).abs() < 1e-9);
    }
}
