//! Canonical Feature Schema and Column Reconciliation
//!
//! The reference dataset has gone through several schema revisions with
//! diverging column names for the same semantic feature. All loading goes
//! through one declared alias table: canonical name -> known historical
//! spellings, resolved once at load time. A feature whose column cannot be
//! resolved defaults to 0.0 for every row instead of failing the load.
//!
//! Canonical feature order (fixed, matches the fitted scaler):
//!   n, p, k, temperature, humidity, ph, rainfall

use smallvec::SmallVec;

/// Number of features in the canonical schema.
pub const FEATURE_COUNT: usize = 7;

/// Position of temperature in the canonical order.
///
/// The location resolver substitutes a live temperature reading at this
/// index after a region lookup.
pub const TEMPERATURE_INDEX: usize = 3;

/// Ordered soil/climate measurements, stack-allocated at canonical size.
pub type FeatureVector = SmallVec<[f64; FEATURE_COUNT]>;

/// One canonical feature column and its known historical names.
pub struct FeatureAlias {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Alias table for the feature columns, in canonical order.
pub static FEATURE_ALIASES: [FeatureAlias; FEATURE_COUNT] = [
    FeatureAlias { canonical: "n", aliases: &["N", "nitrogen", "N_kg_ha"] },
    FeatureAlias { canonical: "p", aliases: &["P", "phosphorus", "P_kg_ha", "P2O5_kg_ha"] },
    FeatureAlias { canonical: "k", aliases: &["K", "potassium", "K_kg_ha", "K2O_kg_ha"] },
    FeatureAlias { canonical: "temperature", aliases: &["temperature", "temp", "temperature_c"] },
    FeatureAlias { canonical: "humidity", aliases: &["humidity", "humidity_pct", "relative_humidity"] },
    FeatureAlias { canonical: "ph", aliases: &["ph", "pH", "ph_value", "soil_ph"] },
    FeatureAlias { canonical: "rainfall", aliases: &["rainfall", "rainfall_mm", "annual_rainfall"] },
];

/// Known names for the crop label column.
pub static LABEL_ALIASES: &[&str] = &["label", "crop", "crop_name"];

/// Known names for the administrative-region columns (present only in the
/// district-level schema revisions).
pub static STATE_ALIASES: &[&str] = &["state", "state_name"];
pub static DISTRICT_ALIASES: &[&str] = &["district", "district_name"];
pub static SEASON_ALIASES: &[&str] = &["season"];

/// Resolve the first alias present among `columns`, case-insensitively.
///
/// Returns the dataset's actual column name so the caller can index into the
/// frame with it.
pub fn resolve_column<'a>(aliases: &[&str], columns: &'a [String]) -> Option<&'a str> {
    for alias in aliases {
        if let Some(name) = columns.iter().find(|c| c.eq_ignore_ascii_case(alias)) {
            return Some(name.as_str());
        }
    }
    None
}
