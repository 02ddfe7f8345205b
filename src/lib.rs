//! Crop Recommender Rust Implementation
//!
//! Distance-based crop recommendation over a reference dataset of known
//! growing conditions:
//! - `schema`: canonical feature order + column alias reconciliation
//! - `scaling`: fitted zero-mean/unit-variance normalization
//! - `store`: Polars-backed reference table with region lookup
//! - `matcher`: parallel top-N Euclidean ranking with similarity scores
//! - `tips` / `soil` / `problems`: static agronomic advisories
//! - `resolver` / `recommender`: location handling and the owning context
//!
//! The store and scaling model are built once at startup and shared
//! read-only; matching is a pure function of that state.

pub mod error;
pub mod matcher;
pub mod problems;
pub mod recommender;
pub mod resolver;
pub mod scaling;
pub mod schema;
pub mod soil;
pub mod store;
pub mod tips;

// Re-export commonly used types
pub use error::MatchError;
pub use matcher::{top_matches, MatchResult};
pub use recommender::{CropRecommender, DEFAULT_TOP_N};
pub use scaling::ScalingModel;
pub use schema::{FeatureVector, FEATURE_COUNT, TEMPERATURE_INDEX};
pub use store::{RawRow, ReferenceRecord, ReferenceStore};
pub use tips::{crop_tips, TipRecord};
