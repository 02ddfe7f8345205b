//! Soil-Type Advisory
//!
//! Classifies a soil texture from sand/silt/clay fractions by dominant
//! component and maps each type to a suggested crop with a short rationale.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilType {
    Sandy,
    Clayey,
    Silty,
    Loamy,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clayey => "Clayey",
            SoilType::Silty => "Silty",
            SoilType::Loamy => "Loamy",
        }
    }
}

/// Dominant-fraction classification; balanced mixtures fall through to Loamy.
pub fn classify_soil(sand: f64, silt: f64, clay: f64) -> SoilType {
    if sand > silt && sand > clay {
        SoilType::Sandy
    } else if clay > sand && clay > silt {
        SoilType::Clayey
    } else if silt > sand && silt > clay {
        SoilType::Silty
    } else {
        SoilType::Loamy
    }
}

/// Suggested crop and rationale for a soil type.
pub fn crop_for_soil(soil: SoilType) -> (&'static str, &'static str) {
    match soil {
        SoilType::Sandy => (
            "Carrots",
            "Sandy soil drains quickly and suits root crops like carrots.",
        ),
        SoilType::Clayey => ("Rice", "Clayey soil retains water and is good for rice."),
        SoilType::Silty => (
            "Lettuce",
            "Silty soil holds moisture and is great for leafy vegetables like lettuce.",
        ),
        SoilType::Loamy => (
            "Wheat",
            "Loamy soil is balanced and supports cereals like wheat.",
        ),
    }
}
