//! Crop Problem Advisory
//!
//! Static mapping from an observed crop problem to a remediation tip, with a
//! generic fallback so every query gets an answer.

static PROBLEM_ADVICE: &[(&str, &str)] = &[
    (
        "Yellowing leaves",
        "Check nitrogen levels. Try using urea or compost.",
    ),
    (
        "Wilting",
        "Ensure proper watering. Avoid over-irrigation and check for root rot.",
    ),
    (
        "Spots on leaves",
        "Possible fungal infection. Use neem spray or copper-based fungicides.",
    ),
    (
        "Stunted growth",
        "Could be due to phosphorus deficiency. Use compost or DAP.",
    ),
    (
        "Pest infestation",
        "Use natural insecticides or introduce pest predators like ladybugs.",
    ),
];

const FALLBACK_ADVICE: &str = "Consult a local expert or agricultural extension officer.";

/// Advice for an observed problem; unknown issues get the generic fallback.
pub fn problem_advice(issue: &str) -> &'static str {
    let needle = issue.trim();
    PROBLEM_ADVICE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map_or(FALLBACK_ADVICE, |(_, advice)| advice)
}
