//! Crop Care Tips
//!
//! Static advisory table keyed by lowercased crop label. Covers the 22 crop
//! classes of the reference dataset plus jute. Lookup is case-insensitive
//! exact match; an unknown crop yields None, never an error, so a
//! recommendation can still be returned without advisory text.

use serde::Serialize;

/// Structured advisory for one crop.
#[derive(Debug, Serialize)]
pub struct TipRecord {
    pub sowing_season: &'static str,
    pub watering: &'static str,
    pub fertilizer: &'static str,
    pub pest_control: &'static str,
    pub harvest: &'static str,
}

/// Look up care tips for a crop label (trimmed, case-insensitive).
pub fn crop_tips(label: &str) -> Option<&'static TipRecord> {
    let needle = label.trim();
    CROP_TIPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, record)| record)
}

static CROP_TIPS: &[(&str, TipRecord)] = &[
    ("rice", TipRecord {
        sowing_season: "June to August",
        watering: "Regular, avoid waterlogging",
        fertilizer: "Urea, DAP, Potash",
        pest_control: "Neem oil, Tricyclazole",
        harvest: "After 110–120 days",
    }),
    ("wheat", TipRecord {
        sowing_season: "November to December",
        watering: "Irrigate at 21-day interval",
        fertilizer: "NPK mix, Zinc Sulphate",
        pest_control: "Chlorpyrifos, neem spray",
        harvest: "After 120–140 days",
    }),
    ("jute", TipRecord {
        sowing_season: "March to May",
        watering: "Frequent light irrigation",
        fertilizer: "Organic compost, Nitrogen-rich fertilizers",
        pest_control: "Use neem extract or cypermethrin",
        harvest: "After 100–120 days (when bottom leaves shed)",
    }),
    ("maize", TipRecord {
        sowing_season: "June to July",
        watering: "Moderate irrigation at key stages",
        fertilizer: "Nitrogen-rich fertilizers early",
        pest_control: "Trichogramma for stem borers",
        harvest: "Ready in 90–100 days",
    }),
    ("cotton", TipRecord {
        sowing_season: "April to May",
        watering: "Weekly irrigation",
        fertilizer: "Potassium and nitrogen rich",
        pest_control: "Bt spray, neem oil",
        harvest: "150–180 days",
    }),
    ("coconut", TipRecord {
        sowing_season: "June to September",
        watering: "Water every 3–5 days",
        fertilizer: "FYM + NPK",
        pest_control: "Control rhinoceros beetle, mite",
        harvest: "After 6–7 years (regular)",
    }),
    ("papaya", TipRecord {
        sowing_season: "March to April",
        watering: "Twice a week",
        fertilizer: "Organic compost, NPK",
        pest_control: "Neem extract, copper oxychloride",
        harvest: "8–10 months",
    }),
    ("orange", TipRecord {
        sowing_season: "June to July",
        watering: "Irrigate every 7–10 days",
        fertilizer: "FYM + micronutrients",
        pest_control: "Oil spray for aphids",
        harvest: "8–12 months",
    }),
    ("apple", TipRecord {
        sowing_season: "January to March",
        watering: "Water every 10–12 days",
        fertilizer: "FYM, boron, urea",
        pest_control: "Spray insecticides, pruning",
        harvest: "6–7 months from flowering",
    }),
    ("muskmelon", TipRecord {
        sowing_season: "February to March",
        watering: "Regular light irrigation",
        fertilizer: "Organic manure, DAP",
        pest_control: "Neem oil, sulfur dust",
        harvest: "2–3 months",
    }),
    ("watermelon", TipRecord {
        sowing_season: "January to March",
        watering: "Every 4–5 days",
        fertilizer: "Balanced NPK",
        pest_control: "Copper-based fungicides",
        harvest: "75–90 days",
    }),
    ("grapes", TipRecord {
        sowing_season: "November to January",
        watering: "2–3 times/week",
        fertilizer: "Phosphorus, zinc, FYM",
        pest_control: "Mite and mealybug spray",
        harvest: "6–8 months",
    }),
    ("mango", TipRecord {
        sowing_season: "July to August",
        watering: "Irrigate every 2–3 weeks",
        fertilizer: "NPK + FYM",
        pest_control: "Mango hopper control",
        harvest: "4–5 months from flowering",
    }),
    ("banana", TipRecord {
        sowing_season: "April to May",
        watering: "Twice a week",
        fertilizer: "Potassium-rich mix",
        pest_control: "Spray monocrotophos",
        harvest: "11–12 months",
    }),
    ("pomegranate", TipRecord {
        sowing_season: "February to March",
        watering: "Weekly",
        fertilizer: "NPK + boron",
        pest_control: "Neem oil, copper spray",
        harvest: "5–7 months",
    }),
    ("lentil", TipRecord {
        sowing_season: "October to November",
        watering: "Every 20 days",
        fertilizer: "Phosphorus-rich",
        pest_control: "Neem oil, pyrethrum",
        harvest: "3.5–4 months",
    }),
    ("blackgram", TipRecord {
        sowing_season: "July to August",
        watering: "Once a week",
        fertilizer: "Organic manure, DAP",
        pest_control: "Neem + Trichoderma",
        harvest: "3 months",
    }),
    ("mungbean", TipRecord {
        sowing_season: "March to April",
        watering: "Every 7–10 days",
        fertilizer: "NPK mix",
        pest_control: "Neem oil",
        harvest: "60–75 days",
    }),
    ("mothbeans", TipRecord {
        sowing_season: "June to July",
        watering: "Drought tolerant",
        fertilizer: "Low fertilizer needs",
        pest_control: "Organic sprays",
        harvest: "65–70 days",
    }),
    ("pigeonpeas", TipRecord {
        sowing_season: "June to July",
        watering: "At flowering & pod filling",
        fertilizer: "NPK and Rhizobium",
        pest_control: "Chlorpyrifos",
        harvest: "5–6 months",
    }),
    ("kidneybeans", TipRecord {
        sowing_season: "March to May",
        watering: "Twice a week",
        fertilizer: "Phosphorus and nitrogen",
        pest_control: "Neem oil",
        harvest: "100–120 days",
    }),
    ("chickpea", TipRecord {
        sowing_season: "October to November",
        watering: "At flowering & pod stage",
        fertilizer: "Zinc, phosphorus",
        pest_control: "Bt spray",
        harvest: "3.5–4 months",
    }),
    ("coffee", TipRecord {
        sowing_season: "June to August",
        watering: "Irrigate at dry spell",
        fertilizer: "NPK + compost",
        pest_control: "Spray copper oxychloride",
        harvest: "9–11 months",
    }),
];
