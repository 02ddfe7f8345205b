use anyhow::{bail, Context, Result};
use crop_recommender_rust::{CropRecommender, FEATURE_COUNT, DEFAULT_TOP_N};

const USAGE: &str = "\
Usage:
  recommend <dataset> <N> <P> <K> <temperature> <humidity> <ph> <rainfall>
  recommend <dataset> --location <state> <district> <season> <temperature>";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("{USAGE}");
    }

    let dataset = &args[0];
    let recommender = CropRecommender::new(dataset);
    if recommender.is_degraded() {
        println!("WARNING: dataset unavailable, all queries return empty results");
    }

    let results = if args.get(1).map(String::as_str) == Some("--location") {
        let [state, district, season, temperature] = &args[2..] else {
            bail!("{USAGE}");
        };
        let temperature: f64 = temperature
            .parse()
            .with_context(|| format!("invalid temperature: {temperature}"))?;

        match recommender.recommend_for_location(state, district, season, temperature, DEFAULT_TOP_N)? {
            Some(results) => results,
            None => {
                println!("No reference data for {state} / {district} ({season})");
                return Ok(());
            }
        }
    } else {
        let measurements: Vec<f64> = args[1..]
            .iter()
            .map(|v| v.parse().with_context(|| format!("invalid measurement: {v}")))
            .collect::<Result<_>>()?;
        if measurements.len() != FEATURE_COUNT {
            bail!("expected {FEATURE_COUNT} measurements, got {}\n{USAGE}", measurements.len());
        }

        recommender.recommend(&measurements, DEFAULT_TOP_N)?
    };

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
