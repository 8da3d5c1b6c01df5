use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::network::Network;
use super::predictor::Predictor;
use super::scaler::Scaler;
use crate::reading::InputLimits;

// ---------------------------------------------------------------------------
// Artifact bundle layout
// ---------------------------------------------------------------------------

/// Regression model (layer weights and activations).
pub const MODEL_FILE: &str = "model.json";
/// Forward transform applied to the raw inputs.
pub const SCALER_X_FILE: &str = "scaler_x.json";
/// Transform whose inverse recovers physical output units.
pub const SCALER_Y_FILE: &str = "scaler_y.json";
/// Optional per-bundle input ranges.
pub const LIMITS_FILE: &str = "limits.json";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a model bundle from a directory and assemble the predictor.
///
/// The bundle is read once at startup; any missing or malformed artifact is
/// fatal. `limits.json` is the exception: when absent, the built-in ranges
/// the original model was fitted on are used.
pub fn load_bundle(dir: &Path) -> Result<Predictor> {
    let network: Network = read_json(&dir.join(MODEL_FILE)).context("loading model")?;
    let scaler_x: Scaler = read_json(&dir.join(SCALER_X_FILE)).context("loading input scaler")?;
    let scaler_y: Scaler = read_json(&dir.join(SCALER_Y_FILE)).context("loading target scaler")?;

    let limits_path = dir.join(LIMITS_FILE);
    let limits: InputLimits = if limits_path.exists() {
        read_json(&limits_path).context("loading input limits")?
    } else {
        log::debug!("no {LIMITS_FILE} in bundle, using built-in input ranges");
        InputLimits::default()
    };

    Predictor::new(scaler_x, network, scaler_y, limits)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::reading::Reading;

    const MODEL_JSON: &str = r#"{
        "layers": [
            {
                "weights": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
                "biases": [0.0, 0.0, 0.0],
                "activation": "linear"
            }
        ]
    }"#;

    const SCALER_X_JSON: &str = r#"{
        "kind": "min_max",
        "data_min": [10.0, 1000.0, 0.0],
        "data_max": [100000.0, 50000.0, 1440.0]
    }"#;

    const SCALER_Y_JSON: &str = r#"{
        "kind": "standard",
        "mean": [500.0, 10.0, 1.0],
        "scale": [100.0, 2.0, 0.5]
    }"#;

    /// Fresh directory under the system temp dir, unique per test.
    fn bundle_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "aerogel-predictor-{}-{name}",
            std::process::id()
        ));
        if dir.exists() {
            std::fs::remove_dir_all(&dir).unwrap();
        }
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_core_artifacts(dir: &Path) {
        std::fs::write(dir.join(MODEL_FILE), MODEL_JSON).unwrap();
        std::fs::write(dir.join(SCALER_X_FILE), SCALER_X_JSON).unwrap();
        std::fs::write(dir.join(SCALER_Y_FILE), SCALER_Y_JSON).unwrap();
    }

    #[test]
    fn loads_a_complete_bundle() {
        let dir = bundle_dir("complete");
        write_core_artifacts(&dir);
        std::fs::write(
            dir.join(LIMITS_FILE),
            r#"{ "frequency": { "min": 20, "max": 200 } }"#,
        )
        .unwrap();

        let predictor = load_bundle(&dir).unwrap();
        assert_eq!(predictor.limits().frequency.min, 20.0);
        assert_eq!(predictor.limits().frequency.max, 200.0);
        // Identity network: prediction is just the rescaled input.
        let prediction = predictor.predict(&Reading {
            frequency_hz: 10.0,
            impedance_ohm: 1000.0,
            time_min: 0.0,
        });
        assert!((prediction.surface_area_m2_per_g - 500.0).abs() < 1e-9);
    }

    #[test]
    fn missing_limits_falls_back_to_built_in_ranges() {
        let dir = bundle_dir("no-limits");
        write_core_artifacts(&dir);

        let predictor = load_bundle(&dir).unwrap();
        assert_eq!(predictor.limits().frequency.min, 10.0);
        assert_eq!(predictor.limits().impedance.max, 50_000.0);
    }

    #[test]
    fn missing_model_reports_the_file() {
        let dir = bundle_dir("no-model");
        std::fs::write(dir.join(SCALER_X_FILE), SCALER_X_JSON).unwrap();
        std::fs::write(dir.join(SCALER_Y_FILE), SCALER_Y_JSON).unwrap();

        let err = format!("{:#}", load_bundle(&dir).unwrap_err());
        assert!(err.contains("loading model"), "unexpected error: {err}");
        assert!(err.contains(MODEL_FILE), "unexpected error: {err}");
    }

    #[test]
    fn malformed_scaler_reports_a_parse_error() {
        let dir = bundle_dir("bad-scaler");
        write_core_artifacts(&dir);
        std::fs::write(dir.join(SCALER_X_FILE), "{ not json").unwrap();

        let err = format!("{:#}", load_bundle(&dir).unwrap_err());
        assert!(err.contains("parsing"), "unexpected error: {err}");
        assert!(err.contains(SCALER_X_FILE), "unexpected error: {err}");
    }
}
