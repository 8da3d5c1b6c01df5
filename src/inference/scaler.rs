use anyhow::{bail, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scaler – a pre-fit affine transform over fixed-length vectors
// ---------------------------------------------------------------------------

/// A fitted feature transform, serialized by the training pipeline.
///
/// Both kinds are affine per element, so `inverse_transform` undoes
/// `transform` exactly (up to floating-point rounding).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// Min-max scaling: maps `[data_min, data_max]` onto `[0, 1]`.
    MinMax {
        data_min: Vec<f64>,
        data_max: Vec<f64>,
    },
    /// Standardization: subtract the mean, divide by the scale.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    /// Number of vector elements this scaler was fitted on.
    pub fn dim(&self) -> usize {
        match self {
            Scaler::MinMax { data_min, .. } => data_min.len(),
            Scaler::Standard { mean, .. } => mean.len(),
        }
    }

    /// Reject scalers that cannot be applied: wrong dimension, a collapsed
    /// min-max span, or a zero standard scale.
    pub fn validate(&self, expected_dim: usize) -> Result<()> {
        match self {
            Scaler::MinMax { data_min, data_max } => {
                if data_min.len() != expected_dim || data_max.len() != expected_dim {
                    bail!(
                        "min-max scaler has {}/{} parameters, expected {expected_dim}",
                        data_min.len(),
                        data_max.len()
                    );
                }
                for (i, (lo, hi)) in data_min.iter().zip(data_max).enumerate() {
                    if !(hi > lo) {
                        bail!("feature {i}: data_max ({hi}) must exceed data_min ({lo})");
                    }
                }
            }
            Scaler::Standard { mean, scale } => {
                if mean.len() != expected_dim || scale.len() != expected_dim {
                    bail!(
                        "standard scaler has {}/{} parameters, expected {expected_dim}",
                        mean.len(),
                        scale.len()
                    );
                }
                for (i, s) in scale.iter().enumerate() {
                    if *s == 0.0 || !s.is_finite() {
                        bail!("feature {i}: scale must be finite and non-zero, got {s}");
                    }
                }
            }
        }
        Ok(())
    }

    /// Map raw values into the normalized space the model was trained on.
    pub fn transform(&self, input: &[f64]) -> Vec<f64> {
        debug_assert_eq!(input.len(), self.dim());
        match self {
            Scaler::MinMax { data_min, data_max } => input
                .iter()
                .zip(data_min.iter().zip(data_max))
                .map(|(&x, (&lo, &hi))| (x - lo) / (hi - lo))
                .collect(),
            Scaler::Standard { mean, scale } => input
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(&x, (&m, &s))| (x - m) / s)
                .collect(),
        }
    }

    /// Map normalized values back into physical units.
    pub fn inverse_transform(&self, input: &[f64]) -> Vec<f64> {
        debug_assert_eq!(input.len(), self.dim());
        match self {
            Scaler::MinMax { data_min, data_max } => input
                .iter()
                .zip(data_min.iter().zip(data_max))
                .map(|(&x, (&lo, &hi))| x * (hi - lo) + lo)
                .collect(),
            Scaler::Standard { mean, scale } => input
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(&x, (&m, &s))| x * s + m)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {e}, got {a}");
        }
    }

    fn min_max() -> Scaler {
        Scaler::MinMax {
            data_min: vec![10.0, 1000.0, 0.0],
            data_max: vec![100_000.0, 50_000.0, 1440.0],
        }
    }

    fn standard() -> Scaler {
        Scaler::Standard {
            mean: vec![500.0, 10.0, 1.0],
            scale: vec![100.0, 2.0, 0.5],
        }
    }

    #[test]
    fn min_max_maps_fitted_extremes_onto_unit_interval() {
        let scaler = min_max();
        assert_close(
            &scaler.transform(&[10.0, 1000.0, 0.0]),
            &[0.0, 0.0, 0.0],
        );
        assert_close(
            &scaler.transform(&[100_000.0, 50_000.0, 1440.0]),
            &[1.0, 1.0, 1.0],
        );
    }

    #[test]
    fn standard_transform_centers_and_scales() {
        let scaler = standard();
        assert_close(&scaler.transform(&[500.0, 10.0, 1.0]), &[0.0, 0.0, 0.0]);
        assert_close(&scaler.transform(&[600.0, 14.0, 0.5]), &[1.0, 2.0, -1.0]);
    }

    #[test]
    fn inverse_undoes_transform() {
        for scaler in [min_max(), standard()] {
            let raw = [100.0, 2000.0, 10.0];
            let round_trip = scaler.inverse_transform(&scaler.transform(&raw));
            assert_close(&round_trip, &raw);
        }
    }

    #[test]
    fn validate_rejects_dimension_mismatch() {
        assert!(min_max().validate(4).is_err());
        assert!(standard().validate(2).is_err());
        assert!(min_max().validate(3).is_ok());
        assert!(standard().validate(3).is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_parameters() {
        let collapsed = Scaler::MinMax {
            data_min: vec![0.0, 5.0, 0.0],
            data_max: vec![1.0, 5.0, 1.0],
        };
        assert!(collapsed.validate(3).is_err());

        let zero_scale = Scaler::Standard {
            mean: vec![0.0, 0.0, 0.0],
            scale: vec![1.0, 0.0, 1.0],
        };
        assert!(zero_scale.validate(3).is_err());
    }

    #[test]
    fn deserializes_tagged_kinds() {
        let scaler: Scaler = serde_json::from_str(
            r#"{ "kind": "min_max", "data_min": [0.0], "data_max": [1.0] }"#,
        )
        .unwrap();
        assert!(matches!(scaler, Scaler::MinMax { .. }));

        let scaler: Scaler =
            serde_json::from_str(r#"{ "kind": "standard", "mean": [0.0], "scale": [1.0] }"#)
                .unwrap();
        assert!(matches!(scaler, Scaler::Standard { .. }));
    }
}
