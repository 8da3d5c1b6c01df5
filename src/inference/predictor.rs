use anyhow::{Context, Result};

use super::network::Network;
use super::scaler::Scaler;
use crate::reading::{InputLimits, Reading};

/// The model consumes (frequency, impedance, time).
pub const INPUT_DIM: usize = 3;
/// The model produces (surface area, pore diameter, pore volume).
pub const OUTPUT_DIM: usize = 3;

// ---------------------------------------------------------------------------
// Prediction – the three material properties in physical units
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub surface_area_m2_per_g: f64,
    pub pore_diameter_nm: f64,
    pub pore_volume_cm3_per_g: f64,
}

impl Prediction {
    pub fn surface_area_text(&self) -> String {
        format!("{:.2} m²/g", self.surface_area_m2_per_g)
    }

    pub fn pore_diameter_text(&self) -> String {
        format!("{:.2} nm", self.pore_diameter_nm)
    }

    /// Pore volume gets extra precision; typical values are well below 1.
    pub fn pore_volume_text(&self) -> String {
        format!("{:.4} cm³/g", self.pore_volume_cm3_per_g)
    }
}

// ---------------------------------------------------------------------------
// Predictor – scale in, run the model, scale back out
// ---------------------------------------------------------------------------

/// Owns the loaded artifacts for the lifetime of the process.
///
/// `predict` is exactly the composition
/// `scaler_y.inverse_transform(network.forward(scaler_x.transform(x)))`;
/// there is no other transformation and no state between calls.
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler_x: Scaler,
    network: Network,
    scaler_y: Scaler,
    limits: InputLimits,
}

impl Predictor {
    /// Assemble a predictor, rejecting artifacts whose shapes do not fit
    /// the 3-in / 3-out contract.
    pub fn new(
        scaler_x: Scaler,
        network: Network,
        scaler_y: Scaler,
        limits: InputLimits,
    ) -> Result<Self> {
        scaler_x.validate(INPUT_DIM).context("input scaler")?;
        scaler_y.validate(OUTPUT_DIM).context("target scaler")?;
        network.validate(INPUT_DIM, OUTPUT_DIM).context("model")?;
        Ok(Self {
            scaler_x,
            network,
            scaler_y,
            limits,
        })
    }

    /// The valid interval for each input field.
    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Run one validated reading through the pipeline.
    ///
    /// Callers are expected to have run `limits().check(..)` first; values
    /// outside the fitted ranges still produce a number, just an
    /// extrapolated one.
    pub fn predict(&self, reading: &Reading) -> Prediction {
        let scaled = self.scaler_x.transform(&reading.as_vector());
        let output = self.network.forward(&scaled);
        let physical = self.scaler_y.inverse_transform(&output);
        Prediction {
            surface_area_m2_per_g: physical[0],
            pore_diameter_nm: physical[1],
            pore_volume_cm3_per_g: physical[2],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
