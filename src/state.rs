use crate::inference::predictor::Prediction;
use crate::reading::{RangeViolation, Reading};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current form values.
    pub reading: Reading,

    /// Result of the most recent successful prediction.
    pub prediction: Option<Prediction>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            reading: Reading::default(),
            prediction: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Record a successful prediction and clear any stale error.
    pub fn set_prediction(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
        self.status_message = None;
    }

    /// Record a rejected input. The previous prediction is dropped so the
    /// display never shows a result that does not match the form.
    pub fn set_violation(&mut self, violation: &RangeViolation) {
        self.prediction = None;
        self.status_message = Some(violation.to_string());
    }

    /// Restore the default form values and clear all output.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{InputField, InputLimits, Range};

    #[test]
    fn violation_clears_a_previous_prediction() {
        let mut state = AppState::default();
        state.set_prediction(Prediction {
            surface_area_m2_per_g: 1.0,
            pore_diameter_nm: 2.0,
            pore_volume_cm3_per_g: 3.0,
        });
        assert!(state.prediction.is_some());

        state.set_violation(&RangeViolation {
            field: InputField::Time,
            range: Range { min: 0.0, max: 1440.0 },
            value: -1.0,
        });
        assert!(state.prediction.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = AppState::default();
        state.reading.frequency_hz = 99.0;
        state.status_message = Some("oops".to_string());
        state.reset();
        assert_eq!(state.reading, Reading::default());
        assert!(state.status_message.is_none());
        // Sanity: defaults themselves pass validation.
        assert!(InputLimits::default().check(&state.reading).is_ok());
    }
}
