use std::fmt;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Reading – the three raw sensor values as entered in the form
// ---------------------------------------------------------------------------

/// One set of Pd sensor values. Raw physical units, unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Excitation frequency (Hz).
    pub frequency_hz: f64,
    /// Measured impedance (Ω).
    pub impedance_ohm: f64,
    /// Elapsed measurement time (minutes).
    pub time_min: f64,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            frequency_hz: 100.0,
            impedance_ohm: 2000.0,
            time_min: 10.0,
        }
    }
}

impl Reading {
    /// Feature vector in the order the model was trained on.
    pub fn as_vector(&self) -> [f64; 3] {
        [self.frequency_hz, self.impedance_ohm, self.time_min]
    }
}

// ---------------------------------------------------------------------------
// InputField – which of the three inputs a message refers to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Frequency,
    Impedance,
    Time,
}

impl InputField {
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Frequency => "Frequency",
            InputField::Impedance => "Impedance",
            InputField::Time => "Time",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputField::Frequency => "Hz",
            InputField::Impedance => "Ω",
            InputField::Time => "minutes",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Range / InputLimits – the allowed interval per input
// ---------------------------------------------------------------------------

/// A closed interval; both endpoints are allowed values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Valid interval for each input, in the order they are checked.
///
/// The intervals come from the training distribution of the model artifact,
/// so a bundle may ship its own `limits.json`. The defaults match the ranges
/// the original model was fitted on.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub frequency: Range,
    pub impedance: Range,
    pub time: Range,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            frequency: Range {
                min: 10.0,
                max: 100_000.0,
            },
            impedance: Range {
                min: 1_000.0,
                max: 50_000.0,
            },
            time: Range {
                min: 0.0,
                max: 1_440.0,
            },
        }
    }
}

impl InputLimits {
    /// Check the fields in form order and report the first one out of range.
    /// Later fields are not evaluated once one fails.
    pub fn check(&self, reading: &Reading) -> Result<(), RangeViolation> {
        let checks = [
            (InputField::Frequency, self.frequency, reading.frequency_hz),
            (InputField::Impedance, self.impedance, reading.impedance_ohm),
            (InputField::Time, self.time, reading.time_min),
        ];
        for (field, range, value) in checks {
            if !range.contains(value) {
                return Err(RangeViolation {
                    field,
                    range,
                    value,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RangeViolation – the user-facing rejection
// ---------------------------------------------------------------------------

/// An input fell outside its valid interval. Recoverable by re-entering the
/// value; no prediction is attempted for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "{} must be between {} and {} {} (entered: {})",
    .field.name(),
    .range.min,
    .range.max,
    .field.unit(),
    .value
)]
pub struct RangeViolation {
    pub field: InputField,
    pub range: Range,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
