//! Score value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized score between 0.0 and 100.0 inclusive.
///
/// Section and overall assessment scores use this scale; DSCH dimensions
/// use raw `[0, 1]` fractions instead and convert via [`Score::as_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0.0);

    /// Maximum score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Score, clamping to the valid range.
    ///
    /// Non-finite input clamps to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Score, returning an error if out of range or non-finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Creates a Score from a `[0, 1]` fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
