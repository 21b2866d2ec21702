//! Positions within an organizational structure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One position (role) in an org structure.
///
/// `id` is an optional caller-assigned identifier. When present it is the
/// position's identity for comparison; when absent, `(title, layer)` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: Option<String>,
    pub title: String,
    /// Depth in the hierarchy. 1 is the top layer.
    pub layer: u32,
    pub reports_to: Option<String>,
    /// Full-time-equivalent headcount for this position (often 1.0, but
    /// pooled roles may carry fractional or multiple FTE).
    pub fte: f64,
    pub annual_cost: f64,
}

impl Position {
    /// Creates a position, validating title, layer, and non-negative
    /// fte and cost.
    pub fn new(
        id: Option<String>,
        title: impl Into<String>,
        layer: u32,
        reports_to: Option<String>,
        fte: f64,
        annual_cost: f64,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if layer == 0 {
            return Err(ValidationError::out_of_range("layer", 1.0, f64::MAX, 0.0));
        }
        if !fte.is_finite() || fte < 0.0 {
            return Err(ValidationError::out_of_range("fte", 0.0, f64::MAX, fte));
        }
        if !annual_cost.is_finite() || annual_cost < 0.0 {
            return Err(ValidationError::out_of_range(
                "annual_cost",
                0.0,
                f64::MAX,
                annual_cost,
            ));
        }
        Ok(Self {
            id,
            title,
            layer,
            reports_to,
            fte,
            annual_cost,
        })
    }

    /// Returns the comparison identity for this position.
    pub fn key(&self) -> PositionKey {
        match &self.id {
            Some(id) => PositionKey::Id(id.clone()),
            None => PositionKey::TitleLayer(self.title.clone(), self.layer),
        }
    }

    /// True if this position manages others, judged by layer only.
    pub fn is_management_layer(&self, deepest_layer: u32) -> bool {
        self.layer < deepest_layer
    }
}

/// Identity used to match positions between two structures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionKey {
    Id(String),
    TitleLayer(String, u32),
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionKey::Id(id) => write!(f, "{}", id),
            PositionKey::TitleLayer(title, layer) => write!(f, "{} (layer {})", title, layer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_blank_title() {
        assert!(Position::new(None, "  ", 1, None, 1.0, 90_000.0).is_err());
    }

    #[test]
    fn position_rejects_layer_zero() {
        assert!(Position::new(None, "CEO", 0, None, 1.0, 250_000.0).is_err());
    }

    #[test]
    fn position_rejects_negative_fte_and_cost() {
        assert!(Position::new(None, "Analyst", 3, None, -1.0, 80_000.0).is_err());
        assert!(Position::new(None, "Analyst", 3, None, 1.0, -80_000.0).is_err());
        assert!(Position::new(None, "Analyst", 3, None, f64::NAN, 80_000.0).is_err());
    }

    #[test]
    fn key_prefers_explicit_id() {
        let with_id =
            Position::new(Some("P-7".into()), "Director", 2, None, 1.0, 150_000.0).unwrap();
        assert_eq!(with_id.key(), PositionKey::Id("P-7".into()));

        let without_id = Position::new(None, "Director", 2, None, 1.0, 150_000.0).unwrap();
        assert_eq!(
            without_id.key(),
            PositionKey::TitleLayer("Director".into(), 2)
        );
    }

    #[test]
    fn same_title_different_layer_yields_different_keys() {
        let a = Position::new(None, "Manager", 2, None, 1.0, 120_000.0).unwrap();
        let b = Position::new(None, "Manager", 3, None, 1.0, 110_000.0).unwrap();
        assert_ne!(a.key(), b.key());
    }
}
