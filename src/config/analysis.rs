//! Analysis tunables.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ComparatorThresholds, DschConfig, RoiDefaults};

use super::ConfigValidationError;

/// All analyzer tunables in one place.
///
/// Every field has a sensible default, so an empty environment yields a
/// fully working configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub comparator: ComparatorThresholds,
    pub dsch: DschConfig,
    pub roi: RoiDefaults,
}

impl AnalysisConfig {
    /// Semantic validation of tunables.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let weight_sum = self.dsch.structural_weight
            + self.dsch.operational_weight
            + self.dsch.cultural_weight
            + self.dsch.strategic_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigValidationError::DschWeightsMustSumToOne { actual: weight_sum });
        }

        let blend_sum = self.dsch.layer_weight + self.dsch.span_variance_weight;
        if (blend_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigValidationError::ComplexityBlendMustSumToOne { actual: blend_sum });
        }

        if !(0.0..=1.0).contains(&self.dsch.neutral_score) {
            return Err(ConfigValidationError::NeutralScoreOutOfRange {
                actual: self.dsch.neutral_score,
            });
        }

        if self.roi.horizon_years == 0 {
            return Err(ConfigValidationError::ZeroRoiHorizon);
        }
        if !self.roi.discount_rate.is_finite() || self.roi.discount_rate <= -1.0 {
            return Err(ConfigValidationError::InvalidDiscountRate {
                actual: self.roi.discount_rate,
            });
        }

        for (name, value) in [
            ("comparator.cost_change_risk_pct", self.comparator.cost_change_risk_pct),
            ("comparator.removal_fraction_risk", self.comparator.removal_fraction_risk),
            (
                "comparator.fte_reduction_fraction_risk",
                self.comparator.fte_reduction_fraction_risk,
            ),
            (
                "comparator.modification_fraction_risk",
                self.comparator.modification_fraction_risk,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::NegativeThreshold {
                    field: name,
                    actual: value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn skewed_dsch_weights_are_rejected() {
        let mut config = AnalysisConfig::default();
        config.dsch.structural_weight = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::DschWeightsMustSumToOne { .. })
        ));
    }

    #[test]
    fn zero_roi_horizon_is_rejected() {
        let mut config = AnalysisConfig::default();
        config.roi.horizon_years = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroRoiHorizon)
        ));
    }

    #[test]
    fn negative_comparator_threshold_is_rejected() {
        let mut config = AnalysisConfig::default();
        config.comparator.removal_fraction_risk = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_values_match_documented_assumptions() {
        let config = AnalysisConfig::default();
        assert_eq!(config.roi.discount_rate, 0.08);
        assert_eq!(config.roi.horizon_years, 5);
        assert_eq!(config.dsch.structural_weight, 0.35);
        assert_eq!(config.comparator.cost_change_risk_pct, 20.0);
    }
}
