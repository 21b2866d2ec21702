//! Return-on-investment projections for a realignment scenario.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Projection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoiCalculationType {
    /// Undiscounted payback and return over the horizon.
    Simple,
    /// Net present value of savings over the horizon.
    Npv,
}

/// Default financial assumptions used when the request omits them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RoiDefaults {
    pub discount_rate: f64,
    pub horizon_years: u32,
}

impl Default for RoiDefaults {
    fn default() -> Self {
        Self {
            discount_rate: 0.08,
            horizon_years: 5,
        }
    }
}

/// Inputs for an ROI projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    pub calculation_type: RoiCalculationType,
    pub annual_savings: f64,
    pub implementation_cost: f64,
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub horizon_years: Option<u32>,
}

/// ROI projection outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub calculation_type: RoiCalculationType,
    pub annual_savings: f64,
    pub implementation_cost: f64,
    pub horizon_years: u32,
    /// Months to recover the implementation cost. `None` when there are
    /// no savings to recover it from.
    pub payback_months: Option<f64>,
    /// Total return over the horizon as a percentage of the
    /// implementation cost, undiscounted.
    pub roi_percentage: f64,
    /// Net present value of savings over the horizon. Only present for
    /// NPV projections.
    pub npv: Option<f64>,
    /// Discount rate applied. Only present for NPV projections.
    pub discount_rate: Option<f64>,
}

/// Rejection of financially meaningless inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiError {
    #[error("Invalid financial input: {reason}")]
    InvalidFinancialInput { reason: String },
}

impl RoiError {
    fn invalid(reason: impl Into<String>) -> Self {
        RoiError::InvalidFinancialInput {
            reason: reason.into(),
        }
    }
}

/// Validates inputs and produces an [`RoiResult`].
pub struct RoiCalculator;

impl RoiCalculator {
    pub fn calculate(request: &RoiRequest, defaults: &RoiDefaults) -> Result<RoiResult, RoiError> {
        if !request.annual_savings.is_finite() || !request.implementation_cost.is_finite() {
            return Err(RoiError::invalid("savings and cost must be finite"));
        }
        if request.implementation_cost <= 0.0 {
            return Err(RoiError::invalid("implementation cost must be positive"));
        }
        if request.annual_savings < 0.0 {
            return Err(RoiError::invalid("annual savings cannot be negative"));
        }

        let horizon_years = match request.horizon_years {
            Some(0) => return Err(RoiError::invalid("horizon must be at least one year")),
            Some(h) => h,
            None => defaults.horizon_years,
        };

        let payback_months = if request.annual_savings == 0.0 {
            None
        } else {
            Some(request.implementation_cost / request.annual_savings * 12.0)
        };

        let total_savings = request.annual_savings * f64::from(horizon_years);
        let roi_percentage =
            (total_savings - request.implementation_cost) / request.implementation_cost * 100.0;

        let (npv, discount_rate) = match request.calculation_type {
            RoiCalculationType::Simple => (None, None),
            RoiCalculationType::Npv => {
                let rate = request.discount_rate.unwrap_or(defaults.discount_rate);
                if !rate.is_finite() || rate <= -1.0 {
                    return Err(RoiError::invalid("discount rate must be greater than -100%"));
                }
                let npv = net_present_value(
                    request.annual_savings,
                    request.implementation_cost,
                    rate,
                    horizon_years,
                );
                (Some(npv), Some(rate))
            }
        };

        Ok(RoiResult {
            calculation_type: request.calculation_type,
            annual_savings: request.annual_savings,
            implementation_cost: request.implementation_cost,
            horizon_years,
            payback_months,
            roi_percentage,
            npv,
            discount_rate,
        })
    }
}

/// Discounts one year of savings per period; the implementation cost is
/// paid up front and not discounted.
fn net_present_value(annual_savings: f64, implementation_cost: f64, rate: f64, years: u32) -> f64 {
    let discounted: f64 = (1..=years)
        .map(|t| annual_savings / (1.0 + rate).powi(t as i32))
        .sum();
    discounted - implementation_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(annual_savings: f64, implementation_cost: f64, horizon: Option<u32>) -> RoiRequest {
        RoiRequest {
            calculation_type: RoiCalculationType::Simple,
            annual_savings,
            implementation_cost,
            discount_rate: None,
            horizon_years: horizon,
        }
    }

    #[test]
    fn simple_roi_matches_hand_calculation() {
        let result =
            RoiCalculator::calculate(&simple(300_000.0, 150_000.0, Some(1)), &RoiDefaults::default())
                .unwrap();
        assert_eq!(result.payback_months, Some(6.0));
        assert_eq!(result.roi_percentage, 100.0);
        assert_eq!(result.npv, None);
        assert_eq!(result.discount_rate, None);
    }

    #[test]
    fn horizon_defaults_to_five_years() {
        let result =
            RoiCalculator::calculate(&simple(100_000.0, 200_000.0, None), &RoiDefaults::default())
                .unwrap();
        assert_eq!(result.horizon_years, 5);
        // (500k - 200k) / 200k
        assert_eq!(result.roi_percentage, 150.0);
    }

    #[test]
    fn zero_savings_yields_no_payback() {
        let result =
            RoiCalculator::calculate(&simple(0.0, 100_000.0, Some(3)), &RoiDefaults::default())
                .unwrap();
        assert_eq!(result.payback_months, None);
        assert_eq!(result.roi_percentage, -100.0);
    }

    #[test]
    fn non_positive_cost_is_rejected() {
        assert!(
            RoiCalculator::calculate(&simple(100_000.0, 0.0, None), &RoiDefaults::default())
                .is_err()
        );
        assert!(
            RoiCalculator::calculate(&simple(100_000.0, -5.0, None), &RoiDefaults::default())
                .is_err()
        );
    }

    #[test]
    fn negative_savings_are_rejected() {
        assert!(
            RoiCalculator::calculate(&simple(-1.0, 100_000.0, None), &RoiDefaults::default())
                .is_err()
        );
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(RoiCalculator::calculate(
            &simple(f64::NAN, 100_000.0, None),
            &RoiDefaults::default()
        )
        .is_err());
        assert!(RoiCalculator::calculate(
            &simple(100_000.0, f64::INFINITY, None),
            &RoiDefaults::default()
        )
        .is_err());
    }

    #[test]
    fn zero_horizon_is_rejected() {
        assert!(
            RoiCalculator::calculate(&simple(100_000.0, 50_000.0, Some(0)), &RoiDefaults::default())
                .is_err()
        );
    }

    #[test]
    fn npv_discounts_each_year() {
        let request = RoiRequest {
            calculation_type: RoiCalculationType::Npv,
            annual_savings: 100_000.0,
            implementation_cost: 150_000.0,
            discount_rate: Some(0.10),
            horizon_years: Some(2),
        };
        let result = RoiCalculator::calculate(&request, &RoiDefaults::default()).unwrap();
        let expected = 100_000.0 / 1.10 + 100_000.0 / 1.21 - 150_000.0;
        assert!((result.npv.unwrap() - expected).abs() < 1e-6);
        assert_eq!(result.discount_rate, Some(0.10));
    }

    #[test]
    fn npv_uses_default_discount_rate_when_omitted() {
        let request = RoiRequest {
            calculation_type: RoiCalculationType::Npv,
            annual_savings: 100_000.0,
            implementation_cost: 150_000.0,
            discount_rate: None,
            horizon_years: Some(1),
        };
        let result = RoiCalculator::calculate(&request, &RoiDefaults::default()).unwrap();
        assert_eq!(result.discount_rate, Some(0.08));
        let expected = 100_000.0 / 1.08 - 150_000.0;
        assert!((result.npv.unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn absurd_discount_rate_is_rejected() {
        let request = RoiRequest {
            calculation_type: RoiCalculationType::Npv,
            annual_savings: 100_000.0,
            implementation_cost: 150_000.0,
            discount_rate: Some(-1.5),
            horizon_years: Some(1),
        };
        assert!(RoiCalculator::calculate(&request, &RoiDefaults::default()).is_err());
    }

    #[test]
    fn calculation_type_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&RoiCalculationType::Simple).unwrap(),
            "\"SIMPLE\""
        );
        assert_eq!(
            serde_json::to_string(&RoiCalculationType::Npv).unwrap(),
            "\"NPV\""
        );
    }
}
