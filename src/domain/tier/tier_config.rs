//! Static configuration attached to each assessment tier.
//!
//! Price points, question counts, enabled algorithms, feature flags, and
//! usage guardrails all hang off the tier, so downstream code asks the
//! configuration rather than matching on the tier directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Tier;

/// Feature flags enabled for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFeatures {
    pub upload_support: bool,
    pub dashboard_refresh: bool,
    pub custom_reporting: bool,
    pub org_chart_generator: bool,
    pub scenario_builder: bool,
    pub monte_carlo_simulation: bool,
    pub real_time_collaboration: bool,
}

/// Usage limits for a tier. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardrails {
    pub max_assessments: Option<u32>,
    pub max_users: Option<u32>,
    pub max_scenarios: Option<u32>,
    pub data_retention_months: Option<u32>,
}

/// Current usage counters, checked against [`Guardrails`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierUsage {
    pub assessments: u32,
    pub users: u32,
    pub scenarios: u32,
}

/// A guardrail that would be exceeded by the attempted operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Tier limit exceeded for {resource}: limit {limit}, attempted {attempted}")]
pub struct TierLimitExceeded {
    pub resource: &'static str,
    pub limit: u32,
    pub attempted: u32,
}

/// Full configuration for one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierConfiguration {
    pub tier: Tier,
    pub price_usd: u32,
    pub question_count: u32,
    pub report_pages: u32,
    pub algorithms: Vec<&'static str>,
    pub features: TierFeatures,
    pub guardrails: Guardrails,
}

impl TierConfiguration {
    /// Returns the configuration for a tier.
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::OneTimeDiagnostic => Self {
                tier,
                price_usd: 4995,
                question_count: 100,
                report_pages: 15,
                algorithms: vec!["DSCH", "CRF", "LEI"],
                features: TierFeatures {
                    upload_support: true,
                    dashboard_refresh: false,
                    custom_reporting: false,
                    org_chart_generator: true,
                    scenario_builder: false,
                    monte_carlo_simulation: false,
                    real_time_collaboration: false,
                },
                guardrails: Guardrails {
                    max_assessments: Some(1),
                    max_users: Some(3),
                    max_scenarios: Some(0),
                    data_retention_months: Some(6),
                },
            },
            Tier::MonthlySubscription => Self {
                tier,
                price_usd: 2995,
                question_count: 120,
                report_pages: 20,
                algorithms: vec!["DSCH", "CRF", "LEI", "OCI", "HOCI"],
                features: TierFeatures {
                    upload_support: true,
                    dashboard_refresh: true,
                    custom_reporting: false,
                    org_chart_generator: true,
                    scenario_builder: false,
                    monte_carlo_simulation: false,
                    real_time_collaboration: false,
                },
                guardrails: Guardrails {
                    max_assessments: None,
                    max_users: Some(10),
                    max_scenarios: Some(0),
                    data_retention_months: Some(12),
                },
            },
            Tier::ComprehensivePackage => Self {
                tier,
                price_usd: 9900,
                question_count: 150,
                report_pages: 30,
                algorithms: vec!["DSCH", "CRF", "LEI", "OCI", "HOCI", "Cost-Savings Analysis"],
                features: TierFeatures {
                    upload_support: true,
                    dashboard_refresh: true,
                    custom_reporting: true,
                    org_chart_generator: true,
                    scenario_builder: true,
                    monte_carlo_simulation: false,
                    real_time_collaboration: false,
                },
                guardrails: Guardrails {
                    max_assessments: None,
                    max_users: Some(25),
                    max_scenarios: Some(5),
                    data_retention_months: Some(24),
                },
            },
            Tier::EnterpriseTransformation => Self {
                tier,
                price_usd: 24000,
                question_count: 200,
                report_pages: 50,
                algorithms: vec![
                    "DSCH",
                    "CRF",
                    "LEI",
                    "OCI",
                    "HOCI",
                    "Cost-Savings Analysis",
                    "Monte Carlo Simulation",
                ],
                features: TierFeatures {
                    upload_support: true,
                    dashboard_refresh: true,
                    custom_reporting: true,
                    org_chart_generator: true,
                    scenario_builder: true,
                    monte_carlo_simulation: true,
                    real_time_collaboration: true,
                },
                guardrails: Guardrails {
                    max_assessments: None,
                    max_users: None,
                    max_scenarios: None,
                    data_retention_months: None,
                },
            },
        }
    }

    /// Returns true if the tier supports scenario comparison at all.
    pub fn supports_scenarios(&self) -> bool {
        self.features.scenario_builder
    }

    /// Checks usage counters against this tier's guardrails.
    ///
    /// Counters represent the state AFTER the attempted operation, so a
    /// counter equal to the limit passes and one above it fails.
    pub fn validate_usage(&self, usage: &TierUsage) -> Result<(), TierLimitExceeded> {
        check_limit("assessments", self.guardrails.max_assessments, usage.assessments)?;
        check_limit("users", self.guardrails.max_users, usage.users)?;
        check_limit("scenarios", self.guardrails.max_scenarios, usage.scenarios)?;
        Ok(())
    }
}

fn check_limit(
    resource: &'static str,
    limit: Option<u32>,
    attempted: u32,
) -> Result<(), TierLimitExceeded> {
    match limit {
        Some(limit) if attempted > limit => Err(TierLimitExceeded {
            resource,
            limit,
            attempted,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_configuration() {
        for tier in Tier::ALL {
            let config = TierConfiguration::for_tier(tier);
            assert_eq!(config.tier, tier);
            assert!(config.question_count >= 100);
            assert!(!config.algorithms.is_empty());
        }
    }

    #[test]
    fn question_counts_grow_with_tier() {
        let counts: Vec<u32> = Tier::ALL
            .iter()
            .map(|t| TierConfiguration::for_tier(*t).question_count)
            .collect();
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scenario_builder_starts_at_comprehensive() {
        assert!(!TierConfiguration::for_tier(Tier::OneTimeDiagnostic).supports_scenarios());
        assert!(!TierConfiguration::for_tier(Tier::MonthlySubscription).supports_scenarios());
        assert!(TierConfiguration::for_tier(Tier::ComprehensivePackage).supports_scenarios());
        assert!(TierConfiguration::for_tier(Tier::EnterpriseTransformation).supports_scenarios());
    }

    #[test]
    fn enterprise_has_no_guardrails() {
        let config = TierConfiguration::for_tier(Tier::EnterpriseTransformation);
        assert_eq!(config.guardrails.max_scenarios, None);
        assert_eq!(config.guardrails.max_users, None);
        assert!(config
            .validate_usage(&TierUsage {
                assessments: 1000,
                users: 1000,
                scenarios: 1000,
            })
            .is_ok());
    }

    #[test]
    fn usage_at_limit_passes_and_above_limit_fails() {
        let config = TierConfiguration::for_tier(Tier::ComprehensivePackage);
        let at_limit = TierUsage {
            assessments: 0,
            users: 25,
            scenarios: 5,
        };
        assert!(config.validate_usage(&at_limit).is_ok());

        let over = TierUsage {
            assessments: 0,
            users: 25,
            scenarios: 6,
        };
        let err = config.validate_usage(&over).unwrap_err();
        assert_eq!(err.resource, "scenarios");
        assert_eq!(err.limit, 5);
        assert_eq!(err.attempted, 6);
    }

    #[test]
    fn diagnostic_tier_allows_single_assessment() {
        let config = TierConfiguration::for_tier(Tier::OneTimeDiagnostic);
        assert!(config
            .validate_usage(&TierUsage {
                assessments: 1,
                users: 1,
                scenarios: 0,
            })
            .is_ok());
        assert!(config
            .validate_usage(&TierUsage {
                assessments: 2,
                users: 1,
                scenarios: 0,
            })
            .is_err());
    }
}
