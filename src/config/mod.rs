//! Engine configuration.
//!
//! Configuration is loaded from environment variables with the `REALIGN`
//! prefix; nested values use `__` as a separator, e.g.
//! `REALIGN__ANALYSIS__ROI__DISCOUNT_RATE=0.1`. Every value has a
//! default, so an empty environment is valid.

mod analysis;

pub use analysis::AnalysisConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or parse configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

/// Semantically invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("DSCH dimension weights must sum to 1.0, got {actual}")]
    DschWeightsMustSumToOne { actual: f64 },

    #[error("Complexity blend weights must sum to 1.0, got {actual}")]
    ComplexityBlendMustSumToOne { actual: f64 },

    #[error("Neutral score must be between 0 and 1, got {actual}")]
    NeutralScoreOutOfRange { actual: f64 },

    #[error("ROI horizon must be at least one year")]
    ZeroRoiHorizon,

    #[error("Discount rate must be greater than -100%, got {actual}")]
    InvalidDiscountRate { actual: f64 },

    #[error("Threshold {field} must be non-negative, got {actual}")]
    NegativeThreshold { field: &'static str, actual: f64 },
}

/// Root engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
}

impl EngineConfig {
    /// Loads configuration from environment variables and validates it.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::default().prefix("REALIGN").separator("__"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.analysis.validate()
    }
}
