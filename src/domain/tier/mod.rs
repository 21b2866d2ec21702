//! Assessment tiers and their static configuration.

#[allow(clippy::module_inception)]
mod tier;
mod tier_config;

pub use tier::Tier;
pub use tier_config::{
    Guardrails, TierConfiguration, TierFeatures, TierLimitExceeded, TierUsage,
};
