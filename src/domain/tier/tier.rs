//! Assessment tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The purchased assessment tier.
///
/// Tiers are ordered from least to most comprehensive; `Ord` follows
/// that ordering so `tier_a >= tier_b` means `tier_a` includes at least
/// everything `tier_b` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    OneTimeDiagnostic,
    MonthlySubscription,
    ComprehensivePackage,
    EnterpriseTransformation,
}

impl Tier {
    /// All tiers, from least to most comprehensive.
    pub const ALL: [Tier; 4] = [
        Tier::OneTimeDiagnostic,
        Tier::MonthlySubscription,
        Tier::ComprehensivePackage,
        Tier::EnterpriseTransformation,
    ];

    /// Returns the marketing display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::OneTimeDiagnostic => "One-Time Diagnostic",
            Tier::MonthlySubscription => "Monthly Subscription",
            Tier::ComprehensivePackage => "Comprehensive Package",
            Tier::EnterpriseTransformation => "Enterprise Transformation",
        }
    }

    /// Returns the zero-based rank of this tier (0 = least comprehensive).
    pub fn rank(&self) -> u8 {
        match self {
            Tier::OneTimeDiagnostic => 0,
            Tier::MonthlySubscription => 1,
            Tier::ComprehensivePackage => 2,
            Tier::EnterpriseTransformation => 3,
        }
    }

    /// Returns true if this tier includes everything the other tier does.
    pub fn includes(&self, other: Tier) -> bool {
        self.rank() >= other.rank()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
