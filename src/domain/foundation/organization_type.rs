//! Organization type enumeration.
//!
//! Drives which catalog questions apply and which labels downstream
//! presentation layers use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of organization being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    CommunityCollege,
    PublicUniversity,
    HospitalHealthcare,
    Government,
    Corporate,
    Nonprofit,
    TradeTechnical,
}

impl OrganizationType {
    /// All organization types, in stable order.
    pub const ALL: [OrganizationType; 7] = [
        OrganizationType::CommunityCollege,
        OrganizationType::PublicUniversity,
        OrganizationType::HospitalHealthcare,
        OrganizationType::Government,
        OrganizationType::Corporate,
        OrganizationType::Nonprofit,
        OrganizationType::TradeTechnical,
    ];

    /// Returns the display name for this organization type.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrganizationType::CommunityCollege => "Community College",
            OrganizationType::PublicUniversity => "Public University",
            OrganizationType::HospitalHealthcare => "Hospital / Healthcare System",
            OrganizationType::Government => "Government Agency",
            OrganizationType::Corporate => "Corporate",
            OrganizationType::Nonprofit => "Nonprofit",
            OrganizationType::TradeTechnical => "Trade & Technical School",
        }
    }

    /// Returns true for higher-education organization types.
    pub fn is_higher_education(&self) -> bool {
        matches!(
            self,
            OrganizationType::CommunityCollege
                | OrganizationType::PublicUniversity
                | OrganizationType::TradeTechnical
        )
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&OrganizationType::CommunityCollege).unwrap();
        assert_eq!(json, "\"community_college\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let t: OrganizationType = serde_json::from_str("\"hospital_healthcare\"").unwrap();
        assert_eq!(t, OrganizationType::HospitalHealthcare);
    }

    #[test]
    fn higher_education_covers_colleges_and_universities() {
        assert!(OrganizationType::CommunityCollege.is_higher_education());
        assert!(OrganizationType::PublicUniversity.is_higher_education());
        assert!(!OrganizationType::Government.is_higher_education());
        assert!(!OrganizationType::Corporate.is_higher_education());
    }

    #[test]
    fn all_lists_every_variant_once() {
        let mut sorted = OrganizationType::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 7);
    }
}
