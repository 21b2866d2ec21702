//! Scenario aggregate: a named baseline/variant structure pair with a
//! simple review lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, OrganizationId, ScenarioId, Timestamp, UserId,
};

use super::organization::OrganizationStructure;

/// Review lifecycle state for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioStatus {
    Draft,
    UnderReview,
    Approved,
}

impl ScenarioStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioStatus::Draft => "Draft",
            ScenarioStatus::UnderReview => "Under Review",
            ScenarioStatus::Approved => "Approved",
        }
    }
}

/// A saved what-if scenario: the organization's current structure and a
/// proposed variant, compared on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub description: Option<String>,
    pub baseline: OrganizationStructure,
    pub variant: OrganizationStructure,
    pub status: ScenarioStatus,
    pub created_by: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Scenario {
    /// Creates a draft scenario, validating the name.
    pub fn create(
        organization_id: OrganizationId,
        name: impl Into<String>,
        description: Option<String>,
        baseline: OrganizationStructure,
        variant: OrganizationStructure,
        created_by: UserId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Scenario name cannot be empty"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: ScenarioId::new(),
            organization_id,
            name,
            description,
            baseline,
            variant,
            status: ScenarioStatus::Draft,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves a draft scenario to review.
    pub fn submit_for_review(&mut self) -> Result<(), DomainError> {
        match self.status {
            ScenarioStatus::Draft => {
                self.status = ScenarioStatus::UnderReview;
                self.updated_at = Timestamp::now();
                Ok(())
            }
            other => Err(transition_error(other, ScenarioStatus::UnderReview)),
        }
    }

    /// Approves a scenario that is under review.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        match self.status {
            ScenarioStatus::UnderReview => {
                self.status = ScenarioStatus::Approved;
                self.updated_at = Timestamp::now();
                Ok(())
            }
            other => Err(transition_error(other, ScenarioStatus::Approved)),
        }
    }

    /// Replaces the variant structure on a draft scenario.
    pub fn update_variant(&mut self, variant: OrganizationStructure) -> Result<(), DomainError> {
        if self.status != ScenarioStatus::Draft {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Only draft scenarios can be edited",
            )
            .with_detail("status", self.status.label()));
        }
        self.variant = variant;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn transition_error(from: ScenarioStatus, to: ScenarioStatus) -> DomainError {
    DomainError::new(
        ErrorCode::InvalidStateTransition,
        format!("Cannot move scenario from {} to {}", from.label(), to.label()),
    )
    .with_detail("from", from.label())
    .with_detail("to", to.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::structure::position::Position;

    fn structure() -> OrganizationStructure {
        OrganizationStructure::new(vec![Position::new(
            Some("p1".into()),
            "Director",
            1,
            None,
            1.0,
            150_000.0,
        )
        .unwrap()])
        .unwrap()
    }

    fn scenario() -> Scenario {
        Scenario::create(
            OrganizationId::new(),
            "Flatten administration",
            Some("Remove one management layer".into()),
            structure(),
            structure(),
            UserId::new("analyst-1").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn create_rejects_blank_name() {
        let result = Scenario::create(
            OrganizationId::new(),
            "   ",
            None,
            structure(),
            structure(),
            UserId::new("analyst-1").unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_scenarios_start_as_draft() {
        assert_eq!(scenario().status, ScenarioStatus::Draft);
    }

    #[test]
    fn lifecycle_follows_draft_review_approved() {
        let mut s = scenario();
        s.submit_for_review().unwrap();
        assert_eq!(s.status, ScenarioStatus::UnderReview);
        s.approve().unwrap();
        assert_eq!(s.status, ScenarioStatus::Approved);
    }

    #[test]
    fn approve_from_draft_is_rejected() {
        let mut s = scenario();
        let err = s.approve().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(s.status, ScenarioStatus::Draft);
    }

    #[test]
    fn resubmitting_a_reviewed_scenario_is_rejected() {
        let mut s = scenario();
        s.submit_for_review().unwrap();
        assert!(s.submit_for_review().is_err());
    }

    #[test]
    fn variant_edits_are_draft_only() {
        let mut s = scenario();
        assert!(s.update_variant(structure()).is_ok());
        s.submit_for_review().unwrap();
        let err = s.update_variant(structure()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ScenarioStatus::UnderReview).unwrap();
        assert_eq!(json, "\"UNDER_REVIEW\"");
    }
}
