//! Catalog question definitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationType, QuestionId};
use crate::domain::tier::Tier;

/// The kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// 1-5 agreement scale. Scorable.
    Likert,
    /// Free numeric value. Scorable when min/max bounds are configured.
    Numeric,
    /// Free text. Context only, never scored.
    Text,
    /// Single choice from a fixed option list. Context only.
    Select,
    /// Multiple choices from a fixed option list. Context only.
    MultiSelect,
    /// File upload reference. Context only, tier-gated.
    Upload,
}

impl ResponseType {
    /// Returns true if answers of this type contribute to section scores.
    pub fn is_scorable(&self) -> bool {
        matches!(self, ResponseType::Likert | ResponseType::Numeric)
    }
}

/// Per-question validation constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Lower bound for numeric answers; also the normalization floor.
    pub min: Option<f64>,
    /// Upper bound for numeric answers; also the normalization ceiling.
    pub max: Option<f64>,
    /// Maximum length for text answers.
    pub max_length: Option<usize>,
    /// Allowed options for select and multi-select answers.
    pub options: Option<Vec<String>>,
}

impl ValidationRules {
    /// Rules with no constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Numeric bounds used for both validation and normalization.
    pub fn numeric_range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Fixed option list for select questions.
    pub fn with_options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }
}

/// Which organization types a question applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgScope {
    /// Applies to every organization type.
    All,
    /// Applies only to the listed organization types.
    Only(Vec<OrganizationType>),
}

impl OrgScope {
    /// Returns true if the scope covers the given organization type.
    pub fn applies_to(&self, org_type: OrganizationType) -> bool {
        match self {
            OrgScope::All => true,
            OrgScope::Only(types) => types.contains(&org_type),
        }
    }
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Section name the question's answer aggregates under.
    pub section: String,
    pub prompt: String,
    pub response_type: ResponseType,
    pub org_scope: OrgScope,
    /// Lowest tier at which the question appears. Higher tiers inherit it.
    pub minimum_tier: Tier,
    pub required: bool,
    pub validation_rules: ValidationRules,
}

impl Question {
    /// Creates a required likert question available at every tier.
    pub fn likert(id: QuestionId, section: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id,
            section: section.into(),
            prompt: prompt.into(),
            response_type: ResponseType::Likert,
            org_scope: OrgScope::All,
            minimum_tier: Tier::OneTimeDiagnostic,
            required: true,
            validation_rules: ValidationRules::none(),
        }
    }

    /// Creates a numeric question with normalization bounds.
    pub fn numeric(
        id: QuestionId,
        section: impl Into<String>,
        prompt: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            id,
            section: section.into(),
            prompt: prompt.into(),
            response_type: ResponseType::Numeric,
            org_scope: OrgScope::All,
            minimum_tier: Tier::OneTimeDiagnostic,
            required: true,
            validation_rules: ValidationRules::numeric_range(min, max),
        }
    }

    /// Creates an optional free-text question.
    pub fn text(id: QuestionId, section: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id,
            section: section.into(),
            prompt: prompt.into(),
            response_type: ResponseType::Text,
            org_scope: OrgScope::All,
            minimum_tier: Tier::OneTimeDiagnostic,
            required: false,
            validation_rules: ValidationRules {
                max_length: Some(2000),
                ..ValidationRules::none()
            },
        }
    }

    /// Creates a single-select question with a fixed option list.
    pub fn select(
        id: QuestionId,
        section: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id,
            section: section.into(),
            prompt: prompt.into(),
            response_type: ResponseType::Select,
            org_scope: OrgScope::All,
            minimum_tier: Tier::OneTimeDiagnostic,
            required: true,
            validation_rules: ValidationRules::with_options(options),
        }
    }

    /// Creates an optional upload question, gated to a minimum tier.
    pub fn upload(
        id: QuestionId,
        section: impl Into<String>,
        prompt: impl Into<String>,
        minimum_tier: Tier,
    ) -> Self {
        Self {
            id,
            section: section.into(),
            prompt: prompt.into(),
            response_type: ResponseType::Upload,
            org_scope: OrgScope::All,
            minimum_tier,
            required: false,
            validation_rules: ValidationRules::none(),
        }
    }

    /// Restricts the question to specific organization types.
    pub fn only_for(mut self, types: Vec<OrganizationType>) -> Self {
        self.org_scope = OrgScope::Only(types);
        self
    }

    /// Raises the minimum tier at which the question appears.
    pub fn from_tier(mut self, tier: Tier) -> Self {
        self.minimum_tier = tier;
        self
    }

    /// Marks the question optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Returns true if the question appears for the given tier and
    /// organization type.
    pub fn applies_to(&self, tier: Tier, org_type: OrganizationType) -> bool {
        tier.includes(self.minimum_tier) && self.org_scope.applies_to(org_type)
    }
}
