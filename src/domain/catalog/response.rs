//! Submitted answers and the response set envelope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{OrganizationType, QuestionId, Timestamp, ValidationError};
use crate::domain::tier::Tier;

use super::question::ResponseType;

/// Reference to an uploaded file. The engine never stores file bytes,
/// only the metadata needed to cite the upload in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub content_type: String,
}

/// A single submitted answer, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseValue {
    /// 1-5 agreement value.
    Likert(u8),
    Numeric(f64),
    Text(String),
    Selection(String),
    MultiSelection(Vec<String>),
    Upload(Vec<FileRef>),
}

impl ResponseValue {
    /// Returns true if this value's kind matches the expected response type.
    pub fn matches(&self, expected: ResponseType) -> bool {
        matches!(
            (self, expected),
            (ResponseValue::Likert(_), ResponseType::Likert)
                | (ResponseValue::Numeric(_), ResponseType::Numeric)
                | (ResponseValue::Text(_), ResponseType::Text)
                | (ResponseValue::Selection(_), ResponseType::Select)
                | (ResponseValue::MultiSelection(_), ResponseType::MultiSelect)
                | (ResponseValue::Upload(_), ResponseType::Upload)
        )
    }

    /// Short name for the value's kind, used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResponseValue::Likert(_) => "likert",
            ResponseValue::Numeric(_) => "numeric",
            ResponseValue::Text(_) => "text",
            ResponseValue::Selection(_) => "selection",
            ResponseValue::MultiSelection(_) => "multi_selection",
            ResponseValue::Upload(_) => "upload",
        }
    }
}

/// A full set of submitted answers for one assessment.
///
/// Responses are keyed by question id in a `BTreeMap` so iteration order,
/// and therefore every derived score and report, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    pub organization_type: OrganizationType,
    pub tier: Tier,
    pub institution_name: String,
    pub submitted_at: Timestamp,
    pub responses: BTreeMap<QuestionId, ResponseValue>,
}

impl ResponseSet {
    /// Creates a response set, rejecting a blank institution name.
    pub fn new(
        organization_type: OrganizationType,
        tier: Tier,
        institution_name: impl Into<String>,
        responses: BTreeMap<QuestionId, ResponseValue>,
    ) -> Result<Self, ValidationError> {
        let institution_name = institution_name.into();
        if institution_name.trim().is_empty() {
            return Err(ValidationError::empty_field("institution_name"));
        }
        Ok(Self {
            organization_type,
            tier,
            institution_name,
            submitted_at: Timestamp::now(),
            responses,
        })
    }

    /// Returns the answer for a question, if present.
    pub fn get(&self, id: &QuestionId) -> Option<&ResponseValue> {
        self.responses.get(id)
    }

    /// Number of submitted answers.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns true if no answers were submitted.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    #[test]
    fn response_value_matches_its_own_kind() {
        assert!(ResponseValue::Likert(3).matches(ResponseType::Likert));
        assert!(ResponseValue::Numeric(12.5).matches(ResponseType::Numeric));
        assert!(!ResponseValue::Likert(3).matches(ResponseType::Numeric));
        assert!(!ResponseValue::Text("x".into()).matches(ResponseType::Select));
    }

    #[test]
    fn response_value_serializes_tagged() {
        let json = serde_json::to_string(&ResponseValue::Likert(4)).unwrap();
        assert_eq!(json, r#"{"kind":"likert","value":4}"#);

        let back: ResponseValue =
            serde_json::from_str(r#"{"kind":"numeric","value":7.5}"#).unwrap();
        assert_eq!(back, ResponseValue::Numeric(7.5));
    }

    #[test]
    fn response_set_rejects_blank_institution_name() {
        let result = ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "  ",
            BTreeMap::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn response_set_iterates_in_key_order() {
        let mut responses = BTreeMap::new();
        responses.insert(qid("OP_01"), ResponseValue::Likert(3));
        responses.insert(qid("LS_01"), ResponseValue::Likert(5));
        responses.insert(qid("HC_01"), ResponseValue::Likert(1));

        let set = ResponseSet::new(
            OrganizationType::PublicUniversity,
            Tier::ComprehensivePackage,
            "Northfield State",
            responses,
        )
        .unwrap();

        let keys: Vec<&str> = set.responses.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["HC_01", "LS_01", "OP_01"]);
    }
}
