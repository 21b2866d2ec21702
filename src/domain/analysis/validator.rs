//! Response validation against the question catalog.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{QuestionCatalog, ResponseSet, ResponseValue};
use crate::domain::foundation::QuestionId;

/// A single answer that failed type or constraint checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeError {
    pub question_id: QuestionId,
    pub reason: String,
}

/// Outcome of validating a response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub missing_required: Vec<QuestionId>,
    pub type_errors: Vec<TypeError>,
}

impl ValidationReport {
    fn from_findings(missing_required: Vec<QuestionId>, type_errors: Vec<TypeError>) -> Self {
        Self {
            valid: missing_required.is_empty() && type_errors.is_empty(),
            missing_required,
            type_errors,
        }
    }
}

/// Validates submitted answers against the catalog's applicable questions.
///
/// Answers keyed by ids not in the catalog, or by questions that do not
/// apply to the submission's tier and organization type, are ignored.
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn validate(catalog: &QuestionCatalog, responses: &ResponseSet) -> ValidationReport {
        let tier = responses.tier;
        let org = responses.organization_type;

        let mut missing_required = Vec::new();
        let mut type_errors = Vec::new();

        for question in catalog.applicable(tier, org) {
            match responses.get(&question.id) {
                None => {
                    if question.required {
                        missing_required.push(question.id.clone());
                    }
                }
                Some(value) => {
                    if !value.matches(question.response_type) {
                        type_errors.push(TypeError {
                            question_id: question.id.clone(),
                            reason: format!(
                                "expected {:?} answer, got {}",
                                question.response_type,
                                value.kind_name()
                            ),
                        });
                        continue;
                    }
                    if let Some(reason) = check_constraints(question, value) {
                        type_errors.push(TypeError {
                            question_id: question.id.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        ValidationReport::from_findings(missing_required, type_errors)
    }
}

fn check_constraints(
    question: &crate::domain::catalog::Question,
    value: &ResponseValue,
) -> Option<String> {
    let rules = &question.validation_rules;
    match value {
        ResponseValue::Likert(v) => {
            if !(1..=5).contains(v) {
                return Some(format!("likert value {} outside 1-5", v));
            }
        }
        ResponseValue::Numeric(v) => {
            if !v.is_finite() {
                return Some("numeric value is not finite".to_string());
            }
            if let Some(min) = rules.min {
                if *v < min {
                    return Some(format!("value {} below minimum {}", v, min));
                }
            }
            if let Some(max) = rules.max {
                if *v > max {
                    return Some(format!("value {} above maximum {}", v, max));
                }
            }
        }
        ResponseValue::Text(text) => {
            if let Some(max_length) = rules.max_length {
                if text.chars().count() > max_length {
                    return Some(format!(
                        "text length {} exceeds maximum {}",
                        text.chars().count(),
                        max_length
                    ));
                }
            }
        }
        ResponseValue::Selection(choice) => {
            if let Some(options) = &rules.options {
                if !options.contains(choice) {
                    return Some(format!("'{}' is not an allowed option", choice));
                }
            }
        }
        ResponseValue::MultiSelection(choices) => {
            if let Some(options) = &rules.options {
                for choice in choices {
                    if !options.contains(choice) {
                        return Some(format!("'{}' is not an allowed option", choice));
                    }
                }
            }
        }
        ResponseValue::Upload(files) => {
            if files.is_empty() {
                return Some("upload answer contains no files".to_string());
            }
        }
    }
    None
}
