//! ValidateResponsesHandler - checks a submission against the catalog.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::{ResponseValidator, ValidationReport};
use crate::domain::catalog::{QuestionCatalog, ResponseSet};

/// Command to validate a response set.
#[derive(Debug, Clone)]
pub struct ValidateResponsesCommand {
    pub responses: ResponseSet,
}

/// Handler for response validation.
pub struct ValidateResponsesHandler {
    catalog: Arc<QuestionCatalog>,
}

impl ValidateResponsesHandler {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: ValidateResponsesCommand) -> ValidationReport {
        let report = ResponseValidator::validate(&self.catalog, &cmd.responses);
        debug!(
            institution = %cmd.responses.institution_name,
            valid = report.valid,
            missing = report.missing_required.len(),
            type_errors = report.type_errors.len(),
            "Validated response set"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ResponseValue, STANDARD_CATALOG};
    use crate::domain::foundation::{OrganizationType, QuestionId};
    use crate::domain::tier::Tier;
    use std::collections::BTreeMap;

    fn handler() -> ValidateResponsesHandler {
        ValidateResponsesHandler::new(Arc::new(STANDARD_CATALOG.clone()))
    }

    #[tokio::test]
    async fn reports_missing_required_answers() {
        let responses = ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            BTreeMap::new(),
        )
        .unwrap();

        let report = handler()
            .handle(ValidateResponsesCommand { responses })
            .await;

        assert!(!report.valid);
        assert!(!report.missing_required.is_empty());
    }

    #[tokio::test]
    async fn accepts_a_complete_submission() {
        let catalog = &*STANDARD_CATALOG;
        let mut map = BTreeMap::new();
        for q in catalog.required_for(Tier::OneTimeDiagnostic, OrganizationType::Corporate) {
            let value = match q.response_type {
                crate::domain::catalog::ResponseType::Likert => ResponseValue::Likert(4),
                crate::domain::catalog::ResponseType::Numeric => {
                    ResponseValue::Numeric(q.validation_rules.min.unwrap_or(0.0))
                }
                crate::domain::catalog::ResponseType::Select => ResponseValue::Selection(
                    q.validation_rules.options.as_ref().unwrap()[0].clone(),
                ),
                _ => ResponseValue::Text("n/a".into()),
            };
            map.insert(q.id.clone(), value);
        }
        let responses = ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            map,
        )
        .unwrap();

        let report = handler()
            .handle(ValidateResponsesCommand { responses })
            .await;
        assert!(report.valid);
    }

    #[tokio::test]
    async fn flags_type_mismatches() {
        let mut map = BTreeMap::new();
        map.insert(
            QuestionId::new("LS_01").unwrap(),
            ResponseValue::Numeric(3.0),
        );
        let responses = ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            map,
        )
        .unwrap();

        let report = handler()
            .handle(ValidateResponsesCommand { responses })
            .await;
        assert!(report
            .type_errors
            .iter()
            .any(|e| e.question_id.as_str() == "LS_01"));
    }
}
