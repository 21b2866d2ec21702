//! ScoreResponsesHandler - validates and scores a submission.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::{
    ResponseValidator, ScoringEngine, ScoringResult, ValidationReport,
};
use crate::domain::catalog::{QuestionCatalog, ResponseSet};

/// Command to score a response set.
#[derive(Debug, Clone)]
pub struct ScoreResponsesCommand {
    pub responses: ResponseSet,
}

/// Error type for scoring.
#[derive(Debug, Clone, Error)]
pub enum ScoreResponsesError {
    /// The submission failed validation; scoring refuses to run on it.
    #[error("Responses failed validation: {} missing, {} type errors",
        .0.missing_required.len(), .0.type_errors.len())]
    InvalidResponses(ValidationReport),
}

/// Handler for scoring. Validation always runs first so scores are never
/// computed from a malformed submission.
pub struct ScoreResponsesHandler {
    catalog: Arc<QuestionCatalog>,
}

impl ScoreResponsesHandler {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: ScoreResponsesCommand,
    ) -> Result<ScoringResult, ScoreResponsesError> {
        let report = ResponseValidator::validate(&self.catalog, &cmd.responses);
        if !report.valid {
            return Err(ScoreResponsesError::InvalidResponses(report));
        }

        let result = ScoringEngine::score(&self.catalog, &cmd.responses);
        debug!(
            institution = %cmd.responses.institution_name,
            overall = %result.overall_score,
            sections = result.section_scores.len(),
            "Scored response set"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ResponseType, ResponseValue, STANDARD_CATALOG};
    use crate::domain::foundation::{OrganizationType, ScoreBand};
    use crate::domain::tier::Tier;
    use std::collections::BTreeMap;

    fn handler() -> ScoreResponsesHandler {
        ScoreResponsesHandler::new(Arc::new(STANDARD_CATALOG.clone()))
    }

    fn complete_submission(likert: u8) -> ResponseSet {
        let catalog = &*STANDARD_CATALOG;
        let mut map = BTreeMap::new();
        for q in catalog.required_for(Tier::OneTimeDiagnostic, OrganizationType::Corporate) {
            let value = match q.response_type {
                ResponseType::Likert => ResponseValue::Likert(likert),
                ResponseType::Numeric => {
                    ResponseValue::Numeric(q.validation_rules.min.unwrap_or(0.0))
                }
                ResponseType::Select => ResponseValue::Selection(
                    q.validation_rules.options.as_ref().unwrap()[0].clone(),
                ),
                _ => ResponseValue::Text("n/a".into()),
            };
            map.insert(q.id.clone(), value);
        }
        ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            map,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn scores_a_valid_submission() {
        let result = handler()
            .handle(ScoreResponsesCommand {
                responses: complete_submission(5),
            })
            .await
            .unwrap();
        assert!(!result.section_scores.is_empty());
        assert!(result.overall_score.value() > 0.0);
    }

    #[tokio::test]
    async fn refuses_an_incomplete_submission() {
        let responses = ResponseSet::new(
            OrganizationType::Corporate,
            Tier::OneTimeDiagnostic,
            "Acme Corp",
            BTreeMap::new(),
        )
        .unwrap();
        let err = handler()
            .handle(ScoreResponsesCommand { responses })
            .await
            .unwrap_err();
        let ScoreResponsesError::InvalidResponses(report) = err;
        assert!(!report.missing_required.is_empty());
    }

    #[tokio::test]
    async fn stronger_answers_score_higher() {
        let weak = handler()
            .handle(ScoreResponsesCommand {
                responses: complete_submission(2),
            })
            .await
            .unwrap();
        let strong = handler()
            .handle(ScoreResponsesCommand {
                responses: complete_submission(5),
            })
            .await
            .unwrap();
        assert!(strong.overall_score > weak.overall_score);
        assert!(strong.overall_band() > ScoreBand::Emerging);
    }
}
