//! CompareScenarioHandler - structural diff for a stored scenario.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::domain::analysis::{StructuralComparator, StructuralDelta};
use crate::domain::foundation::ScenarioId;
use crate::ports::{ScenarioReader, ScenarioStoreError};

/// Command to compare a scenario's baseline and variant.
#[derive(Debug, Clone)]
pub struct CompareScenarioCommand {
    pub scenario_id: ScenarioId,
}

/// Error type for scenario comparison.
#[derive(Debug, Clone, Error)]
pub enum CompareScenarioError {
    #[error("Scenario {0} not found")]
    ScenarioNotFound(ScenarioId),

    #[error(transparent)]
    Storage(ScenarioStoreError),
}

impl From<ScenarioStoreError> for CompareScenarioError {
    fn from(err: ScenarioStoreError) -> Self {
        match err {
            ScenarioStoreError::NotFound(id) => CompareScenarioError::ScenarioNotFound(id),
            other => CompareScenarioError::Storage(other),
        }
    }
}

/// Handler for structural comparison of stored scenarios.
pub struct CompareScenarioHandler {
    reader: Arc<dyn ScenarioReader>,
    config: Arc<AnalysisConfig>,
}

impl CompareScenarioHandler {
    pub fn new(reader: Arc<dyn ScenarioReader>, config: Arc<AnalysisConfig>) -> Self {
        Self { reader, config }
    }

    pub async fn handle(
        &self,
        cmd: CompareScenarioCommand,
    ) -> Result<StructuralDelta, CompareScenarioError> {
        let scenario = self.reader.get_scenario(cmd.scenario_id).await?;

        let delta = StructuralComparator::compare(
            &scenario.baseline,
            &scenario.variant,
            &self.config.comparator,
        );

        debug!(
            scenario_id = %cmd.scenario_id,
            added = delta.added.len(),
            removed = delta.removed.len(),
            modified = delta.modified.len(),
            risks = delta.risk_factors.len(),
            "Compared scenario structures"
        );
        Ok(delta)
    }
}
