//! AnalyzeDschHandler - health vectors for a stored scenario.
//!
//! Analyzes the baseline and variant structures and reports the
//! per-dimension improvement between them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    DschAnalyzer, DschContext, DschImprovement, DschVector, ScoringResult, StructuralComparator,
};
use crate::domain::foundation::ScenarioId;
use crate::ports::{ScenarioReader, ScenarioStoreError};

/// Command to analyze a scenario's structures.
#[derive(Debug, Clone)]
pub struct AnalyzeDschCommand {
    pub scenario_id: ScenarioId,
    /// Assessment scores feeding the DSCH dimensions, when available.
    pub scoring: Option<ScoringResult>,
}

/// Baseline and variant vectors plus the delta between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDschResult {
    pub baseline: DschVector,
    pub variant: DschVector,
    pub improvement: DschImprovement,
}

/// Error type for DSCH analysis.
#[derive(Debug, Clone, Error)]
pub enum AnalyzeDschError {
    #[error("Scenario {0} not found")]
    ScenarioNotFound(ScenarioId),

    #[error(transparent)]
    Storage(ScenarioStoreError),
}

impl From<ScenarioStoreError> for AnalyzeDschError {
    fn from(err: ScenarioStoreError) -> Self {
        match err {
            ScenarioStoreError::NotFound(id) => AnalyzeDschError::ScenarioNotFound(id),
            other => AnalyzeDschError::Storage(other),
        }
    }
}

/// Handler for DSCH analysis of stored scenarios.
pub struct AnalyzeDschHandler {
    reader: Arc<dyn ScenarioReader>,
    config: Arc<AnalysisConfig>,
}

impl AnalyzeDschHandler {
    pub fn new(reader: Arc<dyn ScenarioReader>, config: Arc<AnalysisConfig>) -> Self {
        Self { reader, config }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeDschCommand,
    ) -> Result<AnalyzeDschResult, AnalyzeDschError> {
        let scenario = self.reader.get_scenario(cmd.scenario_id).await?;

        // The variant's strategic readiness is penalized by the risks the
        // proposed change introduces, so the diff runs first.
        let delta = StructuralComparator::compare(
            &scenario.baseline,
            &scenario.variant,
            &self.config.comparator,
        );

        let baseline = DschAnalyzer::analyze(
            &scenario.baseline,
            DschContext {
                scoring: cmd.scoring.as_ref(),
                risk_factors: &[],
            },
            &self.config.dsch,
        );
        let variant = DschAnalyzer::analyze(
            &scenario.variant,
            DschContext {
                scoring: cmd.scoring.as_ref(),
                risk_factors: &delta.risk_factors,
            },
            &self.config.dsch,
        );
        let improvement = DschAnalyzer::improvement(&baseline, &variant, &self.config.dsch);

        debug!(
            scenario_id = %cmd.scenario_id,
            overall_improvement = improvement.overall,
            "Analyzed scenario structures"
        );
        Ok(AnalyzeDschResult {
            baseline,
            variant,
            improvement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScenarioStore;
    use crate::domain::foundation::{OrganizationId, UserId};
    use crate::domain::structure::{OrganizationStructure, Position, Scenario};
    use crate::ports::ScenarioRepository;

    fn pos(id: &str, title: &str, layer: u32, reports_to: Option<&str>) -> Position {
        Position::new(
            Some(id.to_string()),
            title,
            layer,
            reports_to.map(str::to_string),
            1.0,
            120_000.0,
        )
        .unwrap()
    }

    async fn stored_scenario(store: &InMemoryScenarioStore) -> Scenario {
        let baseline = OrganizationStructure::new(vec![
            pos("p1", "Director", 1, None),
            pos("p2", "Manager", 2, Some("p1")),
            pos("p3", "Team Lead", 3, Some("p2")),
            pos("p4", "Analyst", 4, Some("p3")),
        ])
        .unwrap();
        let variant = OrganizationStructure::new(vec![
            pos("p1", "Director", 1, None),
            pos("p2", "Manager", 2, Some("p1")),
            pos("p4", "Analyst", 3, Some("p2")),
        ])
        .unwrap();
        let scenario = Scenario::create(
            OrganizationId::new(),
            "Flatten reporting",
            None,
            baseline,
            variant,
            UserId::new("analyst-1").unwrap(),
        )
        .unwrap();
        store.save(scenario.clone()).await.unwrap();
        scenario
    }

    fn handler(store: Arc<InMemoryScenarioStore>) -> AnalyzeDschHandler {
        AnalyzeDschHandler::new(store, Arc::new(AnalysisConfig::default()))
    }

    #[tokio::test]
    async fn produces_unit_range_vectors() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let scenario = stored_scenario(&store).await;

        let result = handler(store)
            .handle(AnalyzeDschCommand {
                scenario_id: scenario.id,
                scoring: None,
            })
            .await
            .unwrap();

        for vector in [&result.baseline, &result.variant] {
            for dim in [
                vector.structural_complexity,
                vector.operational_efficiency,
                vector.cultural_alignment,
                vector.strategic_readiness,
            ] {
                assert!((0.0..=1.0).contains(&dim));
            }
        }
    }

    #[tokio::test]
    async fn flattening_reduces_complexity() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let scenario = stored_scenario(&store).await;

        let result = handler(store)
            .handle(AnalyzeDschCommand {
                scenario_id: scenario.id,
                scoring: None,
            })
            .await
            .unwrap();

        assert!(result.variant.structural_complexity < result.baseline.structural_complexity);
        assert!(result.improvement.structural_complexity < 0.0);
    }

    #[tokio::test]
    async fn unknown_scenario_is_not_found() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let result = handler(store)
            .handle(AnalyzeDschCommand {
                scenario_id: ScenarioId::new(),
                scoring: None,
            })
            .await;
        assert!(matches!(result, Err(AnalyzeDschError::ScenarioNotFound(_))));
    }

    #[tokio::test]
    async fn same_scenario_gives_same_result() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let scenario = stored_scenario(&store).await;
        let handler = handler(store);

        let cmd = AnalyzeDschCommand {
            scenario_id: scenario.id,
            scoring: None,
        };
        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();
        assert_eq!(first, second);
    }
}
