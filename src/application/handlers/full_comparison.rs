//! FullComparisonHandler - the complete comparison pipeline.
//!
//! Runs the structural diff, DSCH analysis of both structures, optional
//! ROI projection, and recommendation synthesis for one stored scenario.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    ComparisonResult, DschAnalyzer, DschContext, RecommendationContext,
    RecommendationSynthesizer, RoiCalculator, RoiError, RoiRequest, ScoringResult,
    StructuralComparator,
};
use crate::domain::foundation::ScenarioId;
use crate::ports::{ScenarioReader, ScenarioStoreError};

/// Command for a full scenario comparison.
#[derive(Debug, Clone)]
pub struct FullComparisonCommand {
    pub scenario_id: ScenarioId,
    /// Assessment scores feeding the DSCH dimensions, when available.
    pub scoring: Option<ScoringResult>,
    /// Financial inputs. ROI is computed only when these are supplied.
    pub roi: Option<RoiRequest>,
}

/// Error type for full comparison.
#[derive(Debug, Clone, Error)]
pub enum FullComparisonError {
    #[error("Scenario {0} not found")]
    ScenarioNotFound(ScenarioId),

    #[error(transparent)]
    InvalidFinancialInput(#[from] RoiError),

    #[error(transparent)]
    Storage(ScenarioStoreError),
}

impl From<ScenarioStoreError> for FullComparisonError {
    fn from(err: ScenarioStoreError) -> Self {
        match err {
            ScenarioStoreError::NotFound(id) => FullComparisonError::ScenarioNotFound(id),
            other => FullComparisonError::Storage(other),
        }
    }
}

/// Handler for the full comparison pipeline.
pub struct FullComparisonHandler {
    reader: Arc<dyn ScenarioReader>,
    config: Arc<AnalysisConfig>,
}

impl FullComparisonHandler {
    pub fn new(reader: Arc<dyn ScenarioReader>, config: Arc<AnalysisConfig>) -> Self {
        Self { reader, config }
    }

    pub async fn handle(
        &self,
        cmd: FullComparisonCommand,
    ) -> Result<ComparisonResult, FullComparisonError> {
        let scenario = self.reader.get_scenario(cmd.scenario_id).await?;

        // Structural diff first; its risk factors feed the DSCH context
        // of the variant and the recommendation rules.
        let structural_delta = StructuralComparator::compare(
            &scenario.baseline,
            &scenario.variant,
            &self.config.comparator,
        );
        debug!(
            scenario_id = %cmd.scenario_id,
            risks = structural_delta.risk_factors.len(),
            "Computed structural delta"
        );

        let dsch_baseline = DschAnalyzer::analyze(
            &scenario.baseline,
            DschContext {
                scoring: cmd.scoring.as_ref(),
                risk_factors: &[],
            },
            &self.config.dsch,
        );
        let dsch_variant = DschAnalyzer::analyze(
            &scenario.variant,
            DschContext {
                scoring: cmd.scoring.as_ref(),
                risk_factors: &structural_delta.risk_factors,
            },
            &self.config.dsch,
        );
        let dsch_improvement =
            DschAnalyzer::improvement(&dsch_baseline, &dsch_variant, &self.config.dsch);

        let roi = match &cmd.roi {
            Some(request) => Some(RoiCalculator::calculate(request, &self.config.roi)?),
            None => None,
        };

        let recommendations = RecommendationSynthesizer::synthesize(RecommendationContext {
            scoring: cmd.scoring.as_ref(),
            delta: Some(&structural_delta),
            improvement: Some(&dsch_improvement),
            roi: roi.as_ref(),
        });

        info!(
            scenario_id = %cmd.scenario_id,
            overall_improvement = dsch_improvement.overall,
            recommendations = recommendations.len(),
            "Completed full comparison"
        );

        Ok(ComparisonResult {
            structural_delta,
            dsch_baseline,
            dsch_variant,
            dsch_improvement,
            roi,
            recommendations,
        })
    }
}
