//! CalculateRoiHandler - financial projection for a stored scenario.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::domain::analysis::{RoiCalculator, RoiError, RoiRequest, RoiResult};
use crate::domain::foundation::ScenarioId;
use crate::ports::{ScenarioReader, ScenarioStoreError};

/// Command to project ROI for a scenario.
#[derive(Debug, Clone)]
pub struct CalculateRoiCommand {
    pub scenario_id: ScenarioId,
    pub request: RoiRequest,
}

/// Error type for ROI projection.
#[derive(Debug, Clone, Error)]
pub enum CalculateRoiError {
    #[error("Scenario {0} not found")]
    ScenarioNotFound(ScenarioId),

    #[error(transparent)]
    InvalidFinancialInput(#[from] RoiError),

    #[error(transparent)]
    Storage(ScenarioStoreError),
}

impl From<ScenarioStoreError> for CalculateRoiError {
    fn from(err: ScenarioStoreError) -> Self {
        match err {
            ScenarioStoreError::NotFound(id) => CalculateRoiError::ScenarioNotFound(id),
            other => CalculateRoiError::Storage(other),
        }
    }
}

/// Handler for ROI projections. Defaults for horizon and discount rate
/// come from configuration.
pub struct CalculateRoiHandler {
    reader: Arc<dyn ScenarioReader>,
    config: Arc<AnalysisConfig>,
}

impl CalculateRoiHandler {
    pub fn new(reader: Arc<dyn ScenarioReader>, config: Arc<AnalysisConfig>) -> Self {
        Self { reader, config }
    }

    pub async fn handle(&self, cmd: CalculateRoiCommand) -> Result<RoiResult, CalculateRoiError> {
        let scenario = self.reader.get_scenario(cmd.scenario_id).await?;

        let result = RoiCalculator::calculate(&cmd.request, &self.config.roi)?;
        debug!(
            scenario_id = %scenario.id,
            roi_percentage = result.roi_percentage,
            payback_months = ?result.payback_months,
            horizon_years = result.horizon_years,
            "Calculated ROI"
        );
        Ok(result)
    }
}
