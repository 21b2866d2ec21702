//! Storage ports for scenario persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{OrganizationId, ScenarioId};
use crate::domain::structure::Scenario;

/// Errors surfaced by scenario storage adapters.
#[derive(Debug, Clone, Error)]
pub enum ScenarioStoreError {
    #[error("Scenario {0} not found")]
    NotFound(ScenarioId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Read access to stored scenarios.
#[async_trait]
pub trait ScenarioReader: Send + Sync {
    async fn get_scenario(&self, id: ScenarioId) -> Result<Scenario, ScenarioStoreError>;

    /// Scenarios belonging to one organization, newest first.
    async fn list_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Scenario>, ScenarioStoreError>;
}

/// Write access to scenario storage.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Inserts or replaces a scenario by id.
    async fn save(&self, scenario: Scenario) -> Result<(), ScenarioStoreError>;
}
