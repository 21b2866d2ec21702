//! In-memory scenario store, used in tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{OrganizationId, ScenarioId};
use crate::domain::structure::Scenario;
use crate::ports::{ScenarioReader, ScenarioRepository, ScenarioStoreError};

/// Thread-safe map-backed scenario store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioStore {
    scenarios: Arc<RwLock<HashMap<ScenarioId, Scenario>>>,
}

impl InMemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scenarios.
    pub async fn count(&self) -> usize {
        self.scenarios.read().await.len()
    }

    /// Removes all stored scenarios.
    pub async fn clear(&self) {
        self.scenarios.write().await.clear();
    }
}

#[async_trait]
impl ScenarioReader for InMemoryScenarioStore {
    async fn get_scenario(&self, id: ScenarioId) -> Result<Scenario, ScenarioStoreError> {
        self.scenarios
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ScenarioStoreError::NotFound(id))
    }

    async fn list_for_organization(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Scenario>, ScenarioStoreError> {
        let scenarios = self.scenarios.read().await;
        let mut matching: Vec<Scenario> = scenarios
            .values()
            .filter(|s| s.organization_id == organization_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioStore {
    async fn save(&self, scenario: Scenario) -> Result<(), ScenarioStoreError> {
        self.scenarios
            .write()
            .await
            .insert(scenario.id, scenario);
        Ok(())
    }
}
