//! CreateScenarioHandler - command handler for saving new scenarios.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{DomainError, OrganizationId, UserId};
use crate::domain::structure::{OrganizationStructure, Scenario};
use crate::ports::{ScenarioRepository, ScenarioStoreError};

/// Command to create and persist a scenario.
#[derive(Debug, Clone)]
pub struct CreateScenarioCommand {
    pub organization_id: OrganizationId,
    pub name: String,
    pub description: Option<String>,
    pub baseline: OrganizationStructure,
    pub variant: OrganizationStructure,
    pub created_by: UserId,
}

/// Error type for scenario creation.
#[derive(Debug, Clone, Error)]
pub enum CreateScenarioError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] ScenarioStoreError),
}

/// Handler for creating scenarios.
pub struct CreateScenarioHandler {
    repository: Arc<dyn ScenarioRepository>,
}

impl CreateScenarioHandler {
    pub fn new(repository: Arc<dyn ScenarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateScenarioCommand) -> Result<Scenario, CreateScenarioError> {
        let scenario = Scenario::create(
            cmd.organization_id,
            cmd.name,
            cmd.description,
            cmd.baseline,
            cmd.variant,
            cmd.created_by,
        )?;

        self.repository.save(scenario.clone()).await?;

        debug!(
            scenario_id = %scenario.id,
            organization_id = %scenario.organization_id,
            "Created scenario"
        );
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScenarioStore;
    use crate::domain::structure::{Position, ScenarioStatus};
    use crate::ports::ScenarioReader;

    fn structure() -> OrganizationStructure {
        OrganizationStructure::new(vec![Position::new(
            Some("p1".into()),
            "Director",
            1,
            None,
            1.0,
            150_000.0,
        )
        .unwrap()])
        .unwrap()
    }

    fn command(name: &str) -> CreateScenarioCommand {
        CreateScenarioCommand {
            organization_id: OrganizationId::new(),
            name: name.to_string(),
            description: None,
            baseline: structure(),
            variant: structure(),
            created_by: UserId::new("analyst-1").unwrap(),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_a_draft_scenario() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let handler = CreateScenarioHandler::new(store.clone());

        let scenario = handler.handle(command("Flatten admin")).await.unwrap();

        assert_eq!(scenario.status, ScenarioStatus::Draft);
        let loaded = store.get_scenario(scenario.id).await.unwrap();
        assert_eq!(loaded.name, "Flatten admin");
    }

    #[tokio::test]
    async fn rejects_a_blank_name_without_saving() {
        let store = Arc::new(InMemoryScenarioStore::new());
        let handler = CreateScenarioHandler::new(store.clone());

        let result = handler.handle(command("   ")).await;

        assert!(matches!(result, Err(CreateScenarioError::Domain(_))));
        assert_eq!(store.count().await, 0);
    }
}
