//! Ports: trait seams between the application layer and adapters.

mod scenario_store;

pub use scenario_store::{ScenarioReader, ScenarioRepository, ScenarioStoreError};
