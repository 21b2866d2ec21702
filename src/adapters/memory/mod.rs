//! In-memory adapter implementations.

mod scenario_store;

pub use scenario_store::InMemoryScenarioStore;
