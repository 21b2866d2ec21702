//! Organizational structures, positions, and scenarios.

pub mod organization;
pub mod position;
pub mod scenario;

pub use organization::{CostStructure, OrganizationStructure, StructureMetrics};
pub use position::{Position, PositionKey};
pub use scenario::{Scenario, ScenarioStatus};
