//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analyze_dsch;
pub mod calculate_roi;
pub mod compare_scenario;
pub mod create_scenario;
pub mod full_comparison;
pub mod score_responses;
pub mod validate_responses;

pub use analyze_dsch::{AnalyzeDschCommand, AnalyzeDschError, AnalyzeDschHandler, AnalyzeDschResult};
pub use calculate_roi::{CalculateRoiCommand, CalculateRoiError, CalculateRoiHandler};
pub use compare_scenario::{CompareScenarioCommand, CompareScenarioError, CompareScenarioHandler};
pub use create_scenario::{CreateScenarioCommand, CreateScenarioError, CreateScenarioHandler};
pub use full_comparison::{FullComparisonCommand, FullComparisonError, FullComparisonHandler};
pub use score_responses::{ScoreResponsesCommand, ScoreResponsesError, ScoreResponsesHandler};
pub use validate_responses::{ValidateResponsesCommand, ValidateResponsesHandler};
