//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the realignment domain.

mod errors;
mod ids;
mod organization_type;
mod score;
mod score_band;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OrganizationId, QuestionId, ScenarioId, UserId};
pub use organization_type::OrganizationType;
pub use score::Score;
pub use score_band::ScoreBand;
pub use timestamp::Timestamp;
