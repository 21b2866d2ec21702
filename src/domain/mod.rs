//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Question catalog, response values, and response sets
//! - `tier` - Subscription tier configuration and guardrails
//! - `structure` - Organizational structures and scenarios
//! - `analysis` - Pure domain services (validation, scoring, diffing, DSCH, ROI, recommendations)

pub mod analysis;
pub mod catalog;
pub mod foundation;
pub mod structure;
pub mod tier;
