//! Realign Core - Scenario Scoring & Comparison Engine
//!
//! This crate implements the analytical core of an organizational
//! realignment assessment product: tiered questionnaire scoring,
//! baseline/variant structure diffing, DSCH maturity analysis,
//! ROI modeling, and rule-based recommendation synthesis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
