//! Application layer: handlers orchestrating domain operations.

pub mod handlers;
