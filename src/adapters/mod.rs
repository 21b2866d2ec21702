//! Adapters implementing the storage ports.

pub mod memory;
