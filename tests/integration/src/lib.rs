//! Integration test utilities for the forum server
//!
//! In-memory repositories, fixtures and a test server that runs the real
//! Axum application on a local port.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
