//! Cross-layer integration tests for extension loading
//!
//! Tests that verify the full pipeline over realistic declaration graphs.

mod concurrency;
mod heisenberg;
