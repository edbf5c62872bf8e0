//! Integration tests for Layer 2: Enricher
//!
//! Tests for the resolution engines and individual enrichers driven through
//! a pipeline.

mod resolution;
