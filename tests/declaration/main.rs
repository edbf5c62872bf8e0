//! Integration tests for Layer 1: Declaration
//!
//! Tests for the declaration graph, flyweights, property bags and the frozen
//! model.

mod graph;
mod properties;
