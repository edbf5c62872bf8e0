//! Extmodel - extension declaration enrichment
//!
//! This crate re-exports all layers of the loader for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: extmodel_enricher    - Enrichers, resolution engines, pipeline, loader
//! Layer 1: extmodel_declaration - Declaration graph, model properties, frozen model
//! Layer 0: extmodel_foundation  - Errors, error/stereotype models, type catalog
//! ```

pub use extmodel_declaration as declaration;
pub use extmodel_enricher as enricher;
pub use extmodel_foundation as foundation;
