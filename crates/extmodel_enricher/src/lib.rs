//! Enricher pipeline that completes extension declarations into models.
//!
//! This crate provides:
//! - [`Enricher`] - The single-responsibility pass abstraction
//! - [`Pipeline`] - An ordered, fail-fast list of enrichers
//! - [`ExtensionLoader`] - Runs the pipeline and freezes the result
//! - [`PipelineConfig`] - Unresolved-type policy and optional parameters
//! - [`resolve`] - Error, stereotype, import and layout resolution engines
//! - [`enrichers`] - The standard enrichers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod enricher;
pub mod enrichers;
pub mod loader;
pub mod pipeline;
pub mod resolve;
pub mod visit;

pub use config::{PipelineConfig, UnresolvedTypePolicy};
pub use enricher::Enricher;
pub use loader::ExtensionLoader;
pub use pipeline::Pipeline;
pub use visit::Processed;
