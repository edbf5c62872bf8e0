//! Core types shared by every layer of the extension model loader.
//!
//! This crate provides:
//! - [`Error`] - Model definition errors with context
//! - [`ErrorModel`] and [`StereotypeModel`] - Namespaced parent chains
//! - [`TypeId`], [`ModuleOrigin`], [`DataType`] - Type identity and shape
//! - [`TypeCatalog`] - Read-only cross-module type registry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod types;

pub use catalog::{ExtensionSummary, TypeCatalog, TypeCatalogBuilder};
pub use error::{Error, ErrorContext, ErrorKind};
pub use model::{
    ErrorModel, OBJECT_STORE_NAMESPACE, PLATFORM_NAMESPACE, StereotypeModel, platform_errors,
    platform_stereotypes,
};
pub use types::{DataType, ModuleId, ModuleOrigin, TypeDescriptor, TypeId};

/// Result type alias using the extension model [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
