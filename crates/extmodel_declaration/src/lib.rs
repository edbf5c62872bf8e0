//! Mutable declaration graph for extension models.
//!
//! This crate provides:
//! - [`DeclarationGraph`] - Arena-backed graph rooted at an [`ExtensionDeclaration`]
//! - [`ComponentDeclaration`] - Configurations, operations, sources and friends
//! - [`ParameterGroupDeclaration`] / [`ParameterDeclaration`] - Parameters
//! - [`ModelProperties`] - The typed metadata bag
//! - [`LoadingContext`] - What enrichers operate on
//! - [`ExtensionModel`] - The frozen result

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod context;
pub mod extension;
pub mod graph;
pub mod id;
pub mod metadata;
pub mod model;
pub mod parameter;
pub mod property;

pub use component::{
    ComponentDeclaration, ComponentKind, Executable, ExecutionType, MediaTypeSpec,
    OutputDeclaration,
};
pub use context::LoadingContext;
pub use extension::{
    ErrorParent, ErrorTypeDefinition, ExtensionDeclaration, ImportedType, SubTypesMapping,
};
pub use graph::{DeclarationGraph, Parent, Reference};
pub use id::{ComponentId, GroupId};
pub use metadata::{
    Deprecation, DisplayModel, ElementKind, ElementReference, LayoutModel, ProviderModel,
    ReferenceTarget, StereotypeDefinition,
};
pub use model::ExtensionModel;
pub use parameter::{
    DEFAULT_GROUP_NAME, ExpressionSupport, ParameterDeclaration, ParameterGroupDeclaration,
    ParameterRole,
};
pub use property::{
    DeclaringMember, FieldInfo, ImplementingSource, LayoutSlot, ModelProperties, ModelProperty,
    PropertyKind, ResolvedLayout, SyntheticKind,
};
