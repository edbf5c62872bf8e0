//! The concrete enrichers, in the order the standard pipeline runs them.
//!
//! - [`DeprecationEnricher`] - Deprecation markers from implementation metadata
//! - [`ConnectivityEnricher`] - Which components need a connection
//! - [`ExecutionTypeEnricher`] - Threading hint per executable
//! - [`ImportedTypesEnricher`] - Exported and imported object types
//! - [`StaticSchemaEnricher`] - Declared output schemas
//! - [`DataTypeEnricher`] - `mimeType` / `encoding` parameters
//! - [`TargetParameterEnricher`] - `target` / `targetValue` parameters
//! - [`TransactionalActionEnricher`] - Transaction parameters
//! - [`ErrorsEnricher`] - Error hierarchy and throws validation
//! - [`StereotypesEnricher`] - Component stereotypes
//! - [`ElementReferencesEnricher`] - Parameter reference targets
//! - [`RefNameEnricher`] - Reference-name fields
//! - [`RequiredForMetadataEnricher`] - Metadata key parameters
//! - [`LayoutEnricher`] - Parameter and group ordering

mod connectivity;
mod data_type;
mod deprecation;
mod element_references;
mod errors;
mod execution_type;
mod imports;
mod layout;
mod ref_name;
mod required_for_metadata;
mod static_schema;
mod stereotypes;
mod synthetic;
mod target;
mod transactional;

pub use connectivity::ConnectivityEnricher;
pub use data_type::{DataTypeEnricher, ENCODING_PARAMETER, MIME_TYPE_PARAMETER};
pub use deprecation::DeprecationEnricher;
pub use element_references::ElementReferencesEnricher;
pub use errors::{CONNECTION_ERRORS, ErrorsEnricher};
pub use execution_type::ExecutionTypeEnricher;
pub use imports::ImportedTypesEnricher;
pub use layout::LayoutEnricher;
pub use ref_name::RefNameEnricher;
pub use required_for_metadata::RequiredForMetadataEnricher;
pub use static_schema::StaticSchemaEnricher;
pub use stereotypes::StereotypesEnricher;
pub use synthetic::ADVANCED_TAB;
pub use target::{
    DEFAULT_TARGET_VALUE, TARGET_PARAMETER, TARGET_VALUE_PARAMETER, TargetParameterEnricher,
};
pub use transactional::{
    OPERATION_ACTIONS, SOURCE_ACTIONS, TRANSACTION_TYPE_PARAMETER, TRANSACTION_TYPES,
    TRANSACTIONAL_ACTION_PARAMETER, TransactionalActionEnricher,
};
