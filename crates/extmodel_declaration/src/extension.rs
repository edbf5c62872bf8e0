//! The extension declaration: root of a declaration graph.

use extmodel_foundation::{ErrorModel, ModuleId, ModuleOrigin, TypeId};
use im::OrdSet;

use crate::id::ComponentId;
use crate::metadata::Deprecation;
use crate::property::ModelProperties;

// =============================================================================
// Error type definitions
// =============================================================================

/// Where an error type definition's parent lives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorParent {
    /// No explicit parent: the platform error of the same identifier when the
    /// platform defines one, otherwise the platform `ANY` root.
    #[default]
    Default,
    /// Another definition of the same extension.
    Extension(String),
    /// A platform error.
    Platform(String),
}

/// An error type declared by the extension.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorTypeDefinition {
    /// Identifier, unique within the extension.
    pub identifier: String,
    /// Parent.
    pub parent: ErrorParent,
}

impl ErrorTypeDefinition {
    /// Creates a definition with the default parent.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            parent: ErrorParent::Default,
        }
    }

    /// Parents the definition on another definition of the same extension.
    #[must_use]
    pub fn child_of(mut self, parent: impl Into<String>) -> Self {
        self.parent = ErrorParent::Extension(parent.into());
        self
    }

    /// Parents the definition on a platform error.
    #[must_use]
    pub fn child_of_platform(mut self, parent: impl Into<String>) -> Self {
        self.parent = ErrorParent::Platform(parent.into());
        self
    }
}

// =============================================================================
// Subtypes and imports
// =============================================================================

/// A polymorphic base type and its declared subtypes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubTypesMapping {
    /// Base type.
    pub base: TypeId,
    /// Subtypes, in declaration order.
    pub subtypes: Vec<TypeId>,
}

impl SubTypesMapping {
    /// Creates a mapping.
    #[must_use]
    pub fn new(base: TypeId, subtypes: Vec<TypeId>) -> Self {
        Self { base, subtypes }
    }
}

/// A type declared by another, already-loaded module and used by this one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportedType {
    /// The imported type.
    pub id: TypeId,
    /// Module the type originates from.
    pub origin: ModuleId,
    /// Extension exporting the type.
    pub exporter: String,
}

// =============================================================================
// ExtensionDeclaration
// =============================================================================

/// Root of a declaration graph.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionDeclaration {
    /// Extension name.
    pub name: String,
    /// Namespace prefix, e.g. `heisenberg`.
    pub namespace: String,
    /// Version.
    pub version: String,
    /// Vendor.
    pub vendor: String,
    /// Module the extension is loaded from.
    pub origin: ModuleOrigin,
    /// Top-level components, in declaration order.
    pub components: Vec<ComponentId>,
    /// Object types the extension exports.
    pub types: OrdSet<TypeId>,
    /// Types imported from other modules; derived.
    pub imported_types: OrdSet<ImportedType>,
    /// Declared subtype mappings.
    pub subtypes: Vec<SubTypesMapping>,
    /// Declared error types.
    pub error_definitions: Vec<ErrorTypeDefinition>,
    /// Resolved error types; derived.
    pub errors: OrdSet<ErrorModel>,
    /// Errors thrown by every executable component without its own list.
    pub throws: Option<Vec<String>>,
    /// Deprecation.
    pub deprecation: Option<Deprecation>,
    /// Model properties.
    pub properties: ModelProperties,
}

impl ExtensionDeclaration {
    /// Creates an empty extension.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, origin: ModuleOrigin) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            version: String::from("1.0.0"),
            vendor: String::new(),
            origin,
            components: Vec::new(),
            types: OrdSet::new(),
            imported_types: OrdSet::new(),
            subtypes: Vec::new(),
            error_definitions: Vec::new(),
            errors: OrdSet::new(),
            throws: None,
            deprecation: None,
            properties: ModelProperties::new(),
        }
    }

    /// Sets the version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the vendor.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    /// Declares an error type.
    #[must_use]
    pub fn with_error(mut self, definition: ErrorTypeDefinition) -> Self {
        self.error_definitions.push(definition);
        self
    }

    /// Declares errors thrown by every component without its own list.
    #[must_use]
    pub fn with_throws<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.throws = Some(errors.into_iter().map(Into::into).collect());
        self
    }

    /// Declares a subtype mapping.
    #[must_use]
    pub fn with_subtypes(mut self, mapping: SubTypesMapping) -> Self {
        self.subtypes.push(mapping);
        self
    }

    /// Declares an exported type.
    #[must_use]
    pub fn with_type(mut self, id: TypeId) -> Self {
        self.types.insert(id);
        self
    }

    /// Namespace of the extension's errors and stereotypes.
    #[must_use]
    pub fn error_namespace(&self) -> String {
        self.namespace.to_uppercase()
    }

    /// Looks up a resolved error by identifier.
    #[must_use]
    pub fn error(&self, identifier: &str) -> Option<&ErrorModel> {
        let namespace = self.error_namespace();
        self.errors.iter().find(|e| e.is(&namespace, identifier))
    }

    /// Returns true if the type is imported.
    #[must_use]
    pub fn imports(&self, id: &TypeId) -> bool {
        self.imported_types.iter().any(|t| &t.id == id)
    }
}
