//! Cross-module type catalog.
//!
//! The catalog is populated once per module before enrichment begins and is
//! read-only afterwards. It is plain owned data, so an `Arc<TypeCatalog>` can
//! be shared by extensions loading concurrently on different threads.

use std::collections::{HashMap, HashSet};

use crate::model::StereotypeModel;
use crate::types::{ModuleOrigin, TypeDescriptor, TypeId};

// =============================================================================
// ExtensionSummary
// =============================================================================

/// What other extensions can see of an already-loaded extension.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionSummary {
    /// Extension name.
    pub name: String,
    /// Namespace prefix used by element references.
    pub namespace: String,
    /// Module the extension was loaded from.
    pub origin: ModuleOrigin,
    /// Types the extension exports.
    pub exported_types: Vec<TypeDescriptor>,
    /// Stereotype of each configuration, keyed by configuration name.
    pub config_stereotypes: Vec<(String, StereotypeModel)>,
    /// Stereotype of each referable construct, keyed by construct name.
    pub construct_stereotypes: Vec<(String, StereotypeModel)>,
}

impl ExtensionSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, origin: ModuleOrigin) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            origin,
            exported_types: Vec::new(),
            config_stereotypes: Vec::new(),
            construct_stereotypes: Vec::new(),
        }
    }

    /// Adds an exported type; its origin is the extension's origin.
    #[must_use]
    pub fn with_exported_type(mut self, id: TypeId) -> Self {
        let origin = self.origin.clone();
        self.exported_types.push(TypeDescriptor::new(id, origin));
        self
    }

    /// Adds a configuration stereotype.
    #[must_use]
    pub fn with_config(mut self, name: impl Into<String>, stereotype: StereotypeModel) -> Self {
        self.config_stereotypes.push((name.into(), stereotype));
        self
    }

    /// Adds a referable construct stereotype.
    #[must_use]
    pub fn with_construct(mut self, name: impl Into<String>, stereotype: StereotypeModel) -> Self {
        self.construct_stereotypes.push((name.into(), stereotype));
        self
    }

    /// Looks up a construct stereotype by construct name.
    #[must_use]
    pub fn construct(&self, name: &str) -> Option<&StereotypeModel> {
        self.construct_stereotypes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Looks up a configuration stereotype by configuration name.
    #[must_use]
    pub fn config(&self, name: &str) -> Option<&StereotypeModel> {
        self.config_stereotypes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }
}

// =============================================================================
// TypeCatalog
// =============================================================================

/// Registry resolving type identifiers across already-loaded modules.
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    types: HashMap<TypeId, TypeDescriptor>,
    extensions: HashMap<String, ExtensionSummary>,
    /// Exported type → name of the exporting extension.
    exporters: HashMap<TypeId, String>,
    resources: HashSet<String>,
}

impl TypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a catalog.
    #[must_use]
    pub fn builder() -> TypeCatalogBuilder {
        TypeCatalogBuilder::default()
    }

    /// Resolves a type identifier to its descriptor.
    #[must_use]
    pub fn resolve(&self, id: &TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id)
    }

    /// Returns the already-loaded extension exporting the type, if any.
    #[must_use]
    pub fn exporter_of(&self, id: &TypeId) -> Option<&ExtensionSummary> {
        self.exporters
            .get(id)
            .and_then(|name| self.extensions.get(name))
    }

    /// Looks up an already-loaded extension by name.
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&ExtensionSummary> {
        self.extensions.get(name)
    }

    /// Returns true if the resource path is available.
    #[must_use]
    pub fn has_resource(&self, path: &str) -> bool {
        self.resources.contains(path)
    }

    /// Number of resolvable types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

/// Builder for [`TypeCatalog`].
#[derive(Debug, Default)]
pub struct TypeCatalogBuilder {
    catalog: TypeCatalog,
}

impl TypeCatalogBuilder {
    /// Registers a type descriptor. A later registration replaces an earlier one.
    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.catalog.types.insert(descriptor.id.clone(), descriptor);
        self
    }

    /// Registers an already-loaded extension and the types it exports.
    #[must_use]
    pub fn with_extension(mut self, summary: ExtensionSummary) -> Self {
        for descriptor in &summary.exported_types {
            self.catalog
                .exporters
                .insert(descriptor.id.clone(), summary.name.clone());
            self.catalog
                .types
                .insert(descriptor.id.clone(), descriptor.clone());
        }
        self.catalog.extensions.insert(summary.name.clone(), summary);
        self
    }

    /// Registers an available resource path.
    #[must_use]
    pub fn with_resource(mut self, path: impl Into<String>) -> Self {
        self.catalog.resources.insert(path.into());
        self
    }

    /// Finishes the catalog.
    #[must_use]
    pub fn build(self) -> TypeCatalog {
        self.catalog
    }
}
