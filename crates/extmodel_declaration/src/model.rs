//! The frozen extension model handed to downstream consumers.

use std::sync::Arc;

use extmodel_foundation::ErrorModel;
use im::OrdSet;

use crate::component::{ComponentDeclaration, ComponentKind};
use crate::extension::{ExtensionDeclaration, ImportedType};
use crate::graph::DeclarationGraph;
use crate::id::ComponentId;
use crate::parameter::ParameterDeclaration;

/// Read-only snapshot of a fully enriched declaration graph.
///
/// Cloning is cheap and the model can be shared across threads.
#[derive(Clone, Debug)]
pub struct ExtensionModel {
    graph: Arc<DeclarationGraph>,
}

impl ExtensionModel {
    /// Freezes a graph.
    #[must_use]
    pub fn new(graph: DeclarationGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Extension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.graph.extension().name
    }

    /// The extension root.
    #[must_use]
    pub fn declaration(&self) -> &ExtensionDeclaration {
        self.graph.extension()
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &DeclarationGraph {
        &self.graph
    }

    /// Resolved error types of the extension.
    #[must_use]
    pub fn errors(&self) -> &OrdSet<ErrorModel> {
        &self.graph.extension().errors
    }

    /// Types imported from other modules.
    #[must_use]
    pub fn imported_types(&self) -> &OrdSet<ImportedType> {
        &self.graph.extension().imported_types
    }

    /// Every reachable component of a kind once.
    #[must_use]
    pub fn components_of_kind(&self, kind: ComponentKind) -> Vec<&ComponentDeclaration> {
        self.graph
            .components_of_kind(kind)
            .into_iter()
            .map(|id| self.graph.component(id))
            .collect()
    }

    /// Finds a component by kind and name.
    #[must_use]
    pub fn find(&self, kind: ComponentKind, name: &str) -> Option<&ComponentDeclaration> {
        self.graph.find(kind, name).map(|id| self.graph.component(id))
    }

    /// Finds a component handle by kind and name.
    #[must_use]
    pub fn find_id(&self, kind: ComponentKind, name: &str) -> Option<ComponentId> {
        self.graph.find(kind, name)
    }

    /// Finds an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&ComponentDeclaration> {
        self.find(ComponentKind::Operation, name)
    }

    /// Finds a configuration by name.
    #[must_use]
    pub fn configuration(&self, name: &str) -> Option<&ComponentDeclaration> {
        self.find(ComponentKind::Configuration, name)
    }

    /// Finds a parameter of a component by kind, component name and
    /// parameter name.
    #[must_use]
    pub fn parameter(
        &self,
        kind: ComponentKind,
        component: &str,
        name: &str,
    ) -> Option<&ParameterDeclaration> {
        let id = self.graph.find(kind, component)?;
        self.graph.find_parameter(id, name)
    }
}
