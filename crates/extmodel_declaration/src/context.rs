//! The loading context handed to every enricher.

use std::sync::Arc;

use extmodel_foundation::{ModuleOrigin, TypeCatalog};

use crate::graph::DeclarationGraph;
use crate::model::ExtensionModel;

/// Everything one extension load works on: its declaration graph and the
/// shared, read-only type catalog.
#[derive(Debug)]
pub struct LoadingContext {
    graph: DeclarationGraph,
    catalog: Arc<TypeCatalog>,
}

impl LoadingContext {
    /// Wraps a graph produced by a front-end.
    #[must_use]
    pub fn new(graph: DeclarationGraph, catalog: Arc<TypeCatalog>) -> Self {
        Self { graph, catalog }
    }

    /// Returns the declaration graph.
    #[must_use]
    pub fn graph(&self) -> &DeclarationGraph {
        &self.graph
    }

    /// Returns the declaration graph for mutation.
    pub fn graph_mut(&mut self) -> &mut DeclarationGraph {
        &mut self.graph
    }

    /// Returns the type catalog.
    #[must_use]
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Returns the graph for mutation together with the catalog, so an
    /// enricher can consult the catalog while it edits the graph.
    pub fn split_mut(&mut self) -> (&mut DeclarationGraph, &TypeCatalog) {
        (&mut self.graph, &self.catalog)
    }

    /// Name of the extension being loaded.
    #[must_use]
    pub fn extension_name(&self) -> &str {
        &self.graph.extension().name
    }

    /// Module the extension is loaded from.
    #[must_use]
    pub fn origin(&self) -> &ModuleOrigin {
        &self.graph.extension().origin
    }

    /// Freezes the graph into a read-only model.
    #[must_use]
    pub fn into_model(self) -> ExtensionModel {
        ExtensionModel::new(self.graph)
    }
}
