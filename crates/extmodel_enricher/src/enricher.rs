//! The enricher abstraction.

use extmodel_declaration::{ComponentId, ComponentKind, DeclarationGraph, LoadingContext};
use extmodel_foundation::Result;

use crate::visit::Processed;

/// A single-responsibility pass over a loading context.
///
/// Enrichers read the declaration graph and its properties and write their
/// own derived facts back. They never share private state with one another.
pub trait Enricher: Send + Sync {
    /// Stable name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Runs the pass.
    ///
    /// # Errors
    /// Returns an error if the declarations are not a legal model.
    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()>;
}

/// Every reachable component once, following parent edges so that each
/// flyweight is yielded only on its first visit.
pub(crate) fn distinct_components(graph: &DeclarationGraph) -> Vec<ComponentId> {
    let mut processed = Processed::new();
    graph
        .references()
        .into_iter()
        .map(|reference| reference.id)
        .filter(|&id| processed.first_visit(id))
        .collect()
}

/// Like [`distinct_components`], restricted to the given kinds.
pub(crate) fn distinct_components_of(
    graph: &DeclarationGraph,
    kinds: &[ComponentKind],
) -> Vec<ComponentId> {
    distinct_components(graph)
        .into_iter()
        .filter(|&id| kinds.contains(&graph.component(id).kind))
        .collect()
}
