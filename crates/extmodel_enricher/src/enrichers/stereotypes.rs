//! Assigns a stereotype to every component.

use extmodel_declaration::LoadingContext;
use extmodel_foundation::Result;

use crate::enricher::{Enricher, distinct_components};
use crate::resolve::StereotypeResolver;

/// Resolves declared stereotypes, or falls back to the kind's default.
#[derive(Debug, Default)]
pub struct StereotypesEnricher;

impl Enricher for StereotypesEnricher {
    fn name(&self) -> &'static str {
        "stereotypes"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let resolver = StereotypeResolver::new(graph.extension().error_namespace());
        for id in distinct_components(graph) {
            let component = graph.component_mut(id);
            component.stereotype = resolver.resolve(
                component.kind,
                &component.name,
                component.stereotype_definition.as_ref(),
            );
        }
        Ok(())
    }
}
