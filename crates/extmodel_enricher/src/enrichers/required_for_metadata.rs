//! Records which parameters dynamic metadata resolution depends on.

use extmodel_declaration::{ComponentKind, LoadingContext, ModelProperty};
use extmodel_foundation::Result;

use crate::enricher::{Enricher, distinct_components_of};

/// Collects parameters marked as required for metadata on configurations
/// and connection providers.
#[derive(Debug, Default)]
pub struct RequiredForMetadataEnricher;

impl Enricher for RequiredForMetadataEnricher {
    fn name(&self) -> &'static str {
        "required-for-metadata"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let kinds = [ComponentKind::Configuration, ComponentKind::ConnectionProvider];
        for id in distinct_components_of(graph, &kinds) {
            let names: Vec<String> = graph
                .parameters_of(id)
                .filter(|p| p.required_for_metadata)
                .map(|p| p.name.clone())
                .collect();
            if !names.is_empty() {
                graph
                    .component_mut(id)
                    .properties
                    .insert(ModelProperty::RequiredForMetadata(names));
            }
        }
        Ok(())
    }
}
