//! Validates static output schema resources.

use extmodel_declaration::{LoadingContext, ModelProperty};
use extmodel_foundation::{Error, ErrorContext, Result};

use crate::enricher::{Enricher, distinct_components};

/// Checks that every declared output schema resource exists and records it
/// as a [`ModelProperty::StaticSchema`].
#[derive(Debug, Default)]
pub struct StaticSchemaEnricher;

impl Enricher for StaticSchemaEnricher {
    fn name(&self) -> &'static str {
        "static-schema"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let (graph, catalog) = ctx.split_mut();
        for id in distinct_components(graph) {
            let component = graph.component_mut(id);
            let Some(schema) = component
                .executable()
                .and_then(|e| e.output.schema.clone())
            else {
                continue;
            };
            if !catalog.has_resource(&schema) {
                return Err(Error::missing_resource(schema, component.name.clone())
                    .with_context(ErrorContext::new().with_component(component.name.clone())));
            }
            component.properties.insert(ModelProperty::StaticSchema(schema));
        }
        Ok(())
    }
}
