//! Marks executable components that need a connection.

use extmodel_declaration::LoadingContext;
use extmodel_foundation::Result;
use tracing::trace;

use crate::enricher::{Enricher, distinct_components};

/// Sets `requires_connection` on executables that declare a connection
/// parameter or take part in transactions.
#[derive(Debug, Default)]
pub struct ConnectivityEnricher;

impl Enricher for ConnectivityEnricher {
    fn name(&self) -> &'static str {
        "connectivity"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        for id in distinct_components(graph) {
            let component = graph.component_mut(id);
            let Some(executable) = component.executable.as_mut() else {
                continue;
            };
            executable.requires_connection =
                executable.uses_connection || executable.transactional;
            if executable.requires_connection {
                trace!(component = %component.name, "requires a connection");
            }
        }
        Ok(())
    }
}
