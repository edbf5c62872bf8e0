//! Decides how the runtime schedules each executable component.

use extmodel_declaration::{ExecutionType, LoadingContext};
use extmodel_foundation::Result;

use crate::enricher::{Enricher, distinct_components};

/// Resolves execution types. Runs after [`ConnectivityEnricher`].
///
/// [`ConnectivityEnricher`]: super::ConnectivityEnricher
#[derive(Debug, Default)]
pub struct ExecutionTypeEnricher;

impl Enricher for ExecutionTypeEnricher {
    fn name(&self) -> &'static str {
        "execution-type"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        for id in distinct_components(graph) {
            if let Some(executable) = graph.component_mut(id).executable.as_mut() {
                let derived = if executable.blocking && executable.requires_connection {
                    ExecutionType::Blocking
                } else {
                    ExecutionType::CpuLite
                };
                executable.execution_type =
                    Some(executable.declared_execution_type.unwrap_or(derived));
            }
        }
        Ok(())
    }
}
