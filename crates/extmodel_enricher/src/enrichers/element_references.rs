//! Resolves what reference parameters may point at.

use extmodel_declaration::{GroupId, LoadingContext};
use extmodel_foundation::{ErrorContext, Result};

use crate::config::UnresolvedTypePolicy;
use crate::enricher::{Enricher, distinct_components};
use crate::resolve::{ReferenceResolver, ResolvedTarget};
use crate::visit::Processed;

/// Fills allowed stereotypes and element references of parameters that
/// reference configurations, flows, object stores or constructs. Runs after
/// [`StereotypesEnricher`].
///
/// [`StereotypesEnricher`]: super::StereotypesEnricher
#[derive(Debug, Default)]
pub struct ElementReferencesEnricher {
    policy: UnresolvedTypePolicy,
}

impl ElementReferencesEnricher {
    /// Creates the enricher with the given unresolved-type policy.
    #[must_use]
    pub fn new(policy: UnresolvedTypePolicy) -> Self {
        Self { policy }
    }
}

impl Enricher for ElementReferencesEnricher {
    fn name(&self) -> &'static str {
        "element-references"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let (graph, catalog) = ctx.split_mut();

        let mut updates: Vec<(GroupId, usize, ResolvedTarget)> = Vec::new();
        {
            let resolver = ReferenceResolver::new(graph, catalog, self.policy);
            let mut groups = Processed::new();
            for id in distinct_components(graph) {
                for (gid, group) in graph.groups_of(id) {
                    if !groups.first_visit(gid) {
                        continue;
                    }
                    for (index, parameter) in group.parameters.iter().enumerate() {
                        if !parameter.is_reference() {
                            continue;
                        }
                        let resolved = resolver
                            .resolve_all(&parameter.name, &parameter.references)
                            .map_err(|e| {
                                e.with_context(
                                    ErrorContext::new()
                                        .with_component(graph.component(id).name.clone()),
                                )
                            })?;
                        updates.push((gid, index, resolved));
                    }
                }
            }
        }

        for (gid, index, resolved) in updates {
            let parameter = &mut graph.group_mut(gid).parameters[index];
            parameter.allowed_stereotypes = resolved.stereotypes;
            parameter.element_references = resolved.references;
        }
        Ok(())
    }
}
