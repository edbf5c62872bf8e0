//! Records which object types the extension exports and which it imports.

use extmodel_declaration::LoadingContext;
use extmodel_foundation::{Result, TypeId};
use im::OrdSet;

use crate::config::UnresolvedTypePolicy;
use crate::enricher::{Enricher, distinct_components};
use crate::resolve::{ImportDecision, ImportResolver};
use crate::visit::Processed;

/// Classifies subtype mappings and parameter types as local, imported or
/// private.
#[derive(Debug, Default)]
pub struct ImportedTypesEnricher {
    policy: UnresolvedTypePolicy,
}

impl ImportedTypesEnricher {
    /// Creates the enricher with the given unresolved-type policy.
    #[must_use]
    pub fn new(policy: UnresolvedTypePolicy) -> Self {
        Self { policy }
    }
}

impl Enricher for ImportedTypesEnricher {
    fn name(&self) -> &'static str {
        "imported-types"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let (graph, catalog) = ctx.split_mut();

        // Subtype mappings first; their local types become exports.
        let subtype_ids: Vec<TypeId> = graph
            .extension()
            .subtypes
            .iter()
            .flat_map(|mapping| std::iter::once(&mapping.base).chain(&mapping.subtypes))
            .cloned()
            .collect();

        let mut exports = OrdSet::new();
        let mut imports = OrdSet::new();
        {
            let resolver = ImportResolver::new(graph.extension(), catalog, self.policy);
            for id in &subtype_ids {
                match resolver.decide(id)? {
                    Some(ImportDecision::Local) => {
                        exports.insert(id.clone());
                    }
                    Some(ImportDecision::Import(imported)) => {
                        imports.insert(imported);
                    }
                    Some(ImportDecision::Private) | None => {}
                }
            }
        }

        // Then every object type a parameter mentions; only imports are kept.
        let mut groups = Processed::new();
        let mut parameter_types = Vec::new();
        for id in distinct_components(graph) {
            for (gid, group) in graph.groups_of(id) {
                if !groups.first_visit(gid) {
                    continue;
                }
                parameter_types.extend(
                    group
                        .parameters
                        .iter()
                        .filter_map(|p| p.ty.object_type())
                        .cloned(),
                );
            }
        }
        {
            let resolver = ImportResolver::new(graph.extension(), catalog, self.policy);
            for id in &parameter_types {
                if let Some(ImportDecision::Import(imported)) = resolver.decide(id)? {
                    imports.insert(imported);
                }
            }
        }

        let extension = graph.extension_mut();
        extension.types = extension.types.clone().union(exports);
        extension.imported_types = extension.imported_types.clone().union(imports);
        Ok(())
    }
}
