//! Copies deprecation markers from implementation metadata onto declarations.
//!
//! Only the annotated element itself is marked; nothing is inherited from a
//! parent declaration.

use extmodel_declaration::{Deprecation, LoadingContext, ModelProperties};
use extmodel_foundation::Result;

use crate::enricher::{Enricher, distinct_components};
use crate::visit::Processed;

/// Propagates deprecation from implementing types and declaring members.
#[derive(Debug, Default)]
pub struct DeprecationEnricher;

impl Enricher for DeprecationEnricher {
    fn name(&self) -> &'static str {
        "deprecation"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();

        let extension = graph.extension_mut();
        if extension.deprecation.is_none() {
            extension.deprecation = marker(&extension.properties);
        }

        let mut groups = Processed::new();
        for id in distinct_components(graph) {
            let component = graph.component_mut(id);
            if component.deprecation.is_none() {
                component.deprecation = marker(&component.properties);
            }

            let owned = component.groups.clone();
            for gid in owned {
                if !groups.first_visit(gid) {
                    continue;
                }
                for parameter in &mut graph.group_mut(gid).parameters {
                    if parameter.deprecation.is_none() {
                        parameter.deprecation = marker(&parameter.properties);
                    }
                }
            }
        }
        Ok(())
    }
}

fn marker(properties: &ModelProperties) -> Option<Deprecation> {
    properties
        .implementing_source()
        .and_then(|source| source.deprecated.clone())
        .or_else(|| {
            properties
                .declaring_member()
                .and_then(|member| member.deprecated.clone())
        })
}
