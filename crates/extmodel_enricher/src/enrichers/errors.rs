//! Resolves the extension's error types and what each component throws.

use std::collections::HashMap;

use extmodel_declaration::{ComponentKind, LoadingContext};
use extmodel_foundation::{Error, ErrorContext, ErrorModel, Result, platform_errors};
use im::OrdSet;
use tracing::trace;

use crate::enricher::{Enricher, distinct_components_of};
use crate::resolve::ErrorTypeResolver;
use crate::resolve::errors::platform_counterpart;

/// Errors every connection-requiring component may raise.
pub const CONNECTION_ERRORS: [&str; 2] = [
    platform_errors::CONNECTIVITY,
    platform_errors::RETRY_EXHAUSTED,
];

/// Builds the extension's error hierarchy, validates throws declarations
/// and injects connection errors.
#[derive(Debug, Default)]
pub struct ErrorsEnricher;

impl Enricher for ErrorsEnricher {
    fn name(&self) -> &'static str {
        "errors"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let namespace = graph.extension().error_namespace();
        let definitions = &graph.extension().error_definitions;
        let resolved = ErrorTypeResolver::resolve_all(namespace.clone(), definitions)?;

        let mut by_identifier: HashMap<String, ErrorModel> = resolved
            .iter()
            .map(|model| (model.identifier.clone(), model.clone()))
            .collect();
        let mut all: OrdSet<ErrorModel> = resolved.into_iter().collect();
        let inherited = graph.extension().throws.clone();
        for identifier in inherited.iter().flatten() {
            if !by_identifier.contains_key(identifier) {
                return Err(Error::unmapped_throws(
                    graph.extension().name.clone(),
                    identifier.clone(),
                ));
            }
        }

        let throwing = [
            ComponentKind::Operation,
            ComponentKind::Source,
            ComponentKind::Construct,
        ];
        for id in distinct_components_of(graph, &throwing) {
            let component = graph.component(id);
            let Some(executable) = component.executable() else {
                continue;
            };

            let mut errors = OrdSet::new();
            let declared = executable.throws.as_ref().or(inherited.as_ref());
            for identifier in declared.into_iter().flatten() {
                let model = by_identifier.get(identifier).ok_or_else(|| {
                    Error::unmapped_throws(component.name.clone(), identifier.clone())
                        .with_context(ErrorContext::new().with_component(component.name.clone()))
                })?;
                errors.insert(model.clone());
            }

            if executable.requires_connection {
                for identifier in CONNECTION_ERRORS {
                    let model = by_identifier
                        .entry(identifier.to_string())
                        .or_insert_with(|| {
                            ErrorModel::child(
                                namespace.clone(),
                                identifier,
                                platform_counterpart(identifier),
                            )
                        })
                        .clone();
                    all.insert(model.clone());
                    errors.insert(model);
                }
            }

            trace!(component = %component.name, errors = errors.len(), "resolved errors");
            if let Some(executable) = graph.component_mut(id).executable_mut() {
                executable.errors = errors;
            }
        }

        graph.extension_mut().errors = all;
        Ok(())
    }
}
