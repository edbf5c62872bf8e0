//! Adds `mimeType` and `encoding` parameters to content producers.

use extmodel_declaration::{
    ComponentKind, ExpressionSupport, LoadingContext, ParameterDeclaration, SyntheticKind,
};
use extmodel_foundation::{DataType, Result};

use super::synthetic::add_synthetic;
use crate::enricher::{Enricher, distinct_components_of};

/// Name of the synthetic MIME type parameter.
pub const MIME_TYPE_PARAMETER: &str = "mimeType";

/// Name of the synthetic encoding parameter.
pub const ENCODING_PARAMETER: &str = "encoding";

/// Lets users state the media type of string, binary or untyped output whose
/// representation is only known at runtime.
#[derive(Debug, Default)]
pub struct DataTypeEnricher;

impl Enricher for DataTypeEnricher {
    fn name(&self) -> &'static str {
        "data-type"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let candidates =
            distinct_components_of(graph, &[ComponentKind::Operation, ComponentKind::Source]);

        for id in candidates {
            let needs_parameters = graph.component(id).executable().is_some_and(|e| {
                e.output.ty.is_inspectable_content() && !e.output.has_fixed_media_type()
            });
            if !needs_parameters {
                continue;
            }

            add_synthetic(
                graph,
                id,
                SyntheticKind::MimeType,
                ParameterDeclaration::new(MIME_TYPE_PARAMETER, DataType::String)
                    .with_description("The mime type of the payload that this operation outputs.")
                    .with_expression_support(ExpressionSupport::Supported),
            )?;
            add_synthetic(
                graph,
                id,
                SyntheticKind::Encoding,
                ParameterDeclaration::new(ENCODING_PARAMETER, DataType::String)
                    .with_description("The encoding of the payload that this operation outputs.")
                    .with_expression_support(ExpressionSupport::Supported),
            )?;
        }
        Ok(())
    }
}
