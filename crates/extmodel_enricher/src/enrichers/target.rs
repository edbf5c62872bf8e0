//! Adds `target` and `targetValue` parameters to operations with output.

use extmodel_declaration::{
    ComponentKind, ExpressionSupport, LoadingContext, ParameterDeclaration, SyntheticKind,
};
use extmodel_foundation::{DataType, Result};

use super::synthetic::add_synthetic;
use crate::enricher::{Enricher, distinct_components_of};

/// Name of the synthetic target variable parameter.
pub const TARGET_PARAMETER: &str = "target";

/// Name of the synthetic target value parameter.
pub const TARGET_VALUE_PARAMETER: &str = "targetValue";

/// Default expression stored into the target variable.
pub const DEFAULT_TARGET_VALUE: &str = "#[payload]";

/// Lets users store an operation's result in a variable instead of the
/// message payload.
#[derive(Debug, Default)]
pub struct TargetParameterEnricher;

impl Enricher for TargetParameterEnricher {
    fn name(&self) -> &'static str {
        "target-parameters"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        for id in distinct_components_of(graph, &[ComponentKind::Operation]) {
            let produces_output = graph
                .component(id)
                .executable()
                .is_some_and(|e| !e.output.ty.is_void());
            if !produces_output {
                continue;
            }

            add_synthetic(
                graph,
                id,
                SyntheticKind::Target,
                ParameterDeclaration::new(TARGET_PARAMETER, DataType::String)
                    .with_description(
                        "The name of a variable on which the operation's output will be placed",
                    )
                    .with_expression_support(ExpressionSupport::NotSupported),
            )?;
            add_synthetic(
                graph,
                id,
                SyntheticKind::TargetValue,
                ParameterDeclaration::new(TARGET_VALUE_PARAMETER, DataType::String)
                    .with_description(
                        "An expression that will be evaluated against the operation's output \
                         and the outcome of that expression will be stored in the target variable",
                    )
                    .with_expression_support(ExpressionSupport::Required)
                    .with_default(DEFAULT_TARGET_VALUE),
            )?;
        }
        Ok(())
    }
}
