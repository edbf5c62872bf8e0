//! Adds transaction control parameters to transactional components.

use extmodel_declaration::{
    ComponentKind, ExpressionSupport, LoadingContext, ParameterDeclaration, SyntheticKind,
};
use extmodel_foundation::{DataType, Result};

use super::synthetic::add_synthetic;
use crate::enricher::{Enricher, distinct_components_of};

/// Name of the synthetic transactional action parameter.
pub const TRANSACTIONAL_ACTION_PARAMETER: &str = "transactionalAction";

/// Name of the synthetic transaction type parameter of sources.
pub const TRANSACTION_TYPE_PARAMETER: &str = "transactionType";

/// Actions an operation may take on the current transaction.
pub const OPERATION_ACTIONS: [&str; 3] = ["ALWAYS_JOIN", "JOIN_IF_POSSIBLE", "NOT_SUPPORTED"];

/// Actions a source may take when it starts a flow.
pub const SOURCE_ACTIONS: [&str; 2] = ["ALWAYS_BEGIN", "NONE"];

/// Kinds of transactions a source may begin.
pub const TRANSACTION_TYPES: [&str; 2] = ["LOCAL", "XA"];

/// Adds `transactionalAction` to transactional operations and sources, and
/// `transactionType` to transactional sources.
#[derive(Debug, Default)]
pub struct TransactionalActionEnricher;

impl Enricher for TransactionalActionEnricher {
    fn name(&self) -> &'static str {
        "transactional-action"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let candidates =
            distinct_components_of(graph, &[ComponentKind::Operation, ComponentKind::Source]);

        for id in candidates {
            let component = graph.component(id);
            if !component.executable().is_some_and(|e| e.transactional) {
                continue;
            }

            if component.kind == ComponentKind::Operation {
                let action = enum_parameter(
                    TRANSACTIONAL_ACTION_PARAMETER,
                    &OPERATION_ACTIONS,
                    "JOIN_IF_POSSIBLE",
                )
                .with_description(
                    "The type of joining action that operations can take regarding transactions.",
                );
                add_synthetic(graph, id, SyntheticKind::TransactionalAction, action)?;
            } else {
                let action = enum_parameter(TRANSACTIONAL_ACTION_PARAMETER, &SOURCE_ACTIONS, "NONE")
                    .with_description(
                        "The type of beginning action that sources can take regarding transactions.",
                    );
                let kind = enum_parameter(TRANSACTION_TYPE_PARAMETER, &TRANSACTION_TYPES, "LOCAL")
                    .with_description("The type of transaction to create.");
                add_synthetic(graph, id, SyntheticKind::TransactionalAction, action)?;
                add_synthetic(graph, id, SyntheticKind::TransactionType, kind)?;
            }
        }
        Ok(())
    }
}

fn enum_parameter(name: &str, values: &[&str], default: &str) -> ParameterDeclaration {
    let values = values.iter().map(ToString::to_string).collect();
    ParameterDeclaration::new(name, DataType::Enum(values))
        .with_expression_support(ExpressionSupport::NotSupported)
        .with_default(default)
}
