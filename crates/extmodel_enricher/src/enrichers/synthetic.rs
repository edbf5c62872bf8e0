//! Shared plumbing for enrichers that add parameters of their own.

use extmodel_declaration::{
    ComponentId, DeclarationGraph, ModelProperty, ParameterDeclaration, SyntheticKind,
};
use extmodel_foundation::{Error, ErrorContext, Result};
use tracing::trace;

/// Tab synthetic parameters are placed on.
pub const ADVANCED_TAB: &str = "Advanced";

/// Adds a synthetic parameter to the component's default group.
///
/// The group is un-shared first so the parameter does not leak into other
/// components that reuse it.
///
/// # Errors
/// Returns an error if the component already has a parameter of that name.
pub(crate) fn add_synthetic(
    graph: &mut DeclarationGraph,
    id: ComponentId,
    kind: SyntheticKind,
    parameter: ParameterDeclaration,
) -> Result<()> {
    if graph.has_parameter(id, &parameter.name) {
        let component = graph.component(id).name.clone();
        return Err(Error::duplicate_parameter(component.clone(), parameter.name)
            .with_context(ErrorContext::new().with_component(component)));
    }

    trace!(
        component = %graph.component(id).name,
        parameter = %parameter.name,
        "adding synthetic parameter"
    );
    let group = graph.owned_default_group(id);
    graph.group_mut(group).parameters.push(
        parameter
            .with_tab(ADVANCED_TAB)
            .with_property(ModelProperty::Synthetic(kind)),
    );
    Ok(())
}
