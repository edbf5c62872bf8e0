//! Resolves parameter and group ordering.
//!
//! Parameters are ordered inside their group once, however many components
//! share the group. Placement across a component is per component: the
//! parameters of its default group and its named groups share one order
//! space, so a named group can sit between two top-level parameters. That
//! placement is only recorded in the component's [`ResolvedLayout`].

use std::collections::HashMap;

use extmodel_declaration::{
    ComponentId, DeclarationGraph, GroupId, LayoutSlot, LoadingContext, ModelProperty,
    ParameterDeclaration, ResolvedLayout,
};
use extmodel_foundation::Result;
use tracing::trace;

use crate::enricher::{Enricher, distinct_components};
use crate::resolve::layout::sorted_indices;
use crate::visit::Processed;

/// Assigns layout orders and records each component's resolved layout.
#[derive(Debug, Default)]
pub struct LayoutEnricher;

impl Enricher for LayoutEnricher {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let components: Vec<_> = distinct_components(graph)
            .into_iter()
            .filter(|&id| !graph.component(id).groups.is_empty())
            .collect();
        let declared = declared_top_level(graph, &components);

        let mut groups = Processed::new();
        for &id in &components {
            let owned = graph.component(id).groups.clone();
            for gid in owned {
                if groups.first_visit(gid) {
                    order_parameters(&mut graph.group_mut(gid).parameters);
                }
            }
            place(graph, id, &declared);
        }
        Ok(())
    }
}

/// Parameter names and declared orders of every default group, captured
/// before any group is reordered.
fn declared_top_level(
    graph: &DeclarationGraph,
    components: &[ComponentId],
) -> HashMap<GroupId, Vec<(String, Option<u32>)>> {
    components
        .iter()
        .flat_map(move |&id| graph.groups_of(id))
        .filter(|(_, group)| group.is_default())
        .map(|(gid, group)| {
            let parameters = group
                .parameters
                .iter()
                .map(|p| (p.name.clone(), p.layout.order))
                .collect();
            (gid, parameters)
        })
        .collect()
}

fn order_parameters(parameters: &mut Vec<ParameterDeclaration>) {
    let explicit: Vec<Option<u32>> = parameters.iter().map(|p| p.layout.order).collect();
    let mut slots: Vec<_> = parameters.drain(..).map(Some).collect();
    for (index, order) in sorted_indices(&explicit) {
        if let Some(mut parameter) = slots[index].take() {
            parameter.layout.order = Some(order);
            parameters.push(parameter);
        }
    }
}

/// One entry of a component's top-level order space.
#[derive(Clone, Copy)]
enum Slot<'a> {
    Parameter(GroupId, &'a str),
    Group(GroupId),
}

fn place(
    graph: &mut DeclarationGraph,
    id: ComponentId,
    declared: &HashMap<GroupId, Vec<(String, Option<u32>)>>,
) {
    let component = graph.component(id);
    let mut slots = Vec::new();
    let mut explicit = Vec::new();
    for &gid in &component.groups {
        match declared.get(&gid) {
            Some(parameters) => {
                for (name, order) in parameters {
                    slots.push(Slot::Parameter(gid, name.as_str()));
                    explicit.push(*order);
                }
            }
            None => {
                slots.push(Slot::Group(gid));
                explicit.push(graph.group(gid).layout.order);
            }
        }
    }

    let mut layout = ResolvedLayout::default();
    let mut ordered: Vec<GroupId> = Vec::with_capacity(component.groups.len());
    for (index, order) in sorted_indices(&explicit) {
        match slots[index] {
            Slot::Parameter(gid, name) => {
                if !ordered.contains(&gid) {
                    ordered.push(gid);
                }
                append(&mut layout, &graph.group(gid).name, name);
            }
            Slot::Group(gid) => {
                ordered.push(gid);
                let group = graph.group(gid);
                layout.groups.push((group.name.clone(), order));
                for parameter in &group.parameters {
                    append(&mut layout, &group.name, &parameter.name);
                }
            }
        }
    }
    // Default groups without parameters keep their place up front.
    for &gid in component.groups.iter().rev() {
        if !ordered.contains(&gid) {
            ordered.insert(0, gid);
        }
    }
    trace!(
        component = %component.name,
        groups = layout.groups.len(),
        parameters = layout.parameters.len(),
        "resolved layout"
    );

    let component = graph.component_mut(id);
    component.groups = ordered;
    component
        .properties
        .insert(ModelProperty::ResolvedLayout(layout));
}

fn append(layout: &mut ResolvedLayout, group: &str, parameter: &str) {
    let position = u32::try_from(layout.parameters.len() + 1).unwrap_or(u32::MAX);
    layout.parameters.push(LayoutSlot {
        group: group.to_string(),
        parameter: parameter.to_string(),
        position,
    });
}
