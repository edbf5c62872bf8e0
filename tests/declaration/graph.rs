//! Integration tests for the DeclarationGraph
//!
//! Tests attachment rules, flyweight traversal and default groups.

use extmodel_declaration::{
    ComponentDeclaration, ComponentKind, DeclarationGraph, ExtensionDeclaration,
    ParameterDeclaration, ParameterGroupDeclaration, Parent,
};
use extmodel_foundation::{DataType, ErrorKind, ModuleOrigin};

fn graph() -> DeclarationGraph {
    DeclarationGraph::new(ExtensionDeclaration::new(
        "heisenberg",
        "heisenberg",
        ModuleOrigin::module("org.acme:heisenberg"),
    ))
}

// =============================================================================
// Attachment
// =============================================================================

#[test]
fn duplicate_sibling_names_are_rejected() {
    let mut graph = graph();
    let first = graph.declare(ComponentDeclaration::operation("cook"));
    let second = graph.declare(ComponentDeclaration::operation("cook"));
    graph.attach(Parent::Extension, first).unwrap();

    let err = graph.attach(Parent::Extension, second).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateDeclaration { .. }));
}

#[test]
fn same_name_different_kind_is_allowed() {
    let mut graph = graph();
    let op = graph.declare(ComponentDeclaration::operation("cook"));
    let src = graph.declare(ComponentDeclaration::source("cook"));
    graph.attach(Parent::Extension, op).unwrap();
    graph.attach(Parent::Extension, src).unwrap();
    assert_eq!(graph.components().len(), 2);
}

#[test]
fn operations_cannot_own_configurations() {
    let mut graph = graph();
    let op = graph.declare(ComponentDeclaration::operation("cook"));
    let config = graph.declare(ComponentDeclaration::configuration("config"));
    graph.attach(Parent::Extension, op).unwrap();

    let err = graph.attach(Parent::Component(op), config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPlacement { .. }));
}

#[test]
fn reattaching_to_the_same_parent_is_a_no_op() {
    let mut graph = graph();
    let op = graph.declare(ComponentDeclaration::operation("cook"));
    graph.attach(Parent::Extension, op).unwrap();
    graph.attach(Parent::Extension, op).unwrap();
    assert_eq!(graph.children(Parent::Extension), &[op]);
}

#[test]
fn repeated_parameter_names_are_rejected_on_attach() {
    let mut graph = graph();
    let group = graph.declare_group(
        ParameterGroupDeclaration::default_group()
            .with_parameter(ParameterDeclaration::new("victim", DataType::String))
            .with_parameter(ParameterDeclaration::new("victim", DataType::String)),
    );
    let op = graph.declare(ComponentDeclaration::operation("kill").with_group(group));

    let err = graph.attach(Parent::Extension, op).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateParameter { .. }));
    assert_eq!(
        err.to_string(),
        graph.check_parameter_names(op).unwrap_err().to_string()
    );
}

// =============================================================================
// Flyweights
// =============================================================================

#[test]
fn shared_operation_is_one_instance() {
    let mut graph = graph();
    let op = graph.declare(ComponentDeclaration::operation("kill"));
    let config = graph.declare(ComponentDeclaration::configuration("config"));
    graph.attach(Parent::Extension, config).unwrap();
    graph.attach(Parent::Extension, op).unwrap();
    graph.attach(Parent::Component(config), op).unwrap();

    assert_eq!(graph.references().len(), 3);
    assert_eq!(graph.components_of_kind(ComponentKind::Operation), vec![op]);
    assert_eq!(graph.find(ComponentKind::Operation, "kill"), Some(op));

    graph.component_mut(op).description = "poison".into();
    for reference in graph.references() {
        if reference.id == op {
            assert_eq!(graph.component(reference.id).description, "poison");
        }
    }
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn owned_default_group_unshares() {
    let mut graph = graph();
    let shared = graph.declare_group(
        ParameterGroupDeclaration::default_group()
            .with_parameter(ParameterDeclaration::new("victim", DataType::String)),
    );
    let kill = graph.declare(ComponentDeclaration::operation("kill").with_group(shared));
    let hide = graph.declare(ComponentDeclaration::operation("hide").with_group(shared));
    graph.attach(Parent::Extension, kill).unwrap();
    graph.attach(Parent::Extension, hide).unwrap();

    let owned = graph.owned_default_group(kill);
    assert_ne!(owned, shared);
    graph
        .group_mut(owned)
        .parameters
        .push(ParameterDeclaration::new("weapon", DataType::String));

    assert!(graph.has_parameter(kill, "weapon"));
    assert!(graph.has_parameter(kill, "victim"));
    assert!(!graph.has_parameter(hide, "weapon"));

    // Already owned now, so asking again returns the same group.
    assert_eq!(graph.owned_default_group(kill), owned);
}

#[test]
fn owned_default_group_is_created_when_missing() {
    let mut graph = graph();
    let op = graph.declare(ComponentDeclaration::operation("cook"));
    graph.attach(Parent::Extension, op).unwrap();

    let gid = graph.owned_default_group(op);
    assert!(graph.group(gid).is_default());
    assert_eq!(graph.component(op).groups, vec![gid]);
}
