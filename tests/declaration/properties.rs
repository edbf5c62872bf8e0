//! Integration tests for model properties and the frozen model

use std::sync::Arc;

use extmodel_declaration::{
    ComponentDeclaration, DeclarationGraph, ExtensionDeclaration, ExtensionModel,
    ImplementingSource, LoadingContext, ModelProperties, ModelProperty, Parent, PropertyKind,
    SyntheticKind,
};
use extmodel_foundation::{ModuleOrigin, TypeCatalog};

#[test]
fn one_property_per_kind() {
    let mut bag = ModelProperties::new();
    bag.insert(ModelProperty::StaticSchema("a.json".into()));
    bag.insert(ModelProperty::StaticSchema("b.json".into()));
    bag.insert(ModelProperty::Synthetic(SyntheticKind::Target));

    assert_eq!(bag.len(), 2);
    assert_eq!(bag.static_schema(), Some("b.json"));
    assert_eq!(bag.synthetic(), Some(SyntheticKind::Target));
    assert!(bag.remove(PropertyKind::StaticSchema).is_some());
    assert!(!bag.contains(PropertyKind::StaticSchema));
}

#[test]
fn typed_accessors_ignore_other_kinds() {
    let bag = ModelProperties::new();
    assert!(bag.implementing_source().is_none());
    assert!(bag.ref_name().is_none());
    assert!(bag.resolved_layout().is_none());
    assert!(bag.is_empty());
}

#[test]
fn frozen_model_lookups() {
    let mut graph = DeclarationGraph::new(ExtensionDeclaration::new(
        "heisenberg",
        "heisenberg",
        ModuleOrigin::module("m"),
    ));
    let config = graph.declare(
        ComponentDeclaration::configuration("config").with_property(
            ModelProperty::ImplementingSource(ImplementingSource::new("HeisenbergConfig")),
        ),
    );
    let op = graph.declare(ComponentDeclaration::operation("cook"));
    graph.attach(Parent::Extension, config).unwrap();
    graph.attach(Parent::Component(config), op).unwrap();

    let ctx = LoadingContext::new(graph, Arc::new(TypeCatalog::new()));
    let model: ExtensionModel = ctx.into_model();
    let shared = model.clone();

    assert_eq!(shared.name(), "heisenberg");
    assert!(shared.operation("cook").is_some());
    assert_eq!(
        shared
            .configuration("config")
            .and_then(|c| c.properties.implementing_source())
            .map(|s| s.type_name.as_str()),
        Some("HeisenbergConfig")
    );
    assert!(model.operation("missing").is_none());
}
