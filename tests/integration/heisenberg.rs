//! End-to-end load of a realistic extension
//!
//! One configuration with a connection provider, a shared operation, a
//! source, a construct and reference parameters.

use std::collections::HashMap;
use std::sync::Arc;

use extmodel_declaration::{
    ComponentDeclaration, ComponentKind, DeclarationGraph, DeclaringMember, Deprecation,
    ElementKind, ErrorTypeDefinition, ExecutionType, ExtensionDeclaration, ExtensionModel,
    FieldInfo, ImplementingSource, ModelProperty, OutputDeclaration, ParameterDeclaration,
    ParameterGroupDeclaration, Parent, PropertyKind, ReferenceTarget, SyntheticKind,
};
use extmodel_enricher::{ExtensionLoader, PipelineConfig};
use extmodel_foundation::{
    DataType, ErrorKind, ExtensionSummary, ModuleOrigin, StereotypeModel, TypeCatalog, TypeId,
    platform_stereotypes,
};

// =============================================================================
// Fixture
// =============================================================================

fn catalog() -> Arc<TypeCatalog> {
    Arc::new(
        TypeCatalog::builder()
            .with_extension(
                ExtensionSummary::new(
                    "vehicles",
                    "vehicles",
                    ModuleOrigin::module("org.acme:vehicles"),
                )
                .with_exported_type(TypeId::new("org.acme.vehicles", "Car"))
                .with_config(
                    "garage",
                    StereotypeModel::new("VEHICLES", "GARAGE")
                        .with_parent(platform_stereotypes::config()),
                ),
            )
            .with_resource("schemas/recipe.json")
            .build(),
    )
}

fn heisenberg() -> DeclarationGraph {
    let extension = ExtensionDeclaration::new(
        "heisenberg",
        "heisenberg",
        ModuleOrigin::module("org.acme:heisenberg"),
    )
    .with_error(ErrorTypeDefinition::new("HEALTH").child_of("CONNECTIVITY"))
    .with_error(ErrorTypeDefinition::new("CONNECTIVITY").child_of_platform("ANY"))
    .with_error(ErrorTypeDefinition::new("OVERDOSE"))
    .with_throws(["OVERDOSE"]);
    let mut graph = DeclarationGraph::new(extension);

    let config_group = graph.declare_group(
        ParameterGroupDeclaration::default_group()
            .with_parameter(ParameterDeclaration::new("purity", DataType::Number).for_metadata()),
    );
    let config = graph.declare(
        ComponentDeclaration::configuration("lab")
            .with_group(config_group)
            .with_property(ModelProperty::ImplementingSource(
                ImplementingSource::new("LabConfig")
                    .with_field(FieldInfo::ref_name("configName", DataType::String)),
            )),
    );
    let van = graph.declare(ComponentDeclaration::connection_provider("van"));

    let shared = graph.declare_group(
        ParameterGroupDeclaration::default_group()
            .with_parameter(ParameterDeclaration::new("victim", DataType::String).with_order(2))
            .with_parameter(
                ParameterDeclaration::new("weapon", DataType::String).with_property(
                    ModelProperty::DeclaringMember(
                        DeclaringMember::new("weapon")
                            .deprecated(Deprecation::new("use poison", "1.1.0")),
                    ),
                ),
            )
            .with_parameter(ParameterDeclaration::new(
                "car",
                DataType::Object(TypeId::new("org.acme.vehicles", "Car")),
            )),
    );
    let kill = graph.declare(
        ComponentDeclaration::operation("kill")
            .with_group(shared)
            .with_output(OutputDeclaration::new(DataType::String))
            .with_throws(["HEALTH"])
            .with_connection(),
    );
    let cook = graph.declare(
        ComponentDeclaration::operation("cook")
            .with_output(
                OutputDeclaration::new(DataType::Number).with_schema("schemas/recipe.json"),
            ),
    );

    let listen_group = graph.declare_group(
        ParameterGroupDeclaration::named("Routing")
            .with_parameter(
                ParameterDeclaration::new("flowRef", DataType::String)
                    .with_reference(ReferenceTarget::Flow),
            )
            .with_parameter(
                ParameterDeclaration::new("garage", DataType::String).with_reference(
                    ReferenceTarget::Config {
                        extension: Some("vehicles".into()),
                        name: None,
                    },
                ),
            )
            .with_parameter(
                ParameterDeclaration::new("dealer", DataType::String).with_reference(
                    ReferenceTarget::Construct {
                        extension: None,
                        name: "dealer".into(),
                    },
                ),
            ),
    );
    let listen = graph.declare(
        ComponentDeclaration::source("listen")
            .with_group(listen_group)
            .transactional(),
    );
    let dealer = graph.declare(ComponentDeclaration::construct("dealer"));

    graph.attach(Parent::Extension, config).unwrap();
    graph.attach(Parent::Component(config), van).unwrap();
    graph.attach(Parent::Component(config), kill).unwrap();
    graph.attach(Parent::Component(config), cook).unwrap();
    graph.attach(Parent::Component(config), listen).unwrap();
    graph.attach(Parent::Extension, cook).unwrap();
    graph.attach(Parent::Extension, dealer).unwrap();
    graph
}

fn load() -> ExtensionModel {
    ExtensionLoader::new(&PipelineConfig::default())
        .load(heisenberg(), catalog())
        .unwrap()
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn health_chains_through_own_and_platform_connectivity() {
    let model = load();
    let kill = model.operation("kill").unwrap().executable().unwrap();
    let health = kill.errors.iter().find(|e| e.identifier == "HEALTH").unwrap();
    let chain: Vec<String> = health.chain().map(ToString::to_string).collect();
    assert_eq!(
        chain,
        vec![
            "HEISENBERG:HEALTH",
            "HEISENBERG:CONNECTIVITY",
            "CORE:CONNECTIVITY",
            "CORE:ANY"
        ]
    );

    // kill needs a connection, so it also raises connectivity errors.
    let names: Vec<String> = kill.errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        vec![
            "HEISENBERG:CONNECTIVITY",
            "HEISENBERG:HEALTH",
            "HEISENBERG:RETRY_EXHAUSTED"
        ]
    );
}

#[test]
fn extension_throws_are_inherited() {
    let model = load();
    let cook = model.operation("cook").unwrap().executable().unwrap();
    let names: Vec<String> = cook.errors.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["HEISENBERG:OVERDOSE"]);
    assert!(model.errors().iter().any(|e| e.identifier == "RETRY_EXHAUSTED"));
}

// =============================================================================
// Flyweights
// =============================================================================

#[test]
fn shared_operation_is_enriched_once() {
    let model = load();
    let cooks = model.components_of_kind(ComponentKind::Operation);
    assert_eq!(cooks.iter().filter(|c| c.name == "cook").count(), 1);

    let cook = model.operation("cook").unwrap();
    let id = model.find_id(ComponentKind::Operation, "cook").unwrap();
    assert_eq!(cook.properties.static_schema(), Some("schemas/recipe.json"));

    let mut kinds: HashMap<PropertyKind, usize> = HashMap::new();
    for property in cook.properties.iter() {
        *kinds.entry(property.kind()).or_default() += 1;
    }
    assert_eq!(
        kinds,
        HashMap::from([(PropertyKind::StaticSchema, 1), (PropertyKind::ResolvedLayout, 1)])
    );

    // One target pair even though cook is reachable along two paths.
    let mut synthetic: HashMap<SyntheticKind, usize> = HashMap::new();
    for parameter in model.graph().parameters_of(id) {
        if let Some(kind) = parameter.properties.synthetic() {
            *synthetic.entry(kind).or_default() += 1;
        }
    }
    assert_eq!(
        synthetic,
        HashMap::from([(SyntheticKind::Target, 1), (SyntheticKind::TargetValue, 1)])
    );

    let layout = cook.properties.resolved_layout().unwrap();
    assert_eq!(layout.parameter_names(), vec!["target", "targetValue"]);
    assert_eq!(cook.executable().unwrap().errors.len(), 1);
    assert_eq!(cook.groups.len(), 1);
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn kill_parameters_are_ordered_and_deprecated() {
    let model = load();
    let kill = model.operation("kill").unwrap();
    let layout = kill.properties.resolved_layout().unwrap();
    assert_eq!(
        layout.parameter_names(),
        vec![
            "weapon",
            "victim",
            "car",
            "mimeType",
            "encoding",
            "target",
            "targetValue"
        ]
    );

    let weapon = model
        .parameter(ComponentKind::Operation, "kill", "weapon")
        .unwrap();
    assert_eq!(
        weapon.deprecation.as_ref().map(|d| d.message.as_str()),
        Some("use poison")
    );
    assert!(kill.deprecation.is_none());
}

#[test]
fn reference_parameters_resolve() {
    let model = load();
    let flow = model
        .parameter(ComponentKind::Source, "listen", "flowRef")
        .unwrap();
    assert_eq!(flow.allowed_stereotypes, vec![platform_stereotypes::flow()]);
    assert_eq!(flow.element_references[0].kind, ElementKind::Flow);

    let garage = model
        .parameter(ComponentKind::Source, "listen", "garage")
        .unwrap();
    assert_eq!(garage.allowed_stereotypes[0].to_string(), "VEHICLES:GARAGE");
    assert_eq!(garage.element_references[0].element, "garage");

    let dealer = model
        .parameter(ComponentKind::Source, "listen", "dealer")
        .unwrap();
    assert_eq!(dealer.allowed_stereotypes, vec![platform_stereotypes::processor()]);
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn configuration_facts() {
    let model = load();
    let lab = model.configuration("lab").unwrap();
    assert_eq!(lab.properties.ref_name(), Some("configName"));
    assert_eq!(
        lab.properties.required_for_metadata(),
        Some(&["purity".to_string()][..])
    );
    let stereotype = lab.stereotype.as_ref().unwrap();
    assert_eq!(stereotype.to_string(), "HEISENBERG:LAB");
    assert!(stereotype.is_assignable_to(&platform_stereotypes::config()));
}

#[test]
fn execution_types_and_connectivity() {
    let model = load();
    let kill = model.operation("kill").unwrap().executable().unwrap();
    assert!(kill.requires_connection);
    assert_eq!(kill.execution_type, Some(ExecutionType::Blocking));

    let cook = model.operation("cook").unwrap().executable().unwrap();
    assert!(!cook.requires_connection);
    assert_eq!(cook.execution_type, Some(ExecutionType::CpuLite));

    let listen = model.find(ComponentKind::Source, "listen").unwrap();
    assert!(listen.requires_connection());
}

#[test]
fn imported_types_are_recorded() {
    let model = load();
    let car = TypeId::new("org.acme.vehicles", "Car");
    assert!(model.declaration().imports(&car));
    assert_eq!(model.imported_types().len(), 1);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_schema_stops_loading() {
    let err = ExtensionLoader::new(&PipelineConfig::default())
        .load(heisenberg(), Arc::new(TypeCatalog::new()))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingResource { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.extension.as_deref(), Some("heisenberg"));
    assert_eq!(context.enricher.as_deref(), Some("static-schema"));
    assert_eq!(context.component.as_deref(), Some("cook"));
}

#[test]
fn strict_policy_rejects_unknown_types() {
    let catalog = Arc::new(TypeCatalog::builder().with_resource("schemas/recipe.json").build());
    let err = ExtensionLoader::new(&PipelineConfig::strict())
        .load(heisenberg(), catalog)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnresolvedType(_)));
    assert_eq!(
        err.context.and_then(|c| c.enricher).as_deref(),
        Some("imported-types")
    );
}
