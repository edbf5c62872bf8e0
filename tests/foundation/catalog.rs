//! Integration tests for the TypeCatalog
//!
//! Tests type resolution, exporters and resources.

use extmodel_foundation::{
    ExtensionSummary, ModuleOrigin, StereotypeModel, TypeCatalog, TypeDescriptor, TypeId,
    platform_stereotypes,
};

fn catalog() -> TypeCatalog {
    TypeCatalog::builder()
        .with_extension(
            ExtensionSummary::new("vehicles", "vehicles", ModuleOrigin::module("org.acme:vehicles"))
                .with_exported_type(TypeId::new("org.acme.vehicles", "Car"))
                .with_config(
                    "garage",
                    StereotypeModel::new("VEHICLES", "GARAGE")
                        .with_parent(platform_stereotypes::config()),
                ),
        )
        .with_type(TypeDescriptor::new(
            TypeId::new("org.acme.util", "Money"),
            ModuleOrigin::SharedLibrary("util".into()),
        ))
        .with_resource("schemas/car.json")
        .build()
}

#[test]
fn exported_types_resolve_with_their_exporter() {
    let catalog = catalog();
    let car = TypeId::new("org.acme.vehicles", "Car");
    let descriptor = catalog.resolve(&car).unwrap();
    assert_eq!(descriptor.origin, ModuleOrigin::module("org.acme:vehicles"));
    assert_eq!(catalog.exporter_of(&car).unwrap().name, "vehicles");
    assert_eq!(catalog.type_count(), 2);
}

#[test]
fn plain_types_have_no_exporter() {
    let catalog = catalog();
    let money = TypeId::new("org.acme.util", "Money");
    assert!(catalog.resolve(&money).unwrap().origin.is_shared());
    assert!(catalog.exporter_of(&money).is_none());
    assert!(catalog.resolve(&TypeId::new("org.acme", "Ghost")).is_none());
}

#[test]
fn extension_summaries_expose_configs() {
    let catalog = catalog();
    let vehicles = catalog.extension("vehicles").unwrap();
    assert_eq!(vehicles.config("garage").unwrap().to_string(), "VEHICLES:GARAGE");
    assert!(vehicles.config("missing").is_none());
    assert!(catalog.extension("missing").is_none());
}

#[test]
fn resources() {
    let catalog = catalog();
    assert!(catalog.has_resource("schemas/car.json"));
    assert!(!catalog.has_resource("schemas/boat.json"));
}
