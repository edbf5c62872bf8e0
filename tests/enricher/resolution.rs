//! Integration tests for the resolution engines
//!
//! Tests error hierarchies, gap-filling orders and import decisions.

use extmodel_declaration::{ErrorTypeDefinition, ExtensionDeclaration};
use extmodel_enricher::UnresolvedTypePolicy;
use extmodel_enricher::resolve::{
    ErrorTypeResolver, ImportDecision, ImportResolver, assign_orders,
};
use extmodel_foundation::{
    ErrorKind, ExtensionSummary, ModuleOrigin, TypeCatalog, TypeDescriptor, TypeId,
};

// =============================================================================
// Error Types
// =============================================================================

#[test]
fn cycle_is_reported_with_its_members() {
    let definitions = vec![
        ErrorTypeDefinition::new("A").child_of("B"),
        ErrorTypeDefinition::new("B").child_of("C"),
        ErrorTypeDefinition::new("C").child_of("A"),
    ];
    let err = ErrorTypeResolver::resolve_all("HEISENBERG", &definitions).unwrap_err();
    assert!(err.is_cycle());
    match err.kind {
        ErrorKind::CyclicErrorType { cycle } => {
            assert_eq!(cycle.len(), 3);
            for member in ["A", "B", "C"] {
                assert!(cycle.iter().any(|c| c == member));
            }
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn definitions_chain_to_platform_root() {
    let definitions = vec![
        ErrorTypeDefinition::new("HEALTH").child_of("CONNECTIVITY"),
        ErrorTypeDefinition::new("CONNECTIVITY").child_of_platform("ANY"),
        ErrorTypeDefinition::new("OVERDOSE"),
        ErrorTypeDefinition::new("TIMEOUT"),
    ];
    let resolved = ErrorTypeResolver::resolve_all("HEISENBERG", &definitions).unwrap();
    assert_eq!(resolved.len(), 4);
    for model in &resolved {
        assert!(model.root_of_chain().is("CORE", "ANY"));
    }

    let timeout = resolved.iter().find(|m| m.identifier == "TIMEOUT").unwrap();
    assert_eq!(timeout.parent().unwrap().to_string(), "CORE:TIMEOUT");
    let overdose = resolved.iter().find(|m| m.identifier == "OVERDOSE").unwrap();
    assert_eq!(overdose.parent().unwrap().to_string(), "CORE:ANY");
}

#[test]
fn unknown_parents_are_rejected() {
    let own = vec![ErrorTypeDefinition::new("HEALTH").child_of("MISSING")];
    let err = ErrorTypeResolver::resolve_all("HEISENBERG", &own).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownErrorParent { .. }));

    let platform = vec![ErrorTypeDefinition::new("HEALTH").child_of_platform("MISSING")];
    let err = ErrorTypeResolver::resolve_all("HEISENBERG", &platform).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownPlatformError(_)));
}

// =============================================================================
// Layout Orders
// =============================================================================

#[test]
fn explicit_order_two_with_two_implicit() {
    // P2 is declared with order 2, P1 and P3 without.
    let orders = assign_orders(&[Some(2), None, None]);
    assert_eq!(orders, vec![2, 1, 3]);
}

// =============================================================================
// Imports
// =============================================================================

fn catalog() -> TypeCatalog {
    TypeCatalog::builder()
        .with_extension(
            ExtensionSummary::new("vehicles", "vehicles", ModuleOrigin::module("org.acme:vehicles"))
                .with_exported_type(TypeId::new("org.acme.vehicles", "Car")),
        )
        .with_type(TypeDescriptor::new(
            TypeId::new("org.acme.util", "Money"),
            ModuleOrigin::SharedLibrary("util".into()),
        ))
        .with_type(TypeDescriptor::new(
            TypeId::new("org.acme.secret", "Formula"),
            ModuleOrigin::module("org.acme:secret"),
        ))
        .build()
}

#[test]
fn import_decisions() {
    let catalog = catalog();
    let extension = ExtensionDeclaration::new(
        "heisenberg",
        "heisenberg",
        ModuleOrigin::module("org.acme:heisenberg"),
    );
    let resolver = ImportResolver::new(&extension, &catalog, UnresolvedTypePolicy::Skip);

    let car = TypeId::new("org.acme.vehicles", "Car");
    match resolver.decide(&car).unwrap() {
        Some(ImportDecision::Import(imported)) => {
            assert_eq!(imported.id, car);
            assert_eq!(imported.exporter, "vehicles");
            assert_eq!(imported.origin.as_str(), "org.acme:vehicles");
        }
        other => panic!("expected an import, got {other:?}"),
    }

    let money = TypeId::new("org.acme.util", "Money");
    assert_eq!(resolver.decide(&money).unwrap(), Some(ImportDecision::Local));

    let formula = TypeId::new("org.acme.secret", "Formula");
    assert_eq!(resolver.decide(&formula).unwrap(), Some(ImportDecision::Private));

    let ghost = TypeId::new("org.acme", "Ghost");
    assert_eq!(resolver.decide(&ghost).unwrap(), None);
}

#[test]
fn strict_policy_fails_on_unknown_types() {
    let catalog = catalog();
    let extension = ExtensionDeclaration::new(
        "heisenberg",
        "heisenberg",
        ModuleOrigin::module("org.acme:heisenberg"),
    );
    let resolver = ImportResolver::new(&extension, &catalog, UnresolvedTypePolicy::Fail);
    let err = resolver.decide(&TypeId::new("org.acme", "Ghost")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnresolvedType(_)));
}
