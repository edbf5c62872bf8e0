//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use extmodel_foundation::{Error, ErrorContext, ErrorKind, TypeId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_cyclic_error_type() {
    let err = Error::cyclic_error_type(vec!["A".into(), "B".into(), "C".into()]);
    assert!(err.is_cycle());
    let msg = format!("{err}");
    assert!(msg.contains("A -> B -> C -> A"));
}

#[test]
fn error_unmapped_throws() {
    let err = Error::unmapped_throws("kill", "OVERDOSE");
    assert!(matches!(err.kind, ErrorKind::UnmappedThrows { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("kill"));
    assert!(msg.contains("OVERDOSE"));
}

#[test]
fn error_duplicate_parameter() {
    let err = Error::duplicate_parameter("cook", "target");
    assert!(matches!(err.kind, ErrorKind::DuplicateParameter { .. }));
    assert!(format!("{err}").contains("target"));
}

#[test]
fn error_missing_resource() {
    let err = Error::missing_resource("schemas/order.json", "placeOrder");
    assert!(matches!(err.kind, ErrorKind::MissingResource { .. }));
    assert!(format!("{err}").contains("schemas/order.json"));
}

#[test]
fn error_unresolved_type() {
    let err = Error::unresolved_type(TypeId::new("org.acme", "Ghost"));
    assert!(matches!(err.kind, ErrorKind::UnresolvedType(_)));
    assert!(format!("{err}").contains("Ghost"));
    assert!(!err.is_cycle());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_is_merged_not_replaced() {
    let err = Error::unmapped_throws("kill", "OVERDOSE")
        .with_context(ErrorContext::new().with_component("kill"))
        .with_context(
            ErrorContext::new()
                .with_extension("heisenberg")
                .with_enricher("errors")
                .with_component("ignored"),
        );
    let context = err.context.unwrap();
    assert_eq!(context.extension.as_deref(), Some("heisenberg"));
    assert_eq!(context.enricher.as_deref(), Some("errors"));
    assert_eq!(context.component.as_deref(), Some("kill"));
}

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_extension("heisenberg")
        .with_enricher("errors")
        .with_component("kill");
    assert_eq!(
        context.to_string(),
        "in extension heisenberg, during errors, at kill"
    );
    assert_eq!(ErrorContext::new().to_string(), "");
}
