//! Integration tests for error and stereotype models
//!
//! Tests parent chains, subtype checks and the platform namespaces.

use extmodel_foundation::{
    ErrorModel, PLATFORM_NAMESPACE, StereotypeModel, platform_errors, platform_stereotypes,
};

// =============================================================================
// Error Models
// =============================================================================

#[test]
fn platform_errors_chain_to_any() {
    let connectivity = platform_errors::get(platform_errors::CONNECTIVITY).unwrap();
    assert_eq!(connectivity.to_string(), "CORE:CONNECTIVITY");
    assert_eq!(connectivity.root_of_chain(), &platform_errors::any());
    assert!(platform_errors::is_defined("RETRY_EXHAUSTED"));
    assert!(!platform_errors::is_defined("HEALTH"));
    assert!(platform_errors::get("HEALTH").is_none());
}

#[test]
fn extension_error_is_a_platform_error() {
    let connectivity = platform_errors::get(platform_errors::CONNECTIVITY).unwrap();
    let own = ErrorModel::child("HEISENBERG", "CONNECTIVITY", connectivity.clone());
    let health = ErrorModel::child("HEISENBERG", "HEALTH", own.clone());

    assert!(health.is_a(&own));
    assert!(health.is_a(&connectivity));
    assert!(health.is_a(&platform_errors::any()));
    assert!(!own.is_a(&health));

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
}

#[test]
fn root_has_no_parent() {
    let any = ErrorModel::root(PLATFORM_NAMESPACE, platform_errors::ANY);
    assert!(any.parent().is_none());
    assert!(any.is(PLATFORM_NAMESPACE, "ANY"));
}

// =============================================================================
// Stereotype Models
// =============================================================================

#[test]
fn stereotype_assignability_follows_parents() {
    let lab = StereotypeModel::new("HEISENBERG", "LAB").with_parent(platform_stereotypes::config());
    assert!(lab.is_assignable_to(&platform_stereotypes::config()));
    assert!(lab.is_assignable_to(&lab));
    assert!(!platform_stereotypes::config().is_assignable_to(&lab));
    assert!(!lab.is_assignable_to(&platform_stereotypes::processor()));
}

#[test]
fn well_known_stereotypes() {
    assert_eq!(platform_stereotypes::flow().to_string(), "CORE:FLOW");
    assert_eq!(platform_stereotypes::object_store().to_string(), "OS:OBJECT_STORE");
    assert_eq!(platform_stereotypes::source().to_string(), "CORE:SOURCE");
}
