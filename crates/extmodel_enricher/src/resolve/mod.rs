//! Resolution engines consulted by the enrichers.
//!
//! - [`errors`] - Error type hierarchies
//! - [`stereotype`] - Component stereotypes and parameter element references
//! - [`imports`] - Local/imported/private decisions for cross-module types
//! - [`layout`] - Gap-filling order assignment

pub mod errors;
pub mod imports;
pub mod layout;
pub mod stereotype;

pub use errors::ErrorTypeResolver;
pub use imports::{ImportDecision, ImportResolver};
pub use layout::assign_orders;
pub use stereotype::{ReferenceResolver, ResolvedTarget, StereotypeResolver};
