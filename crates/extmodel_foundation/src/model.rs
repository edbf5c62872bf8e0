//! Namespaced error types and stereotypes.
//!
//! Both form parent chains: an [`ErrorModel`] chain always ends at the
//! platform `ANY` error, and a [`StereotypeModel`] chain ends at a platform
//! base stereotype (or has no parent at all). Parents are owned copies so a
//! model can be handed around without the graph it was resolved from.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Namespace of every error and stereotype the platform itself defines.
pub const PLATFORM_NAMESPACE: &str = "CORE";

/// Namespace of the object store stereotypes.
pub const OBJECT_STORE_NAMESPACE: &str = "OS";

// =============================================================================
// ErrorModel
// =============================================================================

/// A namespaced error type with an optional parent.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorModel {
    /// Namespace, e.g. `HEISENBERG` or `CORE`.
    pub namespace: String,
    /// Identifier within the namespace, e.g. `CONNECTIVITY`.
    pub identifier: String,
    /// Parent error, `None` only for a namespace root.
    pub parent: Option<Box<ErrorModel>>,
}

impl ErrorModel {
    /// Creates a root error with no parent.
    #[must_use]
    pub fn root(namespace: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
            parent: None,
        }
    }

    /// Creates an error with the given parent.
    #[must_use]
    pub fn child(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
        parent: ErrorModel,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Returns the parent error, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&ErrorModel> {
        self.parent.as_deref()
    }

    /// Returns true if namespace and identifier match, ignoring parents.
    #[must_use]
    pub fn is(&self, namespace: &str, identifier: &str) -> bool {
        self.namespace == namespace && self.identifier == identifier
    }

    /// Iterates the chain from this error up to its root, inclusive.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorModel> {
        std::iter::successors(Some(self), |e| e.parent())
    }

    /// Returns the root at the end of the parent chain.
    #[must_use]
    pub fn root_of_chain(&self) -> &ErrorModel {
        self.chain().last().unwrap_or(self)
    }

    /// Returns true if this error is `other` or one of its descendants.
    #[must_use]
    pub fn is_a(&self, other: &ErrorModel) -> bool {
        self.chain()
            .any(|e| e.is(&other.namespace, &other.identifier))
    }
}

impl fmt::Debug for ErrorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        if let Some(parent) = self.parent() {
            write!(f, " < {parent:?}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.identifier)
    }
}

// =============================================================================
// Platform errors
// =============================================================================

/// The errors defined by the platform namespace.
pub mod platform_errors {
    use super::{ErrorModel, PLATFORM_NAMESPACE};

    /// Universal root error.
    pub const ANY: &str = "ANY";
    /// Connection could not be established or was lost.
    pub const CONNECTIVITY: &str = "CONNECTIVITY";
    /// A reconnection strategy gave up.
    pub const RETRY_EXHAUSTED: &str = "RETRY_EXHAUSTED";
    /// Security related failures.
    pub const SECURITY: &str = "SECURITY";
    /// Client side security failure.
    pub const CLIENT_SECURITY: &str = "CLIENT_SECURITY";
    /// Server side security failure.
    pub const SERVER_SECURITY: &str = "SERVER_SECURITY";
    /// Data transformation failure.
    pub const TRANSFORMATION: &str = "TRANSFORMATION";
    /// Expression evaluation failure.
    pub const EXPRESSION: &str = "EXPRESSION";
    /// Validation failure.
    pub const VALIDATION: &str = "VALIDATION";
    /// Timeout.
    pub const TIMEOUT: &str = "TIMEOUT";

    /// `(identifier, parent)` pairs, parents listed before children.
    const HIERARCHY: &[(&str, Option<&str>)] = &[
        (ANY, None),
        (CONNECTIVITY, Some(ANY)),
        (RETRY_EXHAUSTED, Some(ANY)),
        (SECURITY, Some(ANY)),
        (CLIENT_SECURITY, Some(SECURITY)),
        (SERVER_SECURITY, Some(SECURITY)),
        (TRANSFORMATION, Some(ANY)),
        (EXPRESSION, Some(ANY)),
        (VALIDATION, Some(ANY)),
        (TIMEOUT, Some(ANY)),
    ];

    /// Returns the platform `ANY` root.
    #[must_use]
    pub fn any() -> ErrorModel {
        ErrorModel::root(PLATFORM_NAMESPACE, ANY)
    }

    /// Looks up a platform error with its full parent chain.
    #[must_use]
    pub fn get(identifier: &str) -> Option<ErrorModel> {
        let (name, parent) = HIERARCHY.iter().find(|(name, _)| *name == identifier)?;
        match parent {
            None => Some(ErrorModel::root(PLATFORM_NAMESPACE, *name)),
            Some(parent) => Some(ErrorModel::child(PLATFORM_NAMESPACE, *name, get(parent)?)),
        }
    }

    /// Returns true if the platform defines the identifier.
    #[must_use]
    pub fn is_defined(identifier: &str) -> bool {
        HIERARCHY.iter().any(|(name, _)| *name == identifier)
    }
}

// =============================================================================
// StereotypeModel
// =============================================================================

/// A namespaced classification tag with an optional parent.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StereotypeModel {
    /// Namespace, e.g. `HEISENBERG` or `CORE`.
    pub namespace: String,
    /// Identifier within the namespace.
    pub identifier: String,
    /// Parent stereotype.
    pub parent: Option<Box<StereotypeModel>>,
}

impl StereotypeModel {
    /// Creates a stereotype with no parent.
    #[must_use]
    pub fn new(namespace: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
            parent: None,
        }
    }

    /// Sets the parent stereotype.
    #[must_use]
    pub fn with_parent(mut self, parent: StereotypeModel) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the parent stereotype, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&StereotypeModel> {
        self.parent.as_deref()
    }

    /// Returns true if namespace and identifier match, ignoring parents.
    #[must_use]
    pub fn is(&self, namespace: &str, identifier: &str) -> bool {
        self.namespace == namespace && self.identifier == identifier
    }

    /// Returns true if this stereotype is `other` or transitively inherits it.
    #[must_use]
    pub fn is_assignable_to(&self, other: &StereotypeModel) -> bool {
        std::iter::successors(Some(self), |s| s.parent())
            .any(|s| s.is(&other.namespace, &other.identifier))
    }
}

impl fmt::Debug for StereotypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        if let Some(parent) = self.parent() {
            write!(f, " < {parent:?}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StereotypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.identifier)
    }
}

/// The stereotypes defined by the platform.
pub mod platform_stereotypes {
    use super::{OBJECT_STORE_NAMESPACE, PLATFORM_NAMESPACE, StereotypeModel};

    /// Base of every configuration.
    #[must_use]
    pub fn config() -> StereotypeModel {
        StereotypeModel::new(PLATFORM_NAMESPACE, "CONFIG")
    }

    /// Base of every connection provider.
    #[must_use]
    pub fn connection() -> StereotypeModel {
        StereotypeModel::new(PLATFORM_NAMESPACE, "CONNECTION")
    }

    /// Default stereotype of operations and constructs.
    #[must_use]
    pub fn processor() -> StereotypeModel {
        StereotypeModel::new(PLATFORM_NAMESPACE, "PROCESSOR")
    }

    /// Default stereotype of message sources.
    #[must_use]
    pub fn source() -> StereotypeModel {
        StereotypeModel::new(PLATFORM_NAMESPACE, "SOURCE")
    }

    /// Stereotype of flows.
    #[must_use]
    pub fn flow() -> StereotypeModel {
        StereotypeModel::new(PLATFORM_NAMESPACE, "FLOW")
    }

    /// Stereotype of object stores.
    #[must_use]
    pub fn object_store() -> StereotypeModel {
        StereotypeModel::new(OBJECT_STORE_NAMESPACE, "OBJECT_STORE")
    }
}
