//! Small value types hung off declarations: deprecation, layout, display,
//! providers, stereotype definitions and element references.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Deprecation
// =============================================================================

/// Marks a declaration as deprecated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deprecation {
    /// Why it is deprecated and what to use instead.
    pub message: String,
    /// Version that deprecated it.
    pub since: String,
    /// Version that will remove it, if known.
    pub to_remove_in: Option<String>,
}

impl Deprecation {
    /// Creates a deprecation marker.
    #[must_use]
    pub fn new(message: impl Into<String>, since: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            since: since.into(),
            to_remove_in: None,
        }
    }

    /// Sets the removal version.
    #[must_use]
    pub fn removed_in(mut self, version: impl Into<String>) -> Self {
        self.to_remove_in = Some(version.into());
        self
    }
}

// =============================================================================
// Layout and display
// =============================================================================

/// Placement hints for a parameter or a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutModel {
    /// Placement order; explicit before enrichment, always set after.
    pub order: Option<u32>,
    /// Tab the element is shown in.
    pub tab: Option<String>,
    /// Render as multi-line text.
    pub text: bool,
    /// Render masked.
    pub password: bool,
}

impl LayoutModel {
    /// Creates a layout with an explicit order.
    #[must_use]
    pub fn ordered(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    /// Creates a layout placed on a tab.
    #[must_use]
    pub fn on_tab(tab: impl Into<String>) -> Self {
        Self {
            tab: Some(tab.into()),
            ..Self::default()
        }
    }
}

/// Human-facing naming.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayModel {
    /// Display name.
    pub display_name: Option<String>,
    /// One-line summary.
    pub summary: Option<String>,
    /// Example value.
    pub example: Option<String>,
}

// =============================================================================
// Providers
// =============================================================================

/// A value provider or sample data provider attached to a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderModel {
    /// Provider identifier.
    pub provider_id: String,
    /// Parameters whose values the provider needs.
    pub acting_parameters: Vec<String>,
    /// Provider needs a connection.
    pub requires_connection: bool,
    /// Provider needs a configuration.
    pub requires_configuration: bool,
}

impl ProviderModel {
    /// Creates a provider model with no acting parameters.
    #[must_use]
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            acting_parameters: Vec::new(),
            requires_connection: false,
            requires_configuration: false,
        }
    }
}

// =============================================================================
// Stereotypes and references
// =============================================================================

/// A stereotype as declared by the front-end, before namespace resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StereotypeDefinition {
    /// Identifier, uppercased on resolution.
    pub name: String,
    /// Explicit namespace; defaults to the extension's.
    pub namespace: Option<String>,
    /// Explicit parent; defaults to the component kind's platform base.
    pub parent: Option<Box<StereotypeDefinition>>,
}

impl StereotypeDefinition {
    /// Creates a definition in the extension namespace with a default parent.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            parent: None,
        }
    }

    /// Sets an explicit namespace.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets an explicit parent.
    #[must_use]
    pub fn with_parent(mut self, parent: StereotypeDefinition) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

/// A candidate element a reference parameter may point at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferenceTarget {
    /// A configuration of this extension (`extension: None`) or of a named one.
    Config {
        /// Owning extension; `None` for the declaring extension.
        extension: Option<String>,
        /// Specific configuration; `None` for any.
        name: Option<String>,
    },
    /// A flow.
    Flow,
    /// An object store.
    ObjectStore,
    /// A referable construct of this or a named extension.
    Construct {
        /// Owning extension; `None` for the declaring extension.
        extension: Option<String>,
        /// Construct name.
        name: String,
    },
}

/// Kind of element an [`ElementReference`] points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// A configuration.
    Config,
    /// A flow.
    Flow,
    /// An object store.
    ObjectStore,
    /// A construct.
    Construct,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Flow => write!(f, "flow"),
            Self::ObjectStore => write!(f, "object store"),
            Self::Construct => write!(f, "construct"),
        }
    }
}

/// Resolved descriptor of an element a parameter may reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementReference {
    /// Namespace prefix of the element.
    pub namespace: String,
    /// Element name.
    pub element: String,
    /// Element kind.
    pub kind: ElementKind,
}

impl ElementReference {
    /// Creates an element reference.
    #[must_use]
    pub fn new(namespace: impl Into<String>, element: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            namespace: namespace.into(),
            element: element.into(),
            kind,
        }
    }
}
