//! Error types for extension model loading.
//!
//! Every failure raised while completing an extension model is an illegal
//! model definition: there is no transient failure mode, only well-formed or
//! ill-formed input. Uses `thiserror` for ergonomic error definition.

use std::fmt;

use thiserror::Error;

use crate::types::TypeId;

/// The main error type for extension model loading.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    ///
    /// Fields already present in an existing context are kept.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(match self.context.take() {
            Some(existing) => existing.merge(context),
            None => context,
        });
        self
    }

    /// Creates a cyclic error type reference error.
    ///
    /// `cycle` lists the offending definitions in walk order; the first one is
    /// repeated at the end when rendered.
    #[must_use]
    pub fn cyclic_error_type(cycle: Vec<String>) -> Self {
        Self::new(ErrorKind::CyclicErrorType { cycle })
    }

    /// Creates an unmapped throws declaration error.
    #[must_use]
    pub fn unmapped_throws(component: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnmappedThrows {
            component: component.into(),
            error: error.into(),
        })
    }

    /// Creates a duplicate parameter error.
    #[must_use]
    pub fn duplicate_parameter(component: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateParameter {
            component: component.into(),
            parameter: parameter.into(),
        })
    }

    /// Creates a missing resource error.
    #[must_use]
    pub fn missing_resource(resource: impl Into<String>, component: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingResource {
            resource: resource.into(),
            component: component.into(),
        })
    }

    /// Creates an unresolvable type error.
    #[must_use]
    pub fn unresolved_type(ty: TypeId) -> Self {
        Self::new(ErrorKind::UnresolvedType(ty))
    }

    /// Creates a duplicate declaration error.
    #[must_use]
    pub fn duplicate_declaration(
        kind: impl Into<String>,
        name: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::DuplicateDeclaration {
            kind: kind.into(),
            name: name.into(),
            parent: parent.into(),
        })
    }

    /// Returns true if this error is a cyclic error type reference.
    #[must_use]
    pub const fn is_cycle(&self) -> bool {
        matches!(self.kind, ErrorKind::CyclicErrorType { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Error type definitions form a parent cycle.
    #[error("cyclic error type reference detected: {}", render_cycle(.cycle))]
    CyclicErrorType {
        /// Definitions on the cycle, in walk order.
        cycle: Vec<String>,
    },

    /// An error type definition names a parent the extension does not declare.
    #[error("error type {error} declares unknown parent {parent}")]
    UnknownErrorParent {
        /// The definition naming the parent.
        error: String,
        /// The missing parent identifier.
        parent: String,
    },

    /// A platform error was referenced that the platform does not define.
    #[error("unknown platform error type {0}")]
    UnknownPlatformError(String),

    /// A component throws an error type the extension does not declare.
    #[error("component {component} declares it throws {error}, which is not an error type of the extension")]
    UnmappedThrows {
        /// The declaring component, or the extension for extension-wide throws.
        component: String,
        /// The undeclared error identifier.
        error: String,
    },

    /// A synthetic parameter collides with a declared one.
    #[error("component {component} already declares a parameter named {parameter}")]
    DuplicateParameter {
        /// The offending component.
        component: String,
        /// The colliding parameter name.
        parameter: String,
    },

    /// A referenced schema or metadata resource could not be found.
    #[error("resource {resource} referenced by {component} could not be found")]
    MissingResource {
        /// The missing resource path.
        resource: String,
        /// The component referencing it.
        component: String,
    },

    /// The type catalog could not resolve a type.
    #[error("type {0} could not be resolved")]
    UnresolvedType(TypeId),

    /// Two declarations of the same kind share a name under one parent.
    #[error("{kind} {name} is declared more than once in {parent}")]
    DuplicateDeclaration {
        /// The declaration kind.
        kind: String,
        /// The duplicated name.
        name: String,
        /// The owning declaration.
        parent: String,
    },

    /// A declaration was attached somewhere its kind cannot live.
    #[error("{kind} {name} cannot be declared inside {parent}")]
    InvalidPlacement {
        /// The declaration kind.
        kind: String,
        /// The declaration name.
        name: String,
        /// The rejected parent.
        parent: String,
    },

    /// More than one field of a type asks for the reference name.
    #[error("type {type_name} declares more than one ref-name field: {}", .fields.join(", "))]
    MultipleRefNameFields {
        /// The implementing type.
        type_name: String,
        /// The offending fields.
        fields: Vec<String>,
    },

    /// A ref-name field is not a string.
    #[error("ref-name field {field} of {type_name} must be a string, found {found}")]
    InvalidRefNameField {
        /// The implementing type.
        type_name: String,
        /// The field name.
        field: String,
        /// The declared field type.
        found: String,
    },

    /// A parameter references an element the extension does not declare.
    #[error("parameter {parameter} references unknown {kind} {name}")]
    UnknownReference {
        /// The referencing parameter.
        parameter: String,
        /// The referenced element kind.
        kind: String,
        /// The referenced element name.
        name: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn render_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        Some(first) => format!("{} -> {first}", cycle.join(" -> ")),
        None => String::new(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The extension being loaded.
    pub extension: Option<String>,
    /// The enricher that raised the error.
    pub enricher: Option<String>,
    /// The component being processed.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extension name.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Sets the enricher name.
    #[must_use]
    pub fn with_enricher(mut self, enricher: impl Into<String>) -> Self {
        self.enricher = Some(enricher.into());
        self
    }

    /// Sets the component name.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            extension: self.extension.or(other.extension),
            enricher: self.enricher.or(other.enricher),
            component: self.component.or(other.component),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(extension) = &self.extension {
            write!(f, "in extension {extension}")?;
            sep = ", ";
        }
        if let Some(enricher) = &self.enricher {
            write!(f, "{sep}during {enricher}")?;
            sep = ", ";
        }
        if let Some(component) = &self.component {
            write!(f, "{sep}at {component}")?;
        }
        Ok(())
    }
}
