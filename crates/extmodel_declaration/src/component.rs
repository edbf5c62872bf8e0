//! Component declarations: configurations, connection providers, operations,
//! sources, functions and constructs.
//!
//! All kinds share [`ComponentDeclaration`]. Kinds that execute (operations,
//! sources, functions, constructs) additionally carry an [`Executable`] facet.

use std::fmt;

use extmodel_foundation::{DataType, ErrorModel, StereotypeModel};
use im::OrdSet;

use crate::id::{ComponentId, GroupId};
use crate::metadata::{Deprecation, StereotypeDefinition};
use crate::property::{ModelProperties, ModelProperty};

// =============================================================================
// ComponentKind
// =============================================================================

/// Kind of a component declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// A configuration.
    Configuration,
    /// A connection provider.
    ConnectionProvider,
    /// An operation.
    Operation,
    /// A message source.
    Source,
    /// An expression function.
    Function,
    /// A construct (scope, router or other referable element).
    Construct,
}

impl ComponentKind {
    /// Returns true for kinds carrying an [`Executable`] facet.
    #[must_use]
    pub const fn is_executable(self) -> bool {
        matches!(
            self,
            Self::Operation | Self::Source | Self::Function | Self::Construct
        )
    }

    /// Returns true if a declaration of `child` kind may be nested under
    /// this kind. The extension root accepts every kind.
    #[must_use]
    pub const fn accepts(self, child: ComponentKind) -> bool {
        matches!(
            (self, child),
            (
                Self::Configuration,
                Self::Operation | Self::Source | Self::ConnectionProvider
            )
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::ConnectionProvider => write!(f, "connection provider"),
            Self::Operation => write!(f, "operation"),
            Self::Source => write!(f, "source"),
            Self::Function => write!(f, "function"),
            Self::Construct => write!(f, "construct"),
        }
    }
}

// =============================================================================
// Executable facet
// =============================================================================

/// How the runtime should schedule an executable component.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionType {
    /// Short, non-blocking work.
    CpuLite,
    /// Long computations.
    CpuIntensive,
    /// Blocking I/O.
    Blocking,
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CpuLite => write!(f, "CPU_LITE"),
            Self::CpuIntensive => write!(f, "CPU_INTENSIVE"),
            Self::Blocking => write!(f, "BLOCKING"),
        }
    }
}

/// Declared media type of an output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaTypeSpec {
    /// MIME type, e.g. `application/json`.
    pub value: String,
    /// The output is always exactly this media type.
    pub strict: bool,
}

/// The result of an executable component.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputDeclaration {
    /// Result type.
    pub ty: DataType,
    /// Declared media type.
    pub media_type: Option<MediaTypeSpec>,
    /// Static schema resource describing the result.
    pub schema: Option<String>,
}

impl OutputDeclaration {
    /// Creates an output of the given type.
    #[must_use]
    pub fn new(ty: DataType) -> Self {
        Self {
            ty,
            media_type: None,
            schema: None,
        }
    }

    /// Declares a media type.
    #[must_use]
    pub fn with_media_type(mut self, value: impl Into<String>, strict: bool) -> Self {
        self.media_type = Some(MediaTypeSpec {
            value: value.into(),
            strict,
        });
        self
    }

    /// Declares a static schema resource.
    #[must_use]
    pub fn with_schema(mut self, resource: impl Into<String>) -> Self {
        self.schema = Some(resource.into());
        self
    }

    /// Returns true if the media type is fixed by declaration.
    #[must_use]
    pub fn has_fixed_media_type(&self) -> bool {
        self.media_type.as_ref().is_some_and(|m| m.strict)
    }
}

impl Default for OutputDeclaration {
    fn default() -> Self {
        Self::new(DataType::Void)
    }
}

/// Execution semantics of operations, sources, functions and constructs.
#[derive(Clone, Debug, PartialEq)]
pub struct Executable {
    /// Result.
    pub output: OutputDeclaration,
    /// Declared thrown error identifiers; `None` inherits the extension's.
    pub throws: Option<Vec<String>>,
    /// Resolved error types.
    pub errors: OrdSet<ErrorModel>,
    /// Declares a connection parameter.
    pub uses_connection: bool,
    /// Needs a connection to execute; derived.
    pub requires_connection: bool,
    /// Performs blocking work.
    pub blocking: bool,
    /// Participates in transactions.
    pub transactional: bool,
    /// Explicit execution type override.
    pub declared_execution_type: Option<ExecutionType>,
    /// Resolved execution type; derived.
    pub execution_type: Option<ExecutionType>,
}

impl Default for Executable {
    fn default() -> Self {
        Self {
            output: OutputDeclaration::default(),
            throws: None,
            errors: OrdSet::new(),
            uses_connection: false,
            requires_connection: false,
            blocking: true,
            transactional: false,
            declared_execution_type: None,
            execution_type: None,
        }
    }
}

// =============================================================================
// ComponentDeclaration
// =============================================================================

/// A named component of an extension.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentDeclaration {
    /// Kind.
    pub kind: ComponentKind,
    /// Name, unique among siblings of the same kind.
    pub name: String,
    /// Description.
    pub description: String,
    /// Parameter groups, in declaration order.
    pub groups: Vec<GroupId>,
    /// Nested components (configurations only).
    pub children: Vec<ComponentId>,
    /// Deprecation.
    pub deprecation: Option<Deprecation>,
    /// Declared stereotype, before resolution.
    pub stereotype_definition: Option<StereotypeDefinition>,
    /// Resolved stereotype.
    pub stereotype: Option<StereotypeModel>,
    /// Execution semantics, for executable kinds.
    pub executable: Option<Executable>,
    /// Model properties.
    pub properties: ModelProperties,
}

impl ComponentDeclaration {
    /// Creates a component of the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: String::new(),
            groups: Vec::new(),
            children: Vec::new(),
            deprecation: None,
            stereotype_definition: None,
            stereotype: None,
            executable: kind.is_executable().then(Executable::default),
            properties: ModelProperties::new(),
        }
    }

    /// Creates a configuration.
    #[must_use]
    pub fn configuration(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Configuration, name)
    }

    /// Creates a connection provider.
    #[must_use]
    pub fn connection_provider(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::ConnectionProvider, name)
    }

    /// Creates an operation.
    #[must_use]
    pub fn operation(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Operation, name)
    }

    /// Creates a message source.
    #[must_use]
    pub fn source(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Source, name)
    }

    /// Creates a function.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Function, name)
    }

    /// Creates a construct.
    #[must_use]
    pub fn construct(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Construct, name)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a parameter group.
    #[must_use]
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.groups.push(group);
        self
    }

    /// Declares a stereotype.
    #[must_use]
    pub fn with_stereotype(mut self, definition: StereotypeDefinition) -> Self {
        self.stereotype_definition = Some(definition);
        self
    }

    /// Attaches a model property.
    #[must_use]
    pub fn with_property(mut self, property: ModelProperty) -> Self {
        self.properties.insert(property);
        self
    }

    /// Sets the output. No-op for non-executable kinds.
    #[must_use]
    pub fn with_output(mut self, output: OutputDeclaration) -> Self {
        if let Some(executable) = self.executable.as_mut() {
            executable.output = output;
        }
        self
    }

    /// Declares thrown error identifiers. No-op for non-executable kinds.
    #[must_use]
    pub fn with_throws<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(executable) = self.executable.as_mut() {
            executable.throws = Some(errors.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Declares a connection parameter. No-op for non-executable kinds.
    #[must_use]
    pub fn with_connection(mut self) -> Self {
        if let Some(executable) = self.executable.as_mut() {
            executable.uses_connection = true;
        }
        self
    }

    /// Sets whether the component blocks. No-op for non-executable kinds.
    #[must_use]
    pub fn blocking(mut self, blocking: bool) -> Self {
        if let Some(executable) = self.executable.as_mut() {
            executable.blocking = blocking;
        }
        self
    }

    /// Marks the component transactional. No-op for non-executable kinds.
    #[must_use]
    pub fn transactional(mut self) -> Self {
        if let Some(executable) = self.executable.as_mut() {
            executable.transactional = true;
        }
        self
    }

    /// Overrides the execution type. No-op for non-executable kinds.
    #[must_use]
    pub fn with_execution_type(mut self, execution_type: ExecutionType) -> Self {
        if let Some(executable) = self.executable.as_mut() {
            executable.declared_execution_type = Some(execution_type);
        }
        self
    }

    /// Returns the executable facet.
    #[must_use]
    pub fn executable(&self) -> Option<&Executable> {
        self.executable.as_ref()
    }

    /// Returns the executable facet for mutation.
    pub fn executable_mut(&mut self) -> Option<&mut Executable> {
        self.executable.as_mut()
    }

    /// Returns true if the component needs a connection; false for
    /// non-executable kinds.
    #[must_use]
    pub fn requires_connection(&self) -> bool {
        self.executable.as_ref().is_some_and(|e| e.requires_connection)
    }
}
