//! Parameter and parameter group declarations.

use std::fmt;

use extmodel_foundation::{DataType, StereotypeModel};

use crate::metadata::{
    Deprecation, DisplayModel, ElementReference, LayoutModel, ProviderModel, ReferenceTarget,
};
use crate::property::{ModelProperties, ModelProperty};

/// Name of the default (unnamed) parameter group.
pub const DEFAULT_GROUP_NAME: &str = "General";

// =============================================================================
// Enums
// =============================================================================

/// Whether a parameter accepts expressions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExpressionSupport {
    /// Only literal values.
    NotSupported,
    /// Literals or expressions.
    #[default]
    Supported,
    /// Only expressions.
    Required,
}

impl fmt::Display for ExpressionSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NOT_SUPPORTED"),
            Self::Supported => write!(f, "SUPPORTED"),
            Self::Required => write!(f, "REQUIRED"),
        }
    }
}

/// How a parameter participates in an operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParameterRole {
    /// Tunes behaviour.
    #[default]
    Behaviour,
    /// Carries content.
    Content,
    /// Carries the primary content.
    Primary,
}

// =============================================================================
// ParameterDeclaration
// =============================================================================

/// A single parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDeclaration {
    /// Parameter name, unique within its owning declaration.
    pub name: String,
    /// Description.
    pub description: String,
    /// Semantic type.
    pub ty: DataType,
    /// Whether a value must be supplied.
    pub required: bool,
    /// Expression support mode.
    pub expression_support: ExpressionSupport,
    /// Default value.
    pub default_value: Option<String>,
    /// Role.
    pub role: ParameterRole,
    /// Placement.
    pub layout: LayoutModel,
    /// Display metadata.
    pub display: Option<DisplayModel>,
    /// Candidate elements this parameter references, as declared.
    pub references: Vec<ReferenceTarget>,
    /// Resolved allowed stereotypes, in declaration order.
    pub allowed_stereotypes: Vec<StereotypeModel>,
    /// Resolved element references, in declaration order.
    pub element_references: Vec<ElementReference>,
    /// Value provider.
    pub value_provider: Option<ProviderModel>,
    /// Sample data provider.
    pub sample_data_provider: Option<ProviderModel>,
    /// Required to resolve dynamic metadata.
    pub required_for_metadata: bool,
    /// Deprecation.
    pub deprecation: Option<Deprecation>,
    /// Model properties.
    pub properties: ModelProperties,
}

impl ParameterDeclaration {
    /// Creates an optional parameter with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            ty,
            required: false,
            expression_support: ExpressionSupport::default(),
            default_value: None,
            role: ParameterRole::default(),
            layout: LayoutModel::default(),
            display: None,
            references: Vec::new(),
            allowed_stereotypes: Vec::new(),
            element_references: Vec::new(),
            value_provider: None,
            sample_data_provider: None,
            required_for_metadata: false,
            deprecation: None,
            properties: ModelProperties::new(),
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the expression support mode.
    #[must_use]
    pub fn with_expression_support(mut self, support: ExpressionSupport) -> Self {
        self.expression_support = support;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: ParameterRole) -> Self {
        self.role = role;
        self
    }

    /// Sets an explicit placement order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.layout.order = Some(order);
        self
    }

    /// Places the parameter on a tab.
    #[must_use]
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.layout.tab = Some(tab.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display.get_or_insert_with(DisplayModel::default).display_name = Some(name.into());
        self
    }

    /// Adds a candidate reference target.
    #[must_use]
    pub fn with_reference(mut self, target: ReferenceTarget) -> Self {
        self.references.push(target);
        self
    }

    /// Sets the value provider.
    #[must_use]
    pub fn with_value_provider(mut self, provider: ProviderModel) -> Self {
        self.value_provider = Some(provider);
        self
    }

    /// Sets the sample data provider.
    #[must_use]
    pub fn with_sample_data_provider(mut self, provider: ProviderModel) -> Self {
        self.sample_data_provider = Some(provider);
        self
    }

    /// Marks the parameter as required for dynamic metadata.
    #[must_use]
    pub fn for_metadata(mut self) -> Self {
        self.required_for_metadata = true;
        self
    }

    /// Attaches a model property.
    #[must_use]
    pub fn with_property(mut self, property: ModelProperty) -> Self {
        self.properties.insert(property);
        self
    }

    /// Returns true if the parameter references any element.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !self.references.is_empty()
    }
}

// =============================================================================
// ParameterGroupDeclaration
// =============================================================================

/// A named, ordered group of parameters.
///
/// A group may be owned by several declarations at once when it is declared
/// through composition; its internal order belongs to the group.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterGroupDeclaration {
    /// Group name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Parameters, in declaration order.
    pub parameters: Vec<ParameterDeclaration>,
    /// Placement of the group among its declaration's groups.
    pub layout: LayoutModel,
    /// Display metadata.
    pub display: Option<DisplayModel>,
    /// Model properties.
    pub properties: ModelProperties,
}

impl ParameterGroupDeclaration {
    /// Creates an empty named group.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            layout: LayoutModel::default(),
            display: None,
            properties: ModelProperties::new(),
        }
    }

    /// Creates an empty default group.
    #[must_use]
    pub fn default_group() -> Self {
        Self::named(DEFAULT_GROUP_NAME)
    }

    /// Returns true for the default group.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_GROUP_NAME
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDeclaration) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets an explicit placement order for the group.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.layout.order = Some(order);
        self
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterDeclaration> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Looks up a parameter by name for mutation.
    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut ParameterDeclaration> {
        self.parameters.iter_mut().find(|p| p.name == name)
    }

    /// Returns true if a parameter with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }
}
