//! Model properties: the open metadata bag carried by every declaration.
//!
//! A bag holds at most one [`ModelProperty`] per [`PropertyKind`]. Enrichers
//! attach derived facts here instead of widening the declaration types.

use extmodel_foundation::DataType;
use im::OrdMap;

use crate::metadata::Deprecation;

// =============================================================================
// Property payloads
// =============================================================================

/// Source type a configuration, connection provider or other component was
/// extracted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplementingSource {
    /// Fully qualified source type name.
    pub type_name: String,
    /// Deprecation declared on the source type.
    pub deprecated: Option<Deprecation>,
    /// Fields of the source type.
    pub fields: Vec<FieldInfo>,
}

impl ImplementingSource {
    /// Creates a source with no fields.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            deprecated: None,
            fields: Vec::new(),
        }
    }

    /// Marks the source type as deprecated.
    #[must_use]
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }
}

/// A field of an implementing source type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: DataType,
    /// The field asks to be injected with the declared reference name.
    pub ref_name: bool,
}

impl FieldInfo {
    /// Creates a plain field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_name: false,
        }
    }

    /// Creates a field marked for ref-name injection.
    #[must_use]
    pub fn ref_name(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_name: true,
        }
    }
}

/// Source member a parameter was extracted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaringMember {
    /// Member name.
    pub name: String,
    /// Deprecation declared on the member.
    pub deprecated: Option<Deprecation>,
}

impl DeclaringMember {
    /// Creates a member with no deprecation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecated: None,
        }
    }

    /// Marks the member as deprecated.
    #[must_use]
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }
}

/// One parameter's place in a declaration's resolved layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutSlot {
    /// Owning group name.
    pub group: String,
    /// Parameter name.
    pub parameter: String,
    /// Absolute position, starting at 1.
    pub position: u32,
}

/// Resolved ordering of a parameterized declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Named groups with their order among the declaration's top-level
    /// entries, sorted by order. Default-group parameters are placed one by
    /// one and do not appear here.
    pub groups: Vec<(String, u32)>,
    /// Every parameter in absolute order.
    pub parameters: Vec<LayoutSlot>,
}

impl ResolvedLayout {
    /// Returns the absolute position of a parameter.
    #[must_use]
    pub fn position_of(&self, parameter: &str) -> Option<u32> {
        self.parameters
            .iter()
            .find(|slot| slot.parameter == parameter)
            .map(|slot| slot.position)
    }

    /// Returns parameter names in absolute order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|s| s.parameter.as_str()).collect()
    }
}

/// Which enricher synthesized a parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntheticKind {
    /// Output MIME type.
    MimeType,
    /// Output encoding.
    Encoding,
    /// Transactional action.
    TransactionalAction,
    /// Transaction type of a transactional source.
    TransactionType,
    /// Target variable name.
    Target,
    /// Expression evaluated into the target variable.
    TargetValue,
}

// =============================================================================
// ModelProperty
// =============================================================================

/// Tag identifying a property slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    /// [`ModelProperty::ImplementingSource`]
    ImplementingSource,
    /// [`ModelProperty::DeclaringMember`]
    DeclaringMember,
    /// [`ModelProperty::RefName`]
    RefName,
    /// [`ModelProperty::RequiredForMetadata`]
    RequiredForMetadata,
    /// [`ModelProperty::ResolvedLayout`]
    ResolvedLayout,
    /// [`ModelProperty::StaticSchema`]
    StaticSchema,
    /// [`ModelProperty::Synthetic`]
    Synthetic,
}

/// A typed metadata attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelProperty {
    /// Source type of a component.
    ImplementingSource(ImplementingSource),
    /// Source member of a parameter.
    DeclaringMember(DeclaringMember),
    /// Field injected with the declared reference name.
    RefName(String),
    /// Parameters required to resolve dynamic metadata.
    RequiredForMetadata(Vec<String>),
    /// Resolved parameter and group order.
    ResolvedLayout(ResolvedLayout),
    /// Static output schema resource.
    StaticSchema(String),
    /// Parameter was synthesized by an enricher.
    Synthetic(SyntheticKind),
}

impl ModelProperty {
    /// Returns the slot this property occupies.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::ImplementingSource(_) => PropertyKind::ImplementingSource,
            Self::DeclaringMember(_) => PropertyKind::DeclaringMember,
            Self::RefName(_) => PropertyKind::RefName,
            Self::RequiredForMetadata(_) => PropertyKind::RequiredForMetadata,
            Self::ResolvedLayout(_) => PropertyKind::ResolvedLayout,
            Self::StaticSchema(_) => PropertyKind::StaticSchema,
            Self::Synthetic(_) => PropertyKind::Synthetic,
        }
    }
}

// =============================================================================
// ModelProperties
// =============================================================================

/// A bag of model properties, one per kind.
///
/// Backed by a persistent map so frozen snapshots share structure with the
/// graph they were taken from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelProperties {
    entries: OrdMap<PropertyKind, ModelProperty>,
}

impl ModelProperties {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a property, returning the one it replaced.
    pub fn insert(&mut self, property: ModelProperty) -> Option<ModelProperty> {
        self.entries.insert(property.kind(), property)
    }

    /// Removes a property.
    pub fn remove(&mut self, kind: PropertyKind) -> Option<ModelProperty> {
        self.entries.remove(&kind)
    }

    /// Looks up a property.
    #[must_use]
    pub fn get(&self, kind: PropertyKind) -> Option<&ModelProperty> {
        self.entries.get(&kind)
    }

    /// Returns true if a property of this kind is present.
    #[must_use]
    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates properties in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelProperty> {
        self.entries.values()
    }

    /// Returns the implementing source, if any.
    #[must_use]
    pub fn implementing_source(&self) -> Option<&ImplementingSource> {
        match self.get(PropertyKind::ImplementingSource) {
            Some(ModelProperty::ImplementingSource(source)) => Some(source),
            _ => None,
        }
    }

    /// Returns the declaring member, if any.
    #[must_use]
    pub fn declaring_member(&self) -> Option<&DeclaringMember> {
        match self.get(PropertyKind::DeclaringMember) {
            Some(ModelProperty::DeclaringMember(member)) => Some(member),
            _ => None,
        }
    }

    /// Returns the ref-name field, if any.
    #[must_use]
    pub fn ref_name(&self) -> Option<&str> {
        match self.get(PropertyKind::RefName) {
            Some(ModelProperty::RefName(field)) => Some(field.as_str()),
            _ => None,
        }
    }

    /// Returns the parameters required for metadata, if any.
    #[must_use]
    pub fn required_for_metadata(&self) -> Option<&[String]> {
        match self.get(PropertyKind::RequiredForMetadata) {
            Some(ModelProperty::RequiredForMetadata(names)) => Some(names.as_slice()),
            _ => None,
        }
    }

    /// Returns the resolved layout, if any.
    #[must_use]
    pub fn resolved_layout(&self) -> Option<&ResolvedLayout> {
        match self.get(PropertyKind::ResolvedLayout) {
            Some(ModelProperty::ResolvedLayout(layout)) => Some(layout),
            _ => None,
        }
    }

    /// Returns the static schema resource, if any.
    #[must_use]
    pub fn static_schema(&self) -> Option<&str> {
        match self.get(PropertyKind::StaticSchema) {
            Some(ModelProperty::StaticSchema(path)) => Some(path.as_str()),
            _ => None,
        }
    }

    /// Returns the synthetic marker, if any.
    #[must_use]
    pub fn synthetic(&self) -> Option<SyntheticKind> {
        match self.get(PropertyKind::Synthetic) {
            Some(ModelProperty::Synthetic(kind)) => Some(*kind),
            _ => None,
        }
    }
}

impl FromIterator<ModelProperty> for ModelProperties {
    fn from_iter<I: IntoIterator<Item = ModelProperty>>(iter: I) -> Self {
        let mut bag = Self::new();
        for property in iter {
            bag.insert(property);
        }
        bag
    }
}
