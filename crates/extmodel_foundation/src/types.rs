//! Type identifiers, module origins and semantic data types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a type by the package/namespace declaring it and its name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeId {
    /// Declaring namespace, e.g. `org.acme.vehicles`.
    pub namespace: String,
    /// Simple type name, e.g. `Car`.
    pub name: String,
}

impl TypeId {
    /// Creates a type identifier.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({self})")
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Identity of a deployable module (one extension's artifact).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModuleId(pub String);

impl ModuleId {
    /// Creates a module identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a type was loaded from.
///
/// Compared by value: two descriptors share an origin exactly when their
/// origins are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModuleOrigin {
    /// Owned by one module.
    Module(ModuleId),
    /// A shared library loaded independently into each consumer, so every
    /// module sees its own copy.
    SharedLibrary(String),
}

impl ModuleOrigin {
    /// Creates a module origin.
    #[must_use]
    pub fn module(id: impl Into<String>) -> Self {
        Self::Module(ModuleId::new(id))
    }

    /// Returns the owning module, if any.
    #[must_use]
    pub const fn module_id(&self) -> Option<&ModuleId> {
        match self {
            Self::Module(id) => Some(id),
            Self::SharedLibrary(_) => None,
        }
    }

    /// Returns true for shared library origins.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::SharedLibrary(_))
    }
}

impl fmt::Display for ModuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(id) => write!(f, "module {id}"),
            Self::SharedLibrary(name) => write!(f, "shared library {name}"),
        }
    }
}

/// A type known to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeDescriptor {
    /// The type's identifier.
    pub id: TypeId,
    /// Where the declaring type was loaded from.
    pub origin: ModuleOrigin,
}

impl TypeDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(id: TypeId, origin: ModuleOrigin) -> Self {
        Self { id, origin }
    }
}

/// Semantic type of a parameter or output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    /// No value.
    Void,
    /// Boolean.
    Boolean,
    /// Any numeric type.
    Number,
    /// Date, time or date-time.
    DateTime,
    /// Text content.
    String,
    /// Raw binary content.
    Binary,
    /// Content of unknown shape.
    Any,
    /// A closed set of values.
    Enum(Vec<String>),
    /// A structured object type.
    Object(TypeId),
    /// Homogeneous collection.
    Array(Box<DataType>),
}

impl DataType {
    /// Creates an array type.
    #[must_use]
    pub fn array(element: DataType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns true for content whose media type is only known at runtime.
    ///
    /// Void, simple values, enums, objects and collections have a fixed
    /// representation.
    #[must_use]
    pub const fn is_inspectable_content(&self) -> bool {
        matches!(self, Self::String | Self::Binary | Self::Any)
    }

    /// Returns true for `Void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns the object type referenced by this type, looking through arrays.
    #[must_use]
    pub fn object_type(&self) -> Option<&TypeId> {
        match self {
            Self::Object(id) => Some(id),
            Self::Array(element) => element.object_type(),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::DateTime => write!(f, "datetime"),
            Self::String => write!(f, "string"),
            Self::Binary => write!(f, "binary"),
            Self::Any => write!(f, "any"),
            Self::Enum(values) => write!(f, "enum[{}]", values.join("|")),
            Self::Object(id) => write!(f, "{id}"),
            Self::Array(element) => write!(f, "[{element}]"),
        }
    }
}
