//! Descriptor and value types for entities
//!
//! An entity's shape is a static table of attributes. Schema building,
//! decoding and record transformation all walk these tables instead of
//! inspecting types at runtime.

use std::fmt;

/// Kind of a scalar attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
    Decimal,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Boolean => write!(f, "boolean"),
            ScalarKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// Element type of a list attribute
#[derive(Debug, Clone, Copy)]
pub enum ElementKind {
    /// List of scalars
    Scalar(ScalarKind),
    /// List of nested objects
    Object(&'static EntityShape),
}

/// Value kind of a declared attribute
#[derive(Debug, Clone, Copy)]
pub enum AttributeKind {
    /// Leaf value
    Scalar(ScalarKind),
    /// Nested object with its own shape
    Object(&'static EntityShape),
    /// Ordered sequence of scalars or objects
    List(ElementKind),
}

/// A declared attribute of an entity shape
#[derive(Debug, Clone, Copy)]
pub struct Attribute {
    /// Attribute name used in schemas and records
    pub name: &'static str,
    /// Key of the attribute in the remote JSON payload
    pub remote_key: &'static str,
    /// Value kind
    pub kind: AttributeKind,
}

impl Attribute {
    /// Create an attribute whose remote key equals its name
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            remote_key: name,
            kind,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Scalar(ScalarKind::String))
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Scalar(ScalarKind::Integer))
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Scalar(ScalarKind::Boolean))
    }

    pub const fn decimal(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Scalar(ScalarKind::Decimal))
    }

    pub const fn object(name: &'static str, shape: &'static EntityShape) -> Self {
        Self::new(name, AttributeKind::Object(shape))
    }

    pub const fn list_of(name: &'static str, shape: &'static EntityShape) -> Self {
        Self::new(name, AttributeKind::List(ElementKind::Object(shape)))
    }

    pub const fn list_of_scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self::new(name, AttributeKind::List(ElementKind::Scalar(kind)))
    }

    /// Read this attribute from a differently named remote key
    #[must_use]
    pub const fn remote(self, remote_key: &'static str) -> Self {
        Self { remote_key, ..self }
    }
}

/// Statically declared shape of an entity or nested object
pub struct EntityShape {
    /// Shape name, also the name of the derived schema
    pub name: &'static str,
    /// Own attributes in declaration order
    pub attributes: &'static [Attribute],
    /// Shared base shape whose attributes follow the own ones
    pub base: Option<&'static EntityShape>,
}

impl EntityShape {
    /// All attributes: own first, then inherited, each in declaration order
    pub fn all_attributes(&self) -> Vec<&'static Attribute> {
        let mut attributes: Vec<&'static Attribute> = self.attributes.iter().collect();
        let mut base = self.base;
        while let Some(shape) = base {
            attributes.extend(shape.attributes.iter());
            base = shape.base;
        }
        attributes
    }

    /// Number of attributes declared directly on this shape
    pub fn own_attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Number of attributes including inherited ones
    pub fn attribute_count(&self) -> usize {
        self.own_attribute_count() + self.base.map_or(0, EntityShape::attribute_count)
    }

    /// Find an attribute (own or inherited) by name
    pub fn attribute(&self, name: &str) -> Option<&'static Attribute> {
        self.all_attributes().into_iter().find(|a| a.name == name)
    }
}

impl fmt::Debug for EntityShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityShape")
            .field("name", &self.name)
            .field("attributes", &self.attributes.len())
            .field("base", &self.base.map(|b| b.name))
            .finish()
    }
}

// ============================================================================
// Decoded values
// ============================================================================

/// A decoded attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Absent from the payload or explicitly null
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Decimal(f64),
    Object(EntityValue),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Short name of the variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::String(_) => "string",
            AttrValue::Integer(_) => "integer",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::Decimal(_) => "decimal",
            AttrValue::Object(_) => "object",
            AttrValue::List(_) => "list",
        }
    }
}

/// A decoded entity instance
///
/// Holds every attribute its shape declares, in declaration order; absent
/// payload values are stored as [`AttrValue::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct EntityValue {
    shape: &'static str,
    attributes: Vec<(&'static str, AttrValue)>,
}

impl EntityValue {
    /// Create an empty instance of the named shape
    pub fn new(shape: &'static str) -> Self {
        Self {
            shape,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute value
    #[must_use]
    pub fn with(mut self, name: &'static str, value: AttrValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute value, replacing an existing one
    pub fn insert(&mut self, name: &'static str, value: AttrValue) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Name of the shape this instance was decoded as
    pub fn shape_name(&self) -> &'static str {
        self.shape
    }

    /// Look up an attribute; `None` means the shape has no such attribute
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.attributes.iter().map(|(n, v)| (*n, v))
    }
}
