//! Schema types

use serde_json::{json, Value};
use std::fmt;

/// Value type of a schema field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Long,
    Boolean,
    Double,
    /// Nested record with its own schema
    Record(Schema),
    /// Ordered sequence of the element type
    Array(Box<FieldType>),
}

impl FieldType {
    pub fn is_record(&self) -> bool {
        matches!(self, FieldType::Record(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, FieldType::Array(_))
    }

    /// Nested schema of a record field
    pub fn as_record(&self) -> Option<&Schema> {
        match self {
            FieldType::Record(schema) => Some(schema),
            _ => None,
        }
    }

    /// Avro-style rendering, without the nullable union
    fn to_avro_json(&self) -> Value {
        match self {
            FieldType::String => json!("string"),
            FieldType::Long => json!("long"),
            FieldType::Boolean => json!("boolean"),
            FieldType::Double => json!("double"),
            FieldType::Record(schema) => schema.to_avro_json(),
            FieldType::Array(element) => json!({
                "type": "array",
                "items": element.to_avro_json(),
            }),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Long => write!(f, "long"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Double => write!(f, "double"),
            FieldType::Record(schema) => write!(f, "record<{}>", schema.name),
            FieldType::Array(element) => write!(f, "array<{element}>"),
        }
    }
}

/// One named field of a schema
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
    /// Always true for derived schemas
    pub nullable: bool,
}

impl SchemaField {
    /// Create a nullable field
    pub fn nullable(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }
}

/// Structural description of an entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as an Avro-style record definition
    ///
    /// Nullable fields become `[type, "null"]` unions.
    pub fn to_avro_json(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(|field| {
                let field_type = field.field_type.to_avro_json();
                let field_type = if field.nullable {
                    json!([field_type, "null"])
                } else {
                    field_type
                };
                json!({ "name": field.name, "type": field_type })
            })
            .collect();

        json!({
            "type": "record",
            "name": self.name,
            "fields": fields,
        })
    }
}
