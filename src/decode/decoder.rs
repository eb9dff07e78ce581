//! Descriptor-driven JSON decoder

use crate::error::{Error, Result};
use crate::model::{
    AttrValue, AttributeKind, ElementKind, EntityKind, EntityShape, EntityValue, ScalarKind,
};
use serde_json::{Map, Value};

/// Decodes a page body into entities of one shape
#[derive(Debug, Clone, Copy)]
pub struct EntityDecoder {
    shape: &'static EntityShape,
}

impl EntityDecoder {
    /// Decoder for a dataset kind
    pub fn new(kind: EntityKind) -> Self {
        Self::for_shape(kind.shape())
    }

    /// Decoder for an arbitrary shape
    pub fn for_shape(shape: &'static EntityShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &'static EntityShape {
        self.shape
    }

    /// Decode a response body that must be a JSON array of entities
    ///
    /// Element order is preserved. Unknown keys are ignored; missing or null
    /// keys decode as [`AttrValue::Null`].
    pub fn decode(&self, body: &str) -> Result<Vec<EntityValue>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.decode_value(&value)
    }

    /// Decode an already parsed JSON array
    pub fn decode_value(&self, value: &Value) -> Result<Vec<EntityValue>> {
        let Value::Array(elements) = value else {
            return Err(Error::decode(format!(
                "Expected a JSON array of {}, found {}",
                self.shape.name,
                json_kind(value)
            )));
        };

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| decode_object(element, self.shape, &format!("[{index}]")))
            .collect()
    }
}

fn decode_object(value: &Value, shape: &'static EntityShape, path: &str) -> Result<EntityValue> {
    let object = value.as_object().ok_or_else(|| {
        Error::decode(format!(
            "{path}: expected {} object, found {}",
            shape.name,
            json_kind(value)
        ))
    })?;

    let mut entity = EntityValue::new(shape.name);
    for attribute in shape.all_attributes() {
        let attr_path = format!("{path}.{}", attribute.name);
        let decoded = decode_attribute(object, attribute.remote_key, attribute.kind, &attr_path)?;
        entity.insert(attribute.name, decoded);
    }
    Ok(entity)
}

fn decode_attribute(
    object: &Map<String, Value>,
    remote_key: &str,
    kind: AttributeKind,
    path: &str,
) -> Result<AttrValue> {
    let value = match object.get(remote_key) {
        None | Some(Value::Null) => return Ok(AttrValue::Null),
        Some(value) => value,
    };

    match kind {
        AttributeKind::Scalar(scalar) => decode_scalar(value, scalar, path),
        AttributeKind::Object(shape) => Ok(AttrValue::Object(decode_object(value, shape, path)?)),
        AttributeKind::List(element) => {
            let items = value.as_array().ok_or_else(|| {
                Error::decode(format!("{path}: expected array, found {}", json_kind(value)))
            })?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| decode_element(item, element, &format!("{path}[{index}]")))
                .collect::<Result<Vec<_>>>()
                .map(AttrValue::List)
        }
    }
}

fn decode_element(value: &Value, element: ElementKind, path: &str) -> Result<AttrValue> {
    match (value, element) {
        (Value::Null, _) => Ok(AttrValue::Null),
        (_, ElementKind::Scalar(scalar)) => decode_scalar(value, scalar, path),
        (_, ElementKind::Object(shape)) => Ok(AttrValue::Object(decode_object(value, shape, path)?)),
    }
}

fn decode_scalar(value: &Value, kind: ScalarKind, path: &str) -> Result<AttrValue> {
    let decoded = match (kind, value) {
        (ScalarKind::String, Value::String(s)) => Some(AttrValue::String(s.clone())),
        (ScalarKind::Integer, Value::Number(n)) => n.as_i64().map(AttrValue::Integer),
        (ScalarKind::Boolean, Value::Bool(b)) => Some(AttrValue::Boolean(*b)),
        (ScalarKind::Decimal, Value::Number(n)) => n.as_f64().map(AttrValue::Decimal),
        _ => None,
    };

    decoded.ok_or_else(|| {
        Error::decode(format!(
            "{path}: expected {kind}, found {}",
            describe(value)
        ))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Like [`json_kind`] but names numbers outside the `i64` range
fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_u64() && n.as_i64().is_none() => format!("number {n} out of range"),
        Value::Number(n) if n.is_f64() => format!("fractional number {n}"),
        other => json_kind(other).to_string(),
    }
}
