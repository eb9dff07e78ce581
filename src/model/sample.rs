//! Fully populated sample payloads, for tests

use super::types::{AttrValue, AttributeKind, ElementKind, EntityShape, EntityValue, ScalarKind};
use serde_json::{json, Map, Value};

fn scalar_json(kind: ScalarKind, name: &str) -> Value {
    match kind {
        ScalarKind::String => json!(format!("{name}-value")),
        ScalarKind::Integer => json!(7),
        ScalarKind::Boolean => json!(true),
        ScalarKind::Decimal => json!(1.5),
    }
}

fn scalar_value(kind: ScalarKind, name: &str) -> AttrValue {
    match kind {
        ScalarKind::String => AttrValue::String(format!("{name}-value")),
        ScalarKind::Integer => AttrValue::Integer(7),
        ScalarKind::Boolean => AttrValue::Boolean(true),
        ScalarKind::Decimal => AttrValue::Decimal(1.5),
    }
}

/// Remote JSON object with every attribute set, lists holding one element
pub(crate) fn sample_json(shape: &EntityShape) -> Value {
    let mut object = Map::new();
    for attribute in shape.all_attributes() {
        let value = match attribute.kind {
            AttributeKind::Scalar(kind) => scalar_json(kind, attribute.name),
            AttributeKind::Object(nested) => sample_json(nested),
            AttributeKind::List(ElementKind::Scalar(kind)) => {
                json!([scalar_json(kind, attribute.name)])
            }
            AttributeKind::List(ElementKind::Object(nested)) => json!([sample_json(nested)]),
        };
        object.insert(attribute.remote_key.to_string(), value);
    }
    Value::Object(object)
}

/// Decoded counterpart of [`sample_json`]
pub(crate) fn sample_value(shape: &EntityShape) -> EntityValue {
    let mut value = EntityValue::new(shape.name);
    for attribute in shape.all_attributes() {
        let attr = match attribute.kind {
            AttributeKind::Scalar(kind) => scalar_value(kind, attribute.name),
            AttributeKind::Object(nested) => AttrValue::Object(sample_value(nested)),
            AttributeKind::List(ElementKind::Scalar(kind)) => {
                AttrValue::List(vec![scalar_value(kind, attribute.name)])
            }
            AttributeKind::List(ElementKind::Object(nested)) => {
                AttrValue::List(vec![AttrValue::Object(sample_value(nested))])
            }
        };
        value.insert(attribute.name, attr);
    }
    value
}
