//! Entity to record transformation

use super::types::{FieldValue, Record};
use crate::error::{Error, Result};
use crate::model::{AttrValue, EntityValue};
use crate::schema::{FieldType, Schema};

/// Convert a decoded entity into a record of the given schema
///
/// The caller passes the schema derived for the entity's kind. A schema
/// field the entity does not carry at all, or a value of the wrong kind,
/// is a model defect and fails with [`Error::ShapeMismatch`].
pub fn transform(instance: &EntityValue, schema: &Schema) -> Result<Record> {
    let mut record = Record::new(&schema.name);
    for field in &schema.fields {
        let value = instance.get(&field.name).ok_or_else(|| {
            Error::shape_mismatch(
                instance.shape_name(),
                &field.name,
                "attribute is not declared on the entity",
            )
        })?;
        let converted = convert(value, &field.field_type, instance.shape_name(), &field.name)?;
        record.push(field.name.clone(), converted);
    }
    Ok(record)
}

/// Transform a page of entities, keeping their order
pub fn transform_all(instances: &[EntityValue], schema: &Schema) -> Result<Vec<Record>> {
    instances.iter().map(|i| transform(i, schema)).collect()
}

fn convert(value: &AttrValue, field_type: &FieldType, entity: &str, field: &str) -> Result<FieldValue> {
    let converted = match (value, field_type) {
        (AttrValue::Null, FieldType::Array(_)) => FieldValue::Array(Vec::new()),
        (AttrValue::Null, _) => FieldValue::Null,
        (AttrValue::String(s), FieldType::String) => FieldValue::String(s.clone()),
        (AttrValue::Integer(v), FieldType::Long) => FieldValue::Long(*v),
        (AttrValue::Boolean(v), FieldType::Boolean) => FieldValue::Boolean(*v),
        (AttrValue::Decimal(v), FieldType::Double) => FieldValue::Double(*v),
        (AttrValue::Object(nested), FieldType::Record(schema)) => {
            FieldValue::Record(transform(nested, schema)?)
        }
        (AttrValue::List(items), FieldType::Array(element)) => FieldValue::Array(
            items
                .iter()
                .map(|item| convert(item, element, entity, field))
                .collect::<Result<Vec<_>>>()?,
        ),
        (other, expected) => {
            return Err(Error::shape_mismatch(
                entity,
                field,
                format!("expected {expected}, found {}", other.kind_name()),
            ))
        }
    };
    Ok(converted)
}
