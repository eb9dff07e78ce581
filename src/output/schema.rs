//! Schema and record conversion to Arrow
//!
//! Every derived field is nullable, so every Arrow field is too. Nested
//! records map to struct columns and arrays to list columns.

use crate::error::{Error, Result};
use crate::schema::{FieldType, Schema, SchemaField};
use crate::transform::{FieldValue, Record};
use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, ListArray, StringArray, StructArray,
};
use arrow::buffer::{NullBuffer, OffsetBuffer};
use arrow::datatypes::{DataType, Field, Fields, Schema as ArrowSchema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Arrow schema equivalent of a derived schema
pub fn schema_to_arrow(schema: &Schema) -> ArrowSchema {
    ArrowSchema::new(arrow_fields(schema))
}

fn arrow_fields(schema: &Schema) -> Fields {
    schema.fields.iter().map(arrow_field).collect()
}

fn arrow_field(field: &SchemaField) -> Field {
    Field::new(&field.name, data_type(&field.field_type), field.nullable)
}

fn data_type(field_type: &FieldType) -> DataType {
    match field_type {
        FieldType::String => DataType::Utf8,
        FieldType::Long => DataType::Int64,
        FieldType::Boolean => DataType::Boolean,
        FieldType::Double => DataType::Float64,
        FieldType::Record(schema) => DataType::Struct(arrow_fields(schema)),
        FieldType::Array(element) => DataType::List(item_field(element)),
    }
}

fn item_field(element: &FieldType) -> Arc<Field> {
    Arc::new(Field::new("item", data_type(element), true))
}

/// Convert records of one schema into a single Arrow RecordBatch
pub fn records_to_batch(schema: &Schema, records: &[Record]) -> Result<RecordBatch> {
    let arrow_schema = Arc::new(schema_to_arrow(schema));

    let columns = schema
        .fields
        .iter()
        .map(|field| {
            let values: Vec<Option<&FieldValue>> =
                records.iter().map(|record| record.get(&field.name)).collect();
            build_array(&values, &field.field_type)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RecordBatch::try_new(arrow_schema, columns)?)
}

/// Build an Arrow array from field values; `None` and null become nulls
fn build_array(values: &[Option<&FieldValue>], field_type: &FieldType) -> Result<ArrayRef> {
    match field_type {
        FieldType::String => {
            let arr: StringArray = values
                .iter()
                .map(|v| v.and_then(FieldValue::as_str))
                .collect();
            Ok(Arc::new(arr))
        }

        FieldType::Long => {
            let arr: Int64Array = values.iter().map(|v| v.and_then(FieldValue::as_i64)).collect();
            Ok(Arc::new(arr))
        }

        FieldType::Boolean => {
            let arr: BooleanArray = values
                .iter()
                .map(|v| v.and_then(FieldValue::as_bool))
                .collect();
            Ok(Arc::new(arr))
        }

        FieldType::Double => {
            let arr: Float64Array = values.iter().map(|v| v.and_then(FieldValue::as_f64)).collect();
            Ok(Arc::new(arr))
        }

        FieldType::Record(schema) => build_struct_array(values, schema),

        FieldType::Array(element) => build_list_array(values, element),
    }
}

/// Build a list array, flattening all elements into one child array
fn build_list_array(values: &[Option<&FieldValue>], element: &FieldType) -> Result<ArrayRef> {
    let mut all_items: Vec<Option<&FieldValue>> = Vec::new();
    let mut offsets: Vec<i32> = vec![0];
    let mut validity: Vec<bool> = Vec::with_capacity(values.len());

    for value in values {
        let items = value.and_then(FieldValue::as_array);
        if let Some(items) = items {
            all_items.extend(items.iter().map(Some));
        }
        validity.push(items.is_some());

        let offset = i32::try_from(all_items.len())
            .map_err(|_| Error::output("Array too large for i32 offset"))?;
        offsets.push(offset);
    }

    let items_array = build_array(&all_items, element)?;
    let offset_buffer = OffsetBuffer::new(offsets.into());

    let list_array = ListArray::try_new(
        item_field(element),
        offset_buffer,
        items_array,
        Some(NullBuffer::from(validity)),
    )?;
    Ok(Arc::new(list_array))
}

/// Build a struct array from nested records
fn build_struct_array(values: &[Option<&FieldValue>], schema: &Schema) -> Result<ArrayRef> {
    let nested: Vec<Option<&Record>> = values
        .iter()
        .map(|v| v.and_then(FieldValue::as_record))
        .collect();

    let child_arrays = schema
        .fields
        .iter()
        .map(|field| {
            let child_values: Vec<Option<&FieldValue>> = nested
                .iter()
                .map(|record| record.and_then(|r| r.get(&field.name)))
                .collect();
            build_array(&child_values, &field.field_type)
        })
        .collect::<Result<Vec<_>>>()?;

    let validity = NullBuffer::from(nested.iter().map(Option::is_some).collect::<Vec<_>>());
    let struct_array = StructArray::try_new(arrow_fields(schema), child_arrays, Some(validity))?;
    Ok(Arc::new(struct_array))
}
