//! Schema derivation from entity shapes
//!
//! Walks an entity's descriptor table recursively. Nested shapes become
//! record fields named after the shape, so every use of a shared shape
//! yields an equal nested schema.

use super::types::{FieldType, Schema, SchemaField};
use crate::error::{Error, Result};
use crate::model::{AttributeKind, ElementKind, EntityKind, EntityShape, ScalarKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Deepest nesting accepted before a shape is treated as cyclic
pub const MAX_SCHEMA_DEPTH: usize = 16;

/// Build the schema of an entity kind; `label` becomes the schema name
pub fn build_schema(label: &str, kind: EntityKind) -> Result<Schema> {
    build_schema_with_depth(label, kind.shape(), MAX_SCHEMA_DEPTH)
}

/// Build the schema of an arbitrary shape with an explicit depth limit
pub fn build_schema_with_depth(
    label: &str,
    shape: &'static EntityShape,
    max_depth: usize,
) -> Result<Schema> {
    shape_schema(label, shape, 0, max_depth)
}

fn shape_schema(
    name: &str,
    shape: &'static EntityShape,
    depth: usize,
    max_depth: usize,
) -> Result<Schema> {
    if depth > max_depth {
        return Err(Error::SchemaDepth {
            entity: name.to_string(),
            max_depth,
        });
    }

    let fields = shape
        .all_attributes()
        .into_iter()
        .map(|attribute| -> Result<SchemaField> {
            let field_type = match attribute.kind {
                AttributeKind::Scalar(kind) => scalar_type(kind),
                AttributeKind::Object(nested) => {
                    FieldType::Record(shape_schema(nested.name, nested, depth + 1, max_depth)?)
                }
                AttributeKind::List(ElementKind::Scalar(kind)) => {
                    FieldType::Array(Box::new(scalar_type(kind)))
                }
                AttributeKind::List(ElementKind::Object(nested)) => FieldType::Array(Box::new(
                    FieldType::Record(shape_schema(nested.name, nested, depth + 1, max_depth)?),
                )),
            };
            Ok(SchemaField::nullable(attribute.name, field_type))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Schema::new(name, fields))
}

fn scalar_type(kind: ScalarKind) -> FieldType {
    match kind {
        ScalarKind::String => FieldType::String,
        ScalarKind::Integer => FieldType::Long,
        ScalarKind::Boolean => FieldType::Boolean,
        ScalarKind::Decimal => FieldType::Double,
    }
}

// ============================================================================
// Cache
// ============================================================================

/// Memo of derived schemas, one per entity kind
///
/// Schemas are value-deterministic, so two callers racing on a cold entry
/// both build it and the later insert is discarded.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: RwLock<HashMap<EntityKind, Arc<Schema>>>,
}

static GLOBAL_CACHE: Lazy<SchemaCache> = Lazy::new(SchemaCache::new);

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache
    pub fn global() -> &'static SchemaCache {
        &GLOBAL_CACHE
    }

    /// Cached schema for a kind, named after its dataset label
    pub fn get_or_build(&self, kind: EntityKind) -> Result<Arc<Schema>> {
        if let Some(schema) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
        {
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(build_schema(kind.label(), kind)?);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(kind).or_insert(schema)))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
