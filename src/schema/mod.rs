//! Schema derivation
//!
//! Turns an entity kind's static descriptor table into a tabular [`Schema`]:
//! own attributes first, then inherited ones, every field nullable. Derived
//! schemas are memoized per kind in [`SchemaCache`].

mod builder;
mod types;

pub use builder::{build_schema, build_schema_with_depth, SchemaCache, MAX_SCHEMA_DEPTH};
pub use types::{FieldType, Schema, SchemaField};
