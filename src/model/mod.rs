//! Entity model
//!
//! The closed set of GitHub resources this source reads. Each [`EntityKind`]
//! maps to a static [`EntityShape`] describing its attributes; decoded
//! payloads are held as [`EntityValue`]s keyed by those attributes.

pub mod entities;
mod kind;
mod types;

pub use kind::EntityKind;
pub use types::{
    AttrValue, Attribute, AttributeKind, ElementKind, EntityShape, EntityValue, ScalarKind,
};

#[cfg(test)]
pub(crate) mod sample;
