//! Response decoding
//!
//! Turns a page body (a JSON array) into [`EntityValue`](crate::model::EntityValue)s
//! by walking the target kind's descriptor table.

mod decoder;

pub use decoder::EntityDecoder;
