//! Record transformation
//!
//! Maps decoded entities onto their derived schema. The output carries
//! exactly the schema's fields: absent scalars and records become null,
//! absent arrays become empty arrays.

mod transformer;
mod types;

pub use transformer::{transform, transform_all};
pub use types::{FieldValue, Record};

#[cfg(test)]
mod tests;
