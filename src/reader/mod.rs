//! Split reader
//!
//! One [`SplitReader`] per cursor, moving through
//! `CREATED -> INITIALIZED -> ITERATING -> EXHAUSTED`.

mod split_reader;
mod types;

pub use split_reader::SplitReader;
pub use types::ReaderState;
