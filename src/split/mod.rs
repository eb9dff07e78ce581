//! Split planning
//!
//! A [`Split`] is the opaque cursor one reader consumes. Planners produce
//! them ahead of execution; the engine distributes them to readers.

mod planners;
mod types;

pub use planners::{collection_url, ListPlanner, PageRangePlanner};
pub use types::{Split, SplitPlanner};
