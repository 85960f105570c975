//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod tree;

pub use tree::{TreeOutput, TreeService};
