//! Domain layer: tree building and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod render;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::{build_tree, BuildOutcome, TreeBuilder};
pub use entities::*;
pub use error::DomainError;
pub use render::{render, write_tree, Lines};
