//! Render parent-child name pairs as a `tree`-style diagram.
//!
//! ```
//! use deptree::domain::{build_tree, render, Edge};
//!
//! let edges = vec![Edge::new("A", "B"), Edge::new("A", "C")];
//! let tree = build_tree(&edges);
//! assert_eq!(render(tree.as_ref()), ["A", " ├─ B", " └─ C"]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
