//! Application layer: services and use cases
//!
//! This layer turns raw records into domain input and applies user policy.

pub mod error;
pub mod error_ext;
pub mod parser;
pub mod policy;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use parser::parse_records;
pub use policy::DuplicatePolicy;
