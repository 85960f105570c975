//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::Diagnostic;

/// Domain errors represent violations of the tree-building rules.
///
/// The builder itself never fails. These are raised when the caller asks for
/// dropped dependency groups to be treated as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("dropped dependencies: {0}")]
    DroppedDependencies(Diagnostic),
}
