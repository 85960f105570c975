//! What to do when consume-once expansion drops dependency groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Diagnostic, DomainError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Drop silently
    #[default]
    Ignore,
    /// Report each dropped group, keep the tree
    Warn,
    /// Fail on the first dropped group
    Error,
}

impl DuplicatePolicy {
    pub fn apply(self, diagnostics: &[Diagnostic]) -> Result<(), DomainError> {
        match self {
            DuplicatePolicy::Ignore => Ok(()),
            DuplicatePolicy::Warn => {
                for diagnostic in diagnostics {
                    info!(name = diagnostic.name(), "dropped: {}", diagnostic);
                }
                Ok(())
            }
            DuplicatePolicy::Error => match diagnostics.first() {
                Some(diagnostic) => Err(DomainError::DroppedDependencies(diagnostic.clone())),
                None => Ok(()),
            },
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(DuplicatePolicy::Ignore),
            "warn" => Ok(DuplicatePolicy::Warn),
            "error" => Ok(DuplicatePolicy::Error),
            other => Err(format!(
                "unknown policy '{}' (expected ignore, warn or error)",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DuplicatePolicy::Ignore => "ignore",
            DuplicatePolicy::Warn => "warn",
            DuplicatePolicy::Error => "error",
        };
        f.write_str(name)
    }
}
