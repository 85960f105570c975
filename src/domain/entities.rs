//! Domain entities: core data structures

use std::fmt;

/// A single `(parent, child)` pair from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub parent: String,
    pub child: String,
}

impl Edge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

impl<P: Into<String>, C: Into<String>> From<(P, C)> for Edge {
    fn from((parent, child): (P, C)) -> Self {
        Self::new(parent, child)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.parent, self.child)
    }
}

/// Role of a node among its siblings.
///
/// Determines the connector glyph printed in front of the node's name and
/// the indent segment its children inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The root: no connector, no indent.
    Head,
    /// Any child that has a later sibling.
    Body,
    /// The last child of its parent.
    Tail,
}

const CONNECTOR_BODY: &str = " ├─ ";
const CONNECTOR_TAIL: &str = " └─ ";
const INDENT_BODY: &str = " │  ";
const INDENT_TAIL: &str = "    ";

impl Position {
    /// Glyph printed between the inherited prefix and the node name.
    pub fn connector(self) -> &'static str {
        match self {
            Position::Head => "",
            Position::Body => CONNECTOR_BODY,
            Position::Tail => CONNECTOR_TAIL,
        }
    }

    /// Segment appended to the prefix handed down to this node's children.
    pub fn indent(self) -> &'static str {
        match self {
            Position::Head => "",
            Position::Body => INDENT_BODY,
            Position::Tail => INDENT_TAIL,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.connector())
    }
}

/// Something the consume-once expansion dropped while building a tree.
///
/// Diagnostics never alter the tree; they only describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `name` owns a dependency group that was already attached earlier in the
    /// expansion (repeat or cycle). This occurrence is rendered as a leaf.
    Revisited { name: String },
    /// The dependency group of `name` was never reached from the root.
    Unreachable { name: String, children: Vec<String> },
}

impl Diagnostic {
    pub fn name(&self) -> &str {
        match self {
            Diagnostic::Revisited { name } | Diagnostic::Unreachable { name, .. } => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Revisited { name } => {
                write!(f, "'{}' expanded earlier, shown as leaf", name)
            }
            Diagnostic::Unreachable { name, children } => write!(
                f,
                "'{}' not reachable from root, dropped: {}",
                name,
                children.join(", ")
            ),
        }
    }
}
