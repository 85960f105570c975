//! Tree renderer: `tree`-command style text lines.
//!
//! Each node emits `<prefix><connector><name>`. The prefix grows by one
//! indent segment per level, chosen by the parent's position, so a vertical
//! bar only continues where a later sibling subtree still follows.

use std::io::{self, Write};

use generational_arena::Index;
use itertools::Itertools;

use crate::domain::arena::TreeArena;
use crate::domain::entities::Position;

impl From<itertools::Position> for Position {
    fn from(position: itertools::Position) -> Self {
        match position {
            itertools::Position::Last | itertools::Position::Only => Position::Tail,
            itertools::Position::First | itertools::Position::Middle => Position::Body,
        }
    }
}

/// Pre-order iterator over rendered lines (without line terminators).
pub struct Lines<'a> {
    tree: &'a TreeArena,
    stack: Vec<(Index, Position, String)>,
}

impl<'a> Lines<'a> {
    pub fn new(tree: &'a TreeArena) -> Self {
        let stack = tree
            .root()
            .map(|root| vec![(root, Position::Head, String::new())])
            .unwrap_or_default();
        Self { tree, stack }
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, position, prefix)) = self.stack.pop() {
            let Some(node) = self.tree.get_node(idx) else {
                continue;
            };
            let line = format!("{}{}{}", prefix, position, node.data);

            if !node.children.is_empty() {
                let child_prefix = format!("{}{}", prefix, position.indent());
                let children: Vec<_> = node.children.iter().with_position().collect();
                // Reverse so the first child pops next
                for (child_position, &child) in children.into_iter().rev() {
                    self.stack
                        .push((child, child_position.into(), child_prefix.clone()));
                }
            }

            return Some(line);
        }
        None
    }
}

/// Renders `tree` into lines; an absent tree renders nothing.
pub fn render(tree: Option<&TreeArena>) -> Vec<String> {
    tree.map(|tree| Lines::new(tree).collect())
        .unwrap_or_default()
}

/// Writes every rendered line to `out`, each terminated by `\n`.
pub fn write_tree<W: Write>(out: &mut W, tree: Option<&TreeArena>) -> io::Result<()> {
    if let Some(tree) = tree {
        for line in Lines::new(tree) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
