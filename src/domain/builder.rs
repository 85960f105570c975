//! Tree builder: reconstructs a rooted tree from a flat edge list.
//!
//! The root is the parent of the first edge. Edges are grouped by parent
//! (child order preserved) and expanded depth-first from the root. A group is
//! claimed, i.e. removed from the cache, the first time its parent is expanded.
//! Later occurrences of the same name become leaves, which also guarantees
//! termination on cyclic input.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::entities::{Diagnostic, Edge};

/// Result of a build: the tree (absent for empty input) and what consume-once
/// dropped along the way.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub tree: Option<TreeArena>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Constructs a tree from `(parent, child)` edges.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    relationship_cache: HashMap<String, Vec<String>>,
    /// Parents in order of first appearance, for deterministic reporting
    parent_order: Vec<String>,
    claimed: HashSet<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip_all, fields(edges = edges.len()))]
    pub fn build(&mut self, edges: &[Edge]) -> BuildOutcome {
        // Reset state for a fresh build
        self.relationship_cache.clear();
        self.parent_order.clear();
        self.claimed.clear();

        let Some(first) = edges.first() else {
            debug!("no edges, tree is absent");
            return BuildOutcome::default();
        };

        self.group_edges(edges);
        let (tree, mut diagnostics) = self.expand(&first.parent);
        diagnostics.extend(self.unreachable());
        debug!(
            "built tree of {} nodes, {} diagnostics",
            tree.len(),
            diagnostics.len()
        );

        BuildOutcome {
            tree: Some(tree),
            diagnostics,
        }
    }

    fn group_edges(&mut self, edges: &[Edge]) {
        for edge in edges {
            match self.relationship_cache.entry(edge.parent.clone()) {
                Entry::Occupied(mut group) => group.get_mut().push(edge.child.clone()),
                Entry::Vacant(slot) => {
                    self.parent_order.push(edge.parent.clone());
                    slot.insert(vec![edge.child.clone()]);
                }
            }
        }
    }

    /// Depth-first expansion with an explicit stack.
    ///
    /// Children are pushed in reverse so they pop in input order; a child's
    /// whole subtree is popped before its next sibling, matching recursive
    /// pre-order, which decides who claims a shared group.
    fn expand(&mut self, root_name: &str) -> (TreeArena, Vec<Diagnostic>) {
        let mut tree = TreeArena::new();
        let mut diagnostics = Vec::new();
        let mut stack: Vec<(String, Option<Index>)> = vec![(root_name.to_string(), None)];

        while let Some((name, parent_idx)) = stack.pop() {
            let group = self.relationship_cache.remove(&name);
            if group.is_none() && self.claimed.contains(&name) {
                trace!("'{}' already expanded, attaching as leaf", name);
                diagnostics.push(Diagnostic::Revisited { name: name.clone() });
            }

            let current_idx = tree.insert_node(NodeData { name: name.clone() }, parent_idx);

            if let Some(children) = group {
                trace!("claimed group of '{}' ({} children)", name, children.len());
                self.claimed.insert(name);
                for child in children.into_iter().rev() {
                    stack.push((child, Some(current_idx)));
                }
            }
        }

        (tree, diagnostics)
    }

    fn unreachable(&mut self) -> Vec<Diagnostic> {
        let cache = &mut self.relationship_cache;
        self.parent_order
            .iter()
            .filter_map(|name| {
                cache.remove(name).map(|children| Diagnostic::Unreachable {
                    name: name.clone(),
                    children,
                })
            })
            .collect()
    }
}

/// Builds the tree for `edges`, discarding diagnostics.
///
/// Returns `None` for empty input.
pub fn build_tree(edges: &[Edge]) -> Option<TreeArena> {
    TreeBuilder::new().build(edges).tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|&pair| Edge::from(pair)).collect()
    }

    #[test]
    fn given_no_edges_when_building_then_tree_is_absent() {
        let outcome = TreeBuilder::new().build(&[]);
        assert!(outcome.tree.is_none());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn given_edges_when_building_then_root_is_first_parent() {
        let tree = build_tree(&edges(&[("b", "c"), ("a", "b")])).unwrap();
        assert_eq!(tree.root_name(), Some("b"));
        // "a" is never reached from "b"
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn given_interleaved_parents_when_building_then_preserves_child_order() {
        let tree = build_tree(&edges(&[("a", "x"), ("b", "q"), ("a", "y"), ("a", "b")])).unwrap();
        assert_eq!(tree.children_of("a"), Some(vec!["x", "y", "b"]));
        assert_eq!(tree.children_of("b"), Some(vec!["q"]));
    }

    #[test]
    fn given_cycle_when_building_then_terminates_with_revisit() {
        let outcome = TreeBuilder::new().build(&edges(&[("a", "b"), ("b", "a")]));
        let tree = outcome.tree.unwrap();
        let names: Vec<_> = tree.iter().map(|(_, n)| n.data.name.clone()).collect();
        assert_eq!(names, ["a", "b", "a"]);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::Revisited { name: "a".into() }]
        );
    }

    #[test]
    fn given_shared_child_when_building_then_first_occurrence_claims_group() {
        // r
        //  ├─ x
        //  │   └─ s
        //  │       └─ leaf
        //  └─ s
        let outcome =
            TreeBuilder::new().build(&edges(&[("r", "x"), ("r", "s"), ("x", "s"), ("s", "leaf")]));
        let tree = outcome.tree.unwrap();
        assert_eq!(tree.children_of("x"), Some(vec!["s"]));
        let names: Vec<_> = tree.iter().map(|(_, n)| n.data.name.as_str()).collect();
        assert_eq!(names, ["r", "x", "s", "leaf", "s"]);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::Revisited { name: "s".into() }]
        );
    }

    #[test]
    fn given_second_root_when_building_then_reports_unreachable_group() {
        let outcome = TreeBuilder::new().build(&edges(&[("a", "b"), ("z", "y"), ("z", "w")]));
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::Unreachable {
                name: "z".into(),
                children: vec!["y".into(), "w".into()],
            }]
        );
    }

    #[test]
    fn given_duplicate_edges_when_building_then_keeps_each_entry() {
        let tree = build_tree(&edges(&[("a", "b"), ("a", "b")])).unwrap();
        assert_eq!(tree.children_of("a"), Some(vec!["b", "b"]));
    }

    #[test]
    fn given_builder_reused_when_building_then_state_is_reset() {
        let mut builder = TreeBuilder::new();
        builder.build(&edges(&[("a", "b"), ("q", "r")]));
        let outcome = builder.build(&edges(&[("x", "y")]));
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.tree.unwrap().len(), 2);
    }
}
