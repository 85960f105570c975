//! Tree service
//!
//! Parses records, builds the tree, applies the duplicate policy and renders.

use tracing::{debug, instrument};

use crate::application::parser::parse_records;
use crate::application::policy::DuplicatePolicy;
use crate::application::ApplicationResult;
use crate::domain::{render, BuildOutcome, Diagnostic, Edge, TreeBuilder};

/// Rendered tree plus whatever consume-once dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOutput {
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Service for turning edge records into tree diagrams.
#[derive(Debug, Clone)]
pub struct TreeService {
    policy: DuplicatePolicy,
    strict_fields: bool,
}

impl TreeService {
    pub fn new(policy: DuplicatePolicy, strict_fields: bool) -> Self {
        Self {
            policy,
            strict_fields,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Parse raw input into edges.
    pub fn parse(&self, input: &str) -> ApplicationResult<Vec<Edge>> {
        parse_records(input, self.strict_fields)
    }

    /// Build without applying the policy.
    pub fn inspect(&self, edges: &[Edge]) -> BuildOutcome {
        TreeBuilder::new().build(edges)
    }

    /// Build, apply the policy and render.
    #[instrument(level = "debug", skip_all, fields(policy = %self.policy))]
    pub fn render_edges(&self, edges: &[Edge]) -> ApplicationResult<TreeOutput> {
        let outcome = self.inspect(edges);
        self.policy.apply(&outcome.diagnostics)?;

        let lines = render(outcome.tree.as_ref());
        debug!("rendered {} lines", lines.len());
        Ok(TreeOutput {
            lines,
            diagnostics: outcome.diagnostics,
        })
    }

    /// Parse and render raw input.
    pub fn render_input(&self, input: &str) -> ApplicationResult<TreeOutput> {
        let edges = self.parse(input)?;
        self.render_edges(&edges)
    }
}
