//! Answer-driven depth-first walk over the question tree.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::genre::GenreId;
use crate::domain::metrics::TreeStats;
use crate::domain::session::Session;
use crate::domain::tree::QuestionTree;

/// Immutable snapshot of one completed walk.
#[derive(Debug, Clone)]
pub struct TraversalResult {
    /// Tags of the node the walk stopped on, empty if it is not a leaf
    pub tags: Vec<GenreId>,
    /// Question texts in the order they were answered
    pub path: Vec<String>,
    pub visited_nodes: usize,
    pub depth: usize,
    /// Wall-clock time spent producing the result
    pub elapsed: Duration,
}

impl TraversalResult {
    pub fn reached_leaf(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Timing is excluded: two walks over the same answers are equal even though
/// they took different amounts of time.
impl PartialEq for TraversalResult {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
            && self.path == other.path
            && self.visited_nodes == other.visited_nodes
            && self.depth == other.depth
    }
}

impl Eq for TraversalResult {}

/// Walk `tree` from the root, one level per answer.
///
/// Stops when a leaf is reached, when answers run out, or when the selected
/// branch is absent; the question whose branch is missing is still counted.
/// Excess answers are ignored.
#[instrument(level = "debug", skip(tree))]
pub fn traverse(tree: &QuestionTree, answers: &[bool]) -> TraversalResult {
    let started = Instant::now();
    let mut path = Vec::new();
    let mut visited_nodes = 0;
    let mut depth = 0;
    let mut current = tree.root_node();

    for &answer in answers {
        let Some(question) = current.question.as_deref() else {
            break;
        };
        path.push(question.to_string());
        visited_nodes += 1;
        depth += 1;

        match current.branch(answer).and_then(|idx| tree.node(idx)) {
            Some(next) => current = next,
            None => {
                debug!("branch {} missing after '{}'", answer, question);
                break;
            }
        }
    }

    TraversalResult {
        tags: current.tag_slice().to_vec(),
        path,
        visited_nodes,
        depth,
        elapsed: started.elapsed(),
    }
}

/// Owns one question tree and hands out walks and sessions over it.
#[derive(Debug)]
pub struct DecisionEngine {
    tree: QuestionTree,
}

impl DecisionEngine {
    /// Engine over the shipped movie questionnaire.
    pub fn new() -> DomainResult<Self> {
        Ok(Self::with_tree(QuestionTree::catalog()?))
    }

    pub fn with_tree(tree: QuestionTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &QuestionTree {
        &self.tree
    }

    pub fn traverse(&self, answers: &[bool]) -> TraversalResult {
        traverse(&self.tree, answers)
    }

    /// Fresh interactive session positioned at the root.
    pub fn start_session(&self) -> Session<'_> {
        Session::new(&self.tree)
    }

    /// Session rebuilt by applying `answers` one by one.
    pub fn replay(&self, answers: &[bool]) -> Session<'_> {
        Session::replay(&self.tree, answers)
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::of(&self.tree)
    }
}
