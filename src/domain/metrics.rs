//! Whole-tree statistics, independent of any particular walk.

use tracing::instrument;

use crate::domain::tree::{NodeId, QuestionTree};

/// Levels on the longest root-to-leaf path; a lone leaf has height 1.
pub fn height(tree: &QuestionTree) -> usize {
    subtree_height(tree, Some(tree.root()))
}

fn subtree_height(tree: &QuestionTree, idx: Option<NodeId>) -> usize {
    match idx.and_then(|i| tree.node(i)) {
        Some(node) => 1 + subtree_height(tree, node.yes).max(subtree_height(tree, node.no)),
        None => 0,
    }
}

/// Count of every node reachable from the root.
pub fn total_nodes(tree: &QuestionTree) -> usize {
    count_from(tree, Some(tree.root()))
}

fn count_from(tree: &QuestionTree, idx: Option<NodeId>) -> usize {
    match idx.and_then(|i| tree.node(i)) {
        Some(node) => 1 + count_from(tree, node.yes) + count_from(tree, node.no),
        None => 0,
    }
}

pub fn leaf_count(tree: &QuestionTree) -> usize {
    tree.iter().filter(|(_, n)| n.is_leaf()).count()
}

/// `ceil(log2(total_nodes + 1))`: depth a perfectly balanced binary tree with
/// the same node count would need. Informational only.
///
/// Computed as the bit length of the node count, which is the same value
/// without going through floating point.
pub fn theoretical_balanced_depth(tree: &QuestionTree) -> usize {
    balanced_depth_for(total_nodes(tree))
}

pub fn balanced_depth_for(node_count: usize) -> usize {
    (usize::BITS - node_count.leading_zeros()) as usize
}

/// Every question text in breadth-first order, yes branch before no branch.
///
/// Recomputed on each call.
#[instrument(level = "debug", skip(tree))]
pub fn all_questions(tree: &QuestionTree) -> Vec<&str> {
    tree.iter_breadth_first()
        .filter_map(|(_, node)| node.question.as_deref())
        .collect()
}

/// Summary figures shown next to a finished walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub height: usize,
    pub total_nodes: usize,
    pub leaf_count: usize,
    pub balanced_depth: usize,
}

impl TreeStats {
    #[instrument(level = "debug", skip(tree))]
    pub fn of(tree: &QuestionTree) -> Self {
        let total_nodes = total_nodes(tree);
        Self {
            height: height(tree),
            total_nodes,
            leaf_count: leaf_count(tree),
            balanced_depth: balanced_depth_for(total_nodes),
        }
    }

    pub fn question_count(&self) -> usize {
        self.total_nodes - self.leaf_count
    }

    /// Depth reached by a walk as a percentage of the tree height.
    pub fn efficiency_percent(&self, depth: usize) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        depth as f64 / self.height as f64 * 100.0
    }
}
