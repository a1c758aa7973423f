use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::catalog::{NodeSpec, CATALOG};
use crate::domain::error::{display_path, DomainError, DomainResult};
use crate::domain::genre::GenreId;

/// Stable handle of a node inside its [`QuestionTree`].
pub type NodeId = Index;

/// One node of the decision tree.
///
/// Internal nodes carry a question and up to two branches; leaves carry the
/// ordered genre tags and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionNode {
    /// Question text, `None` for leaves
    pub question: Option<String>,
    /// Branch taken on a "yes" answer
    pub yes: Option<NodeId>,
    /// Branch taken on a "no" answer
    pub no: Option<NodeId>,
    /// Genre tags, present only on leaves
    pub tags: Option<Vec<GenreId>>,
}

impl QuestionNode {
    pub fn is_leaf(&self) -> bool {
        self.question.is_none()
    }

    /// Branch selected by `answer`.
    pub fn branch(&self, answer: bool) -> Option<NodeId> {
        if answer {
            self.yes
        } else {
            self.no
        }
    }

    /// Tags of a leaf; internal nodes yield an empty slice.
    pub fn tag_slice(&self) -> &[GenreId] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

impl fmt::Display for QuestionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.question {
            Some(q) => write!(f, "{}", q),
            None => write!(f, "{:?}", self.tag_slice()),
        }
    }
}

/// Immutable arena-backed binary question tree.
///
/// Built once from a [`NodeSpec`] literal and never mutated afterwards, so a
/// shared reference can be handed to any number of sessions.
#[derive(Debug)]
pub struct QuestionTree {
    arena: Arena<QuestionNode>,
    root: NodeId,
}

impl QuestionTree {
    /// Load the shipped movie questionnaire.
    pub fn catalog() -> DomainResult<Self> {
        Self::from_spec(&CATALOG)
    }

    /// Copy a static tree description into the arena, validating every node.
    ///
    /// Uses an explicit work stack so that load depth is bounded by heap, not
    /// by the call stack.
    #[instrument(level = "debug", skip(spec))]
    pub fn from_spec(spec: &NodeSpec) -> DomainResult<Self> {
        let mut arena = Arena::new();
        let root = arena.insert(Self::blank());

        // (spec, arena slot to fill, y/n path from root)
        let mut stack: Vec<(&NodeSpec, NodeId, String)> = vec![(spec, root, String::new())];

        while let Some((spec, idx, path)) = stack.pop() {
            Self::validate(spec, &path)?;

            let mut node = QuestionNode {
                question: spec.question.map(str::to_string),
                yes: None,
                no: None,
                tags: spec.tags.map(<[GenreId]>::to_vec),
            };

            if let Some(no) = spec.no {
                let child = arena.insert(Self::blank());
                node.no = Some(child);
                stack.push((no, child, format!("{path}n")));
            }
            if let Some(yes) = spec.yes {
                let child = arena.insert(Self::blank());
                node.yes = Some(child);
                stack.push((yes, child, format!("{path}y")));
            }

            if let Some(slot) = arena.get_mut(idx) {
                *slot = node;
            }
        }

        debug!("loaded question tree with {} nodes", arena.len());
        Ok(Self { arena, root })
    }

    fn blank() -> QuestionNode {
        QuestionNode {
            question: None,
            yes: None,
            no: None,
            tags: None,
        }
    }

    fn validate(spec: &NodeSpec, path: &str) -> DomainResult<()> {
        let has_children = spec.yes.is_some() || spec.no.is_some();
        let has_tags = spec.tags.is_some_and(|t| !t.is_empty());

        match spec.question {
            Some(q) if q.trim().is_empty() => {
                Err(DomainError::EmptyQuestion(display_path(path)))
            }
            Some(_) if spec.tags.is_some() => {
                Err(DomainError::malformed(path, "question node must not carry tags"))
            }
            Some(_) if !has_children => {
                Err(DomainError::malformed(path, "question node has no branches"))
            }
            None if has_children => {
                Err(DomainError::malformed(path, "leaf must not have branches"))
            }
            None if !has_tags => Err(DomainError::malformed(path, "leaf has no genre tags")),
            _ => Ok(()),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &QuestionNode {
        &self.arena[self.root]
    }

    pub fn node(&self, idx: NodeId) -> Option<&QuestionNode> {
        self.arena.get(idx)
    }

    /// Child of `idx` on the `answer` branch, `None` if the branch is absent.
    pub fn child(&self, idx: NodeId, answer: bool) -> Option<NodeId> {
        self.node(idx).and_then(|n| n.branch(answer))
    }

    /// Number of nodes held by the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Dense position of a node, usable as an index into `Vec<bool>` bitmaps
    /// of length [`QuestionTree::capacity`].
    pub fn slot(&self, idx: NodeId) -> usize {
        idx.into_raw_parts().0
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Pre-order (yes before no) depth-first iteration from the root.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Breadth-first iteration from the root; every node is yielded once.
    pub fn iter_breadth_first(&self) -> BreadthFirstIter<'_> {
        BreadthFirstIter::new(self)
    }
}

pub struct PreOrderIter<'a> {
    tree: &'a QuestionTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (NodeId, &'a QuestionNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(idx) {
                // no pushed first so yes comes out first
                self.stack.extend(node.no);
                self.stack.extend(node.yes);
                return Some((idx, node));
            }
        }
        None
    }
}

/// Queue-based level-order walk guarded by a slot-indexed visited bitmap.
pub struct BreadthFirstIter<'a> {
    tree: &'a QuestionTree,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'a> BreadthFirstIter<'a> {
    fn new(tree: &'a QuestionTree) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(tree.root());
        Self {
            tree,
            queue,
            visited: vec![false; tree.capacity()],
        }
    }
}

impl<'a> Iterator for BreadthFirstIter<'a> {
    type Item = (NodeId, &'a QuestionNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.queue.pop_front() {
            let slot = self.tree.slot(idx);
            if self.visited.get(slot).copied().unwrap_or(true) {
                continue;
            }
            self.visited[slot] = true;

            if let Some(node) = self.tree.node(idx) {
                self.queue.extend(node.yes);
                self.queue.extend(node.no);
                return Some((idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GAP: NodeSpec = NodeSpec {
        question: Some("Only yes?"),
        yes: Some(&NodeSpec {
            question: None,
            yes: None,
            no: None,
            tags: Some(&[35]),
        }),
        no: None,
        tags: None,
    };

    static BARE_LEAF: NodeSpec = NodeSpec {
        question: None,
        yes: None,
        no: None,
        tags: Some(&[]),
    };

    static TAGGED_QUESTION: NodeSpec = NodeSpec {
        question: Some("Both?"),
        yes: Some(&NodeSpec {
            question: None,
            yes: None,
            no: None,
            tags: Some(&[18]),
        }),
        no: None,
        tags: Some(&[18]),
    };

    #[test]
    fn given_catalog_when_loading_then_root_is_first_question() {
        let tree = QuestionTree::catalog().expect("catalog loads");
        assert_eq!(
            tree.root_node().question.as_deref(),
            Some("Are you in the mood for something energized and exciting?")
        );
        assert!(!tree.root_node().is_leaf());
    }

    #[test]
    fn given_missing_branch_when_loading_then_tree_is_accepted() {
        let tree = QuestionTree::from_spec(&GAP).expect("gap tolerated");
        assert_eq!(tree.len(), 2);
        assert!(tree.child(tree.root(), false).is_none());
        assert!(tree.child(tree.root(), true).is_some());
    }

    #[test]
    fn given_leaf_without_tags_when_loading_then_fails() {
        let err = QuestionTree::from_spec(&BARE_LEAF).unwrap_err();
        assert!(matches!(err, DomainError::MalformedNode { ref path, .. } if path == "<root>"));
    }

    #[test]
    fn given_question_with_tags_when_loading_then_fails() {
        let err = QuestionTree::from_spec(&TAGGED_QUESTION).unwrap_err();
        assert!(err.to_string().contains("must not carry tags"));
    }

    #[test]
    fn given_tree_when_iterating_preorder_then_yes_branch_comes_first() {
        let tree = QuestionTree::catalog().unwrap();
        let mut it = tree.iter();
        let (root, _) = it.next().unwrap();
        let (second, _) = it.next().unwrap();
        assert_eq!(root, tree.root());
        assert_eq!(Some(second), tree.child(root, true));
    }

    #[test]
    fn given_tree_when_iterating_both_orders_then_same_node_count() {
        let tree = QuestionTree::catalog().unwrap();
        assert_eq!(tree.iter().count(), tree.len());
        assert_eq!(tree.iter_breadth_first().count(), tree.len());
    }
}
