//! LIFO record of previously current nodes.

use tracing::trace;

use crate::domain::tree::NodeId;

/// One entry is pushed per applied answer and popped per undo, so the depth
/// of the stack always equals the number of answers currently applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoStack {
    entries: Vec<NodeId>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `node` as the position to return to; call right before
    /// moving away from it.
    pub fn record_before_advance(&mut self, node: NodeId) {
        trace!("push {:?} (depth {})", node, self.entries.len() + 1);
        self.entries.push(node);
    }

    /// Most recently recorded node, `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.entries.last().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Index;

    #[test]
    fn given_empty_stack_when_popping_then_returns_none() {
        let mut stack = UndoStack::new();
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn given_pushed_nodes_when_popping_then_lifo_order() {
        let mut stack = UndoStack::new();
        let a = Index::from_raw_parts(0, 0);
        let b = Index::from_raw_parts(1, 0);
        stack.record_before_advance(a);
        stack.record_before_advance(b);

        assert_eq!(stack.peek(), Some(b));
        assert_eq!(stack.pop(), Some(b));
        assert_eq!(stack.pop(), Some(a));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn given_entries_when_clearing_then_empty() {
        let mut stack = UndoStack::new();
        stack.record_before_advance(Index::from_raw_parts(3, 0));
        stack.clear();
        assert_eq!(stack.len(), 0);
    }
}
