//! Incremental question-answering session with undo.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::domain::metrics;
use crate::domain::traversal::{traverse, TraversalResult};
use crate::domain::tree::{NodeId, QuestionNode, QuestionTree};
use crate::domain::undo::UndoStack;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current node still has a question
    Answering,
    /// Current node is a leaf
    Finished,
}

/// Outcome of applying one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to another question
    Advanced,
    /// Moved onto a leaf
    Finished,
    /// Nothing happened: the session is finished or the branch is absent
    Ignored,
}

/// Pull-based progress figures for "question N of M" displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub tree_height: usize,
}

impl Progress {
    /// 1-based number of the question currently shown.
    pub fn question_number(&self) -> usize {
        self.answered + 1
    }

    pub fn percent(&self) -> u8 {
        if self.tree_height == 0 {
            return 0;
        }
        let pct = (self.answered as f64 / self.tree_height as f64 * 100.0).round();
        pct.min(100.0) as u8
    }
}

/// Per-session traversal state.
///
/// Borrows the tree; holds the current position, the question path as
/// slices of the tree's own strings, the applied answers and the undo stack.
#[derive(Debug, Clone)]
pub struct Session<'t> {
    tree: &'t QuestionTree,
    current: NodeId,
    path: Vec<&'t str>,
    answers: Vec<bool>,
    undo: UndoStack,
    started_at: Instant,
    tree_height: usize,
}

impl<'t> Session<'t> {
    pub fn new(tree: &'t QuestionTree) -> Self {
        Self {
            tree,
            current: tree.root(),
            path: Vec::new(),
            answers: Vec::new(),
            undo: UndoStack::new(),
            started_at: Instant::now(),
            tree_height: metrics::height(tree),
        }
    }

    /// Rebuild a session from scratch by applying `answers` in order.
    pub fn replay(tree: &'t QuestionTree, answers: &[bool]) -> Self {
        let mut session = Self::new(tree);
        for &answer in answers {
            if session.answer(answer) == Step::Ignored {
                break;
            }
        }
        session
    }

    /// Apply one answer.
    ///
    /// The current node is pushed onto the undo stack only when the move
    /// actually happens, keeping pushes paired with advances.
    #[instrument(level = "debug", skip(self), fields(depth = self.answers.len()))]
    pub fn answer(&mut self, answer: bool) -> Step {
        let node = self.current_node();
        let Some(question) = node.question.as_deref() else {
            debug!("session already finished");
            return Step::Ignored;
        };
        let Some(next) = node.branch(answer) else {
            debug!("no {} branch under '{}'", answer, question);
            return Step::Ignored;
        };

        self.undo.record_before_advance(self.current);
        self.path.push(question);
        self.answers.push(answer);
        self.current = next;

        match self.phase() {
            Phase::Answering => Step::Advanced,
            Phase::Finished => Step::Finished,
        }
    }

    /// Step back to the node held before the most recent answer.
    ///
    /// Returns `false` and leaves the state untouched when nothing has been
    /// answered yet.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.current = previous;
                self.path.pop();
                self.answers.pop();
                true
            }
            None => false,
        }
    }

    /// Back to the root with an empty history and a new start time.
    pub fn restart(&mut self) {
        self.current = self.tree.root();
        self.path.clear();
        self.answers.clear();
        self.undo.clear();
        self.started_at = Instant::now();
    }

    pub fn phase(&self) -> Phase {
        if self.current_node().is_leaf() {
            Phase::Finished
        } else {
            Phase::Answering
        }
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &'t QuestionNode {
        self.tree
            .node(self.current)
            .unwrap_or_else(|| self.tree.root_node())
    }

    /// Question awaiting an answer, `None` once finished.
    pub fn current_question(&self) -> Option<&'t str> {
        self.current_node().question.as_deref()
    }

    pub fn path(&self) -> &[&'t str] {
        &self.path
    }

    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answers.len(),
            tree_height: self.tree_height,
        }
    }

    /// Wall-clock time since the session started (or was last restarted),
    /// including time spent waiting for answers.
    pub fn session_elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Walk result once a leaf is reached.
    ///
    /// The applied answers are re-walked so that `elapsed` is traversal time
    /// only, comparable with [`traverse`] results.
    pub fn result(&self) -> Option<TraversalResult> {
        if self.phase() != Phase::Finished {
            return None;
        }
        Some(traverse(self.tree, &self.answers))
    }
}
