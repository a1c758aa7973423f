//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent defects in the question data.
///
/// Traversal, undo and metrics never fail; the only thing that can go wrong
/// in the domain is loading a tree whose nodes break the leaf invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `path` is the y/n branch string leading to the node from the root.
    #[error("malformed node at '{path}': {reason}")]
    MalformedNode { path: String, reason: String },

    #[error("question text must not be empty at '{0}'")]
    EmptyQuestion(String),
}

impl DomainError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            path: display_path(path),
            reason: reason.into(),
        }
    }
}

/// Root is shown as `<root>` rather than an empty string.
pub(crate) fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
