//! Domain layer: question tree, traversal, undo and metrics
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod error;
pub mod genre;
pub mod history;
pub mod metrics;
pub mod session;
pub mod traversal;
pub mod tree;
pub mod undo;

pub use catalog::{NodeSpec, CATALOG};
pub use error::{DomainError, DomainResult};
pub use genre::GenreId;
pub use history::SessionRecord;
pub use metrics::TreeStats;
pub use session::{Phase, Progress, Session, Step};
pub use traversal::{traverse, DecisionEngine, TraversalResult};
pub use tree::{NodeId, QuestionNode, QuestionTree};
pub use undo::UndoStack;
