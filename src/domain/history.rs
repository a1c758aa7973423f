//! Shape of a finished walk as handed to the session history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::genre::GenreId;
use crate::domain::metrics::TreeStats;
use crate::domain::traversal::TraversalResult;

/// One persisted recommendation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub genres: Vec<GenreId>,
    pub visited_nodes: usize,
    pub depth: usize,
    pub traversal_time_ms: f64,
    pub tree_height: usize,
    pub balanced_depth: usize,
    pub total_nodes: usize,
}

impl SessionRecord {
    /// Package a walk result together with the figures of the tree it ran on.
    pub fn new(result: &TraversalResult, stats: &TreeStats) -> Self {
        Self::at(result, stats, Utc::now())
    }

    pub fn at(result: &TraversalResult, stats: &TreeStats, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            genres: result.tags.clone(),
            visited_nodes: result.visited_nodes,
            depth: result.depth,
            traversal_time_ms: result.elapsed_ms(),
            tree_height: stats.height,
            balanced_depth: stats.balanced_depth,
            total_nodes: stats.total_nodes,
        }
    }

    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genres.contains(&genre)
    }
}
