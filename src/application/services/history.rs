//! Session history service
//!
//! Keeps the most recent finished walks in a bounded FIFO and persists them
//! as TOML. When the cap is exceeded the oldest session is evicted.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::genre::{self, GenreId};
use crate::domain::SessionRecord;
use crate::infrastructure::traits::FileSystem;

/// On-disk layout of the history file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

/// How often a genre appears across stored sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCount {
    pub genre: GenreId,
    pub name: String,
    pub count: usize,
}

/// Aggregate figures over the stored sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_sessions: usize,
    pub average_depth: f64,
    pub average_visited_nodes: f64,
    /// Top five genres, most frequent first
    pub most_used_genres: Vec<GenreCount>,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    export_date: DateTime<Utc>,
    session_count: usize,
    statistics: HistoryStats,
    sessions: Vec<&'a SessionRecord>,
}

/// Service for recording and querying past recommendation sessions.
pub struct HistoryService {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    max_sessions: usize,
    sessions: VecDeque<SessionRecord>,
}

impl HistoryService {
    /// Open the history stored at `path`.
    ///
    /// A missing file yields an empty history. A file that cannot be parsed is
    /// logged and treated as empty; it is overwritten on the next write.
    #[instrument(level = "debug", skip(fs))]
    pub fn load(
        fs: Arc<dyn FileSystem>,
        path: PathBuf,
        max_sessions: usize,
    ) -> ApplicationResult<Self> {
        let mut service = Self {
            fs,
            path,
            max_sessions: max_sessions.max(1),
            sessions: VecDeque::new(),
        };

        if !service.fs.exists(&service.path) {
            debug!("no history file at {}", service.path.display());
            return Ok(service);
        }

        let content = service
            .fs
            .read_to_string(&service.path)
            .with_path_context("read history", &service.path)?;

        match toml::from_str::<HistoryFile>(&content) {
            Ok(file) => {
                for record in file.sessions {
                    service.enqueue(record);
                }
            }
            Err(e) => warn!(
                "ignoring unreadable history file {}: {}",
                service.path.display(),
                e
            ),
        }

        debug!("loaded {} sessions", service.sessions.len());
        Ok(service)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Append a session, evicting the oldest beyond the cap, and persist.
    #[instrument(level = "debug", skip(self, record), fields(id = %record.id))]
    pub fn record(&mut self, record: SessionRecord) -> ApplicationResult<()> {
        self.enqueue(record);
        self.persist()
    }

    fn enqueue(&mut self, record: SessionRecord) {
        self.sessions.push_back(record);
        while self.sessions.len() > self.max_sessions {
            if let Some(evicted) = self.sessions.pop_front() {
                debug!("evicted session {}", evicted.id);
            }
        }
    }

    /// Stored sessions, oldest first.
    pub fn sessions(&self) -> impl Iterator<Item = &SessionRecord> {
        self.sessions.iter()
    }

    /// Newest stored session.
    pub fn most_recent(&self) -> Option<&SessionRecord> {
        self.sessions.back()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Remove one session by its id.
    pub fn remove(&mut self, id: &str) -> ApplicationResult<SessionRecord> {
        let wanted = Uuid::parse_str(id)
            .map_err(|_| ApplicationError::SessionNotFound(id.to_string()))?;
        let pos = self
            .sessions
            .iter()
            .position(|s| s.id == wanted)
            .ok_or_else(|| ApplicationError::SessionNotFound(id.to_string()))?;

        let removed = self
            .sessions
            .remove(pos)
            .ok_or_else(|| ApplicationError::SessionNotFound(id.to_string()))?;
        self.persist()?;
        Ok(removed)
    }

    /// Drop every session and delete the history file.
    pub fn clear(&mut self) -> ApplicationResult<()> {
        self.sessions.clear();
        if self.fs.exists(&self.path) {
            self.fs
                .remove_file(&self.path)
                .with_path_context("remove history", &self.path)?;
        }
        Ok(())
    }

    pub fn by_genre(&self, genre: GenreId) -> Vec<&SessionRecord> {
        self.sessions.iter().filter(|s| s.has_genre(genre)).collect()
    }

    pub fn statistics(&self) -> HistoryStats {
        let most_used_genres = self
            .sessions
            .iter()
            .flat_map(|s| s.genres.iter().copied())
            .counts()
            .into_iter()
            .sorted_by(|(ga, ca), (gb, cb)| cb.cmp(ca).then(ga.cmp(gb)))
            .take(5)
            .map(|(genre, count)| GenreCount {
                genre,
                name: genre::label(genre).to_string(),
                count,
            })
            .collect();

        HistoryStats {
            total_sessions: self.sessions.len(),
            average_depth: self.average(|s| s.depth),
            average_visited_nodes: self.average(|s| s.visited_nodes),
            most_used_genres,
        }
    }

    fn average(&self, field: impl Fn(&SessionRecord) -> usize) -> f64 {
        if self.sessions.is_empty() {
            return 0.0;
        }
        self.sessions.iter().map(field).sum::<usize>() as f64 / self.sessions.len() as f64
    }

    /// Whole history plus statistics as a TOML document.
    pub fn export(&self) -> ApplicationResult<String> {
        let doc = ExportDocument {
            export_date: Utc::now(),
            session_count: self.sessions.len(),
            statistics: self.statistics(),
            sessions: self.sessions.iter().collect(),
        };
        toml::to_string_pretty(&doc).map_err(|e| self.history_err(e))
    }

    fn persist(&self) -> ApplicationResult<()> {
        let file = HistoryFile {
            sessions: self.sessions.iter().cloned().collect(),
        };
        let content = toml::to_string_pretty(&file).map_err(|e| self.history_err(e))?;

        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create history directory", &self.path)?;
        self.fs
            .write(&self.path, &content)
            .with_path_context("write history", &self.path)
    }

    fn history_err(&self, e: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::History {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}
