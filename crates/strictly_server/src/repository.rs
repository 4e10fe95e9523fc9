//! Board storage keyed by game id.

use crate::error::RepositoryError;
use crate::id::GameId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use strictly_board::Board;
use tracing::{debug, info, instrument};

/// Storage for boards in play.
///
/// Implementations must serialize writers per id: [`BoardRepository::update`]
/// runs its whole load, mutate, store cycle without another update to the
/// same id interleaving.
pub trait BoardRepository: Send + Sync {
    /// Loads the board stored under `id`.
    fn get(&self, id: &GameId) -> Result<Option<Board>, RepositoryError>;

    /// Stores `board` under `id`, replacing any previous board.
    fn put(&self, id: GameId, board: Board) -> Result<(), RepositoryError>;

    /// Runs `step` on a working copy of the board under `id`.
    ///
    /// The copy is stored back only when `step` returns `true`. Returns the
    /// working copy either way, or `None` when no board is stored.
    fn update(
        &self,
        id: &GameId,
        step: &mut dyn FnMut(&mut Board) -> bool,
    ) -> Result<Option<Board>, RepositoryError>;

    /// Drops expired boards, returning how many were removed.
    fn purge_expired(&self) -> Result<usize, RepositoryError>;
}

#[derive(Debug, Clone)]
struct Entry {
    board: Board,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory repository whose boards expire a fixed time after their last
/// store.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    entries: Arc<Mutex<HashMap<GameId, Entry>>>,
    ttl: Duration,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[instrument]
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Creating board repository");
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of stored boards, expired ones included until purged.
    #[instrument(skip(self))]
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    /// True when nothing is stored.
    #[instrument(skip(self))]
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameId, Entry>>, RepositoryError> {
        self.entries
            .lock()
            .map_err(|e| RepositoryError::new(format!("Board store lock poisoned: {}", e)))
    }

    /// Deadline of a board stored at `now`.
    fn deadline(&self, now: Instant) -> Result<Instant, RepositoryError> {
        now.checked_add(self.ttl).ok_or_else(|| {
            RepositoryError::new(format!(
                "TTL of {}s overflows the clock",
                self.ttl.as_secs()
            ))
        })
    }

    /// Removes the entry under `id` if it has expired. Returns the live entry.
    fn live<'a>(
        entries: &'a mut HashMap<GameId, Entry>,
        id: &GameId,
        now: Instant,
    ) -> Option<&'a mut Entry> {
        if entries.get(id).is_some_and(|entry| entry.is_expired(now)) {
            debug!(game_id = %id, "Dropping expired board");
            entries.remove(id);
        }
        entries.get_mut(id)
    }
}

impl BoardRepository for MemoryRepository {
    #[instrument(skip(self), fields(game_id = %id))]
    fn get(&self, id: &GameId) -> Result<Option<Board>, RepositoryError> {
        let mut entries = self.lock()?;
        let board = Self::live(&mut entries, id, Instant::now()).map(|entry| entry.board.clone());

        if board.is_none() {
            debug!("Board not found");
        }

        Ok(board)
    }

    #[instrument(skip(self, board), fields(game_id = %id))]
    fn put(&self, id: GameId, board: Board) -> Result<(), RepositoryError> {
        let expires_at = self.deadline(Instant::now())?;
        self.lock()?.insert(id, Entry { board, expires_at });
        debug!("Board stored");
        Ok(())
    }

    #[instrument(skip(self, step), fields(game_id = %id))]
    fn update(
        &self,
        id: &GameId,
        step: &mut dyn FnMut(&mut Board) -> bool,
    ) -> Result<Option<Board>, RepositoryError> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let expires_at = self.deadline(now)?;

        let Some(entry) = Self::live(&mut entries, id, now) else {
            debug!("Board not found");
            return Ok(None);
        };

        let mut working = entry.board.clone();
        if step(&mut working) {
            entry.board = working.clone();
            entry.expires_at = expires_at;
            debug!("Board updated");
        } else {
            debug!("Board left unchanged");
        }

        Ok(Some(working))
    }

    #[instrument(skip(self))]
    fn purge_expired(&self) -> Result<usize, RepositoryError> {
        let mut entries = self.lock()?;
        let now = Instant::now();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - entries.len();
        if removed > 0 {
            info!(removed, remaining = entries.len(), "Expired boards purged");
        }
        Ok(removed)
    }
}
