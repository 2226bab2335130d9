//! Holder for the latest board snapshot.

use std::sync::{Arc, RwLock};

use crate::client::{BoardClient, FetchError};
use crate::models::Snapshot;

/// Where the board data currently stands.
#[derive(Debug, Clone, Default)]
pub enum BoardState {
    /// The first fetch has not finished yet.
    #[default]
    Loading,
    Ready(Arc<Snapshot>),
    /// The last fetch failed with this message.
    Failed(String),
}

/// Shared handle to the current [`BoardState`].
///
/// Snapshots are swapped whole: readers clone the `Arc` out and keep a
/// complete snapshot even if a newer one lands while they are working.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    state: Arc<RwLock<BoardState>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        store.replace(snapshot);
        store
    }

    pub fn state(&self) -> BoardState {
        self.state.read().expect("snapshot lock poisoned").clone()
    }

    /// The current snapshot, if one has been loaded.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        match self.state() {
            BoardState::Ready(snapshot) => Some(snapshot),
            BoardState::Loading | BoardState::Failed(_) => None,
        }
    }

    /// Install `snapshot` as the current one, returning the shared handle.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.state.write().expect("snapshot lock poisoned") = BoardState::Ready(snapshot.clone());
        snapshot
    }

    pub fn fail(&self, message: impl Into<String>) {
        *self.state.write().expect("snapshot lock poisoned") = BoardState::Failed(message.into());
    }

    /// Record a fetch failure unless a snapshot is already loaded.
    ///
    /// A loaded snapshot is only ever superseded by a newer one, so a failed
    /// refresh leaves the board as it was.
    pub fn fail_unless_ready(&self, message: impl Into<String>) {
        let mut state = self.state.write().expect("snapshot lock poisoned");
        if !matches!(*state, BoardState::Ready(_)) {
            *state = BoardState::Failed(message.into());
        }
    }

    /// Fetch once and record the outcome. No retry on failure.
    pub async fn load(&self, client: &BoardClient) -> Result<Arc<Snapshot>, FetchError> {
        match client.fetch_snapshot().await {
            Ok(snapshot) => Ok(self.replace(snapshot)),
            Err(e) => {
                tracing::error!(url = %client.url(), "{}", e);
                self.fail_unless_ready(e.to_string());
                Err(e)
            }
        }
    }
}
