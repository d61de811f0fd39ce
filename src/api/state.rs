use std::sync::Arc;

use tokio::sync::Mutex;

use crate::storage::JsonlStore;
use crate::tournament::Tournament;

/// Shared server state. The mutex serializes every request against the
/// store, so reads always see a consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    pub tournament: Arc<Mutex<Tournament<JsonlStore>>>,
}

impl AppState {
    pub fn new(tournament: Tournament<JsonlStore>) -> Self {
        Self {
            tournament: Arc::new(Mutex::new(tournament)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TournamentConfig;
    use crate::storage::StorageConfig;

    #[test]
    fn test_cloned_state_shares_tournament() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(StorageConfig::new(tmp.path().to_path_buf())).unwrap();
        let state = AppState::new(Tournament::new(store, TournamentConfig::default()));
        let other = state.clone();

        tokio_test::block_on(async {
            state
                .tournament
                .lock()
                .await
                .register_player("Alice")
                .unwrap();
            assert_eq!(other.tournament.lock().await.count_players().unwrap(), 1);
        });
    }
}
