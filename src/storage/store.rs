//! Player and match persistence.

use std::fs;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{JsonlReader, JsonlWriter, StorageConfig, StorageError};
use crate::models::{MatchRecord, Player, PlayerId};

/// Persistence for registered players and reported matches.
///
/// Players and matches are only ever appended or cleared in bulk. Player
/// ids come from a sequence owned by the store and are never reused, even
/// after the players are deleted.
pub trait ResultsStore {
    /// Register a player and return the stored record with its new id.
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError>;

    /// Append a match result.
    fn record_match(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchRecord, StorageError>;

    /// Remove every match record, returning how many were removed.
    fn delete_matches(&mut self) -> Result<usize, StorageError>;

    /// Remove every player record, returning how many were removed.
    fn delete_players(&mut self) -> Result<usize, StorageError>;

    fn count_players(&self) -> Result<usize, StorageError>;

    /// All players in registration order.
    fn all_players(&self) -> Result<Vec<Player>, StorageError>;

    /// All matches in the order they were recorded.
    fn all_matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>, StorageError> {
        Ok(self.all_players()?.into_iter().find(|p| p.id == id))
    }

    /// Clear matches, then players.
    fn reset_all(&mut self) -> Result<(), StorageError> {
        self.delete_matches()?;
        self.delete_players()?;
        Ok(())
    }
}

/// On-disk state of the player id sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerSequence {
    next_id: PlayerId,
}

/// File-backed store using JSONL files under the data directory.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    config: StorageConfig,
}

impl JsonlStore {
    /// Open a store rooted at the configured data directory.
    ///
    /// Directories are created lazily on first write.
    pub fn open(config: StorageConfig) -> Result<Self, StorageError> {
        if config.data_dir.exists() && !config.data_dir.is_dir() {
            return Err(StorageError::InvalidPath(format!(
                "{} is not a directory",
                config.data_dir.display()
            )));
        }

        debug!("Opened results store at {:?}", config.data_dir);
        Ok(Self { config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn players_reader(&self) -> JsonlReader<Player> {
        JsonlReader::new(self.config.players_path())
    }

    fn players_writer(&self) -> JsonlWriter<Player> {
        JsonlWriter::new(self.config.players_path())
    }

    fn matches_reader(&self) -> JsonlReader<MatchRecord> {
        JsonlReader::new(self.config.matches_path())
    }

    fn matches_writer(&self) -> JsonlWriter<MatchRecord> {
        JsonlWriter::new(self.config.matches_path())
    }

    /// Next id to hand out. Falls back to one past the highest stored id
    /// when no sequence file has been written yet.
    fn next_player_id(&self) -> Result<PlayerId, StorageError> {
        let path = self.config.player_sequence_path();
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let seq: PlayerSequence = serde_json::from_str(&contents)?;
            return Ok(seq.next_id);
        }

        let next = self
            .all_players()?
            .iter()
            .map(|p| p.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(PlayerId::new(1));
        Ok(next)
    }

    fn save_sequence(&self, next_id: PlayerId) -> Result<(), StorageError> {
        fs::create_dir_all(self.config.state_dir())?;
        let json = serde_json::to_string_pretty(&PlayerSequence { next_id })?;
        fs::write(self.config.player_sequence_path(), json)?;
        Ok(())
    }
}

impl ResultsStore for JsonlStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        let id = self.next_player_id()?;
        self.save_sequence(id.next())?;

        let player = Player::new(id, name);
        self.players_writer().append(&player)?;
        Ok(player)
    }

    fn record_match(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchRecord, StorageError> {
        let record = MatchRecord::new(winner_id, loser_id);
        self.matches_writer().append(&record)?;
        Ok(record)
    }

    fn delete_matches(&mut self) -> Result<usize, StorageError> {
        let reader = self.matches_reader();
        if !reader.exists() {
            return Ok(0);
        }
        let removed = self.all_matches()?.len();
        self.matches_writer().write_all(&[])?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    fn delete_players(&mut self) -> Result<usize, StorageError> {
        let reader = self.players_reader();
        if !reader.exists() {
            return Ok(0);
        }

        // Keep the sequence moving past ids that are about to disappear
        let next = self.next_player_id()?;
        self.save_sequence(next)?;

        let removed = self.all_players()?.len();
        self.players_writer().write_all(&[])?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.all_players()?.len())
    }

    fn all_players(&self) -> Result<Vec<Player>, StorageError> {
        self.players_reader().read_all()
    }

    fn all_matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        self.matches_reader().read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> JsonlStore {
        JsonlStore::open(StorageConfig::new(temp_dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let a = store.register_player("Alice").unwrap();
        let b = store.register_player("Bob").unwrap();

        assert_eq!(a.id, PlayerId::new(1));
        assert_eq!(b.id, PlayerId::new(2));
        assert_eq!(store.count_players().unwrap(), 2);

        let names: Vec<String> = store
            .all_players()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_store_persists_across_handles() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = test_store(&temp_dir);
            let a = store.register_player("Alice").unwrap();
            let b = store.register_player("Bob").unwrap();
            store.record_match(a.id, b.id).unwrap();
        }

        let mut store = test_store(&temp_dir);
        assert_eq!(store.count_players().unwrap(), 2);
        assert_eq!(store.all_matches().unwrap().len(), 1);

        let c = store.register_player("Carol").unwrap();
        assert_eq!(c.id, PlayerId::new(3));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.register_player("Alice").unwrap();
        store.register_player("Bob").unwrap();
        assert_eq!(store.delete_players().unwrap(), 2);
        assert_eq!(store.count_players().unwrap(), 0);

        let c = store.register_player("Carol").unwrap();
        assert_eq!(c.id, PlayerId::new(3));
    }

    #[test]
    fn test_sequence_recovered_without_state_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.register_player("Alice").unwrap();
        store.register_player("Bob").unwrap();
        fs::remove_file(store.config().player_sequence_path()).unwrap();

        let c = store.register_player("Carol").unwrap();
        assert_eq!(c.id, PlayerId::new(3));
    }

    #[test]
    fn test_delete_matches_returns_count() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let a = store.register_player("Alice").unwrap();
        let b = store.register_player("Bob").unwrap();
        store.record_match(a.id, b.id).unwrap();
        store.record_match(b.id, a.id).unwrap();

        assert_eq!(store.delete_matches().unwrap(), 2);
        assert!(store.all_matches().unwrap().is_empty());
        assert_eq!(store.count_players().unwrap(), 2);
    }

    #[test]
    fn test_delete_counts_only_readable_records() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let a = store.register_player("Alice").unwrap();
        let b = store.register_player("Bob").unwrap();
        store.record_match(a.id, b.id).unwrap();

        let config = store.config().clone();
        for path in [config.players_path(), config.matches_path()] {
            let mut contents = fs::read_to_string(&path).unwrap();
            contents.push_str("not-valid-json\n");
            fs::write(&path, contents).unwrap();
        }

        assert_eq!(store.count_players().unwrap(), 2);
        assert_eq!(store.delete_matches().unwrap(), 1);
        assert_eq!(store.delete_players().unwrap(), 2);
        assert_eq!(store.count_players().unwrap(), 0);
    }

    #[test]
    fn test_fresh_store_deletes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        assert_eq!(store.delete_matches().unwrap(), 0);
        assert_eq!(store.delete_players().unwrap(), 0);
        assert_eq!(store.count_players().unwrap(), 0);
    }

    #[test]
    fn test_reset_all() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let a = store.register_player("Alice").unwrap();
        let b = store.register_player("Bob").unwrap();
        store.record_match(a.id, b.id).unwrap();

        store.reset_all().unwrap();
        assert_eq!(store.count_players().unwrap(), 0);
        assert!(store.all_matches().unwrap().is_empty());
    }

    #[test]
    fn test_find_player() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let a = store.register_player("Alice").unwrap();
        assert_eq!(store.find_player(a.id).unwrap().unwrap().name, "Alice");
        assert!(store.find_player(PlayerId::new(99)).unwrap().is_none());
    }

    #[test]
    fn test_open_rejects_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not-a-dir");
        fs::write(&file_path, "x").unwrap();

        let result = JsonlStore::open(StorageConfig::new(file_path));
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }
}
