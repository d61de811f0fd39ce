//! In-memory results store.

use super::{ResultsStore, StorageError};
use crate::models::{MatchRecord, Player, PlayerId};

/// Volatile store for embedding and tests. Follows the same id policy as
/// the file store: ids keep increasing across deletes.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: PlayerId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_id: PlayerId::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsStore for MemoryStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        let player = Player::new(self.next_id, name);
        self.next_id = self.next_id.next();
        self.players.push(player.clone());
        Ok(player)
    }

    fn record_match(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchRecord, StorageError> {
        let record = MatchRecord::new(winner_id, loser_id);
        self.matches.push(record.clone());
        Ok(record)
    }

    fn delete_matches(&mut self) -> Result<usize, StorageError> {
        Ok(self.matches.drain(..).count())
    }

    fn delete_players(&mut self) -> Result<usize, StorageError> {
        Ok(self.players.drain(..).count())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.players.len())
    }

    fn all_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.players.clone())
    }

    fn all_matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.clone())
    }
}
