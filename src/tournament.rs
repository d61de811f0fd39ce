//! Tournament operations over a results store.
//!
//! Validates incoming registrations and match reports, then delegates to
//! the store for persistence and to [`crate::calculate`] for standings and
//! pairings.

use thiserror::Error;
use tracing::{info, warn};

use crate::calculate::{compute_standings, swiss_pairings, PairingError};
use crate::config::TournamentConfig;
use crate::models::{MatchRecord, Pairing, Player, PlayerId, StandingEntry};
use crate::storage::{ResultsStore, StorageError};

/// Errors returned by tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}

impl From<PairingError> for TournamentError {
    fn from(err: PairingError) -> Self {
        match err {
            PairingError::OddPlayerCount(n) => TournamentError::OddPlayerCount(n),
        }
    }
}

/// A Swiss tournament backed by a results store.
pub struct Tournament<S> {
    store: S,
    config: TournamentConfig,
}

impl<S: ResultsStore> Tournament<S> {
    pub fn new(store: S, config: TournamentConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Remove all match records.
    pub fn delete_matches(&mut self) -> Result<(), TournamentError> {
        let removed = self.store.delete_matches()?;
        info!("Cleared {} match records", removed);
        Ok(())
    }

    /// Remove all player records, returning how many were removed.
    ///
    /// Fails while matches still reference players; clear matches first.
    pub fn delete_players(&mut self) -> Result<usize, TournamentError> {
        let remaining = self.store.all_matches()?.len();
        if remaining > 0 {
            warn!("Refusing to delete players: {} matches remain", remaining);
            return Err(TournamentError::ReferentialIntegrity(format!(
                "{} recorded matches still reference players",
                remaining
            )));
        }

        let removed = self.store.delete_players()?;
        info!("Cleared {} players", removed);
        Ok(removed)
    }

    /// Clear matches and players.
    pub fn reset(&mut self) -> Result<(), TournamentError> {
        self.store.reset_all()?;
        info!("Tournament reset");
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.store.count_players()?)
    }

    /// Register a player. Names are trimmed and must be non-empty.
    pub fn register_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::Validation(
                "Player name must not be empty".to_string(),
            ));
        }

        let len = trimmed.chars().count();
        if len > self.config.max_name_length {
            return Err(TournamentError::Validation(format!(
                "Player name is {} characters, maximum is {}",
                len, self.config.max_name_length
            )));
        }

        let player = self.store.register_player(trimmed)?;
        info!("Registered player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Record the outcome of a single match.
    pub fn report_match(
        &mut self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchRecord, TournamentError> {
        if winner_id == loser_id {
            return Err(TournamentError::Validation(format!(
                "Player {} cannot play against themselves",
                winner_id
            )));
        }

        for id in [winner_id, loser_id] {
            if self.store.find_player(id)?.is_none() {
                warn!("Rejected match report: unknown player {}", id);
                return Err(TournamentError::ReferentialIntegrity(format!(
                    "No registered player with id {}",
                    id
                )));
            }
        }

        let record = self.store.record_match(winner_id, loser_id)?;
        info!("Recorded match: {} beat {}", winner_id, loser_id);
        Ok(record)
    }

    /// Current standings, ranked by wins.
    pub fn player_standings(&self) -> Result<Vec<StandingEntry>, TournamentError> {
        let players = self.store.all_players()?;
        let matches = self.store.all_matches()?;
        Ok(compute_standings(&players, &matches))
    }

    /// Pairings for the next round, from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.player_standings()?;
        Ok(swiss_pairings(&standings)?)
    }

    pub fn players(&self) -> Result<Vec<Player>, TournamentError> {
        Ok(self.store.all_players()?)
    }

    pub fn matches(&self) -> Result<Vec<MatchRecord>, TournamentError> {
        Ok(self.store.all_matches()?)
    }
}
