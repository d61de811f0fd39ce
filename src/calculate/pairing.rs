//! Swiss pairing generation.

use thiserror::Error;

use crate::models::{Pairing, StandingEntry};

/// Errors that can occur while pairing a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("Cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
}

/// Pair players for the next round from ranked standings.
///
/// Rank 1 plays rank 2, rank 3 plays rank 4, and so on. The returned list
/// follows standings order. Byes are not supported, so an odd player count
/// is rejected.
pub fn swiss_pairings(standings: &[StandingEntry]) -> Result<Vec<Pairing>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::OddPlayerCount(standings.len()));
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect())
}
