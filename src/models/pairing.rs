//! Pairing model: two players matched for the next round.

use serde::{Deserialize, Serialize};

use super::{PlayerId, StandingEntry};

/// Two players drawn together for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    /// Pair two standings entries, the higher-ranked one first.
    pub fn from_standings(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            player1_id: first.player_id,
            player1_name: first.name.clone(),
            player2_id: second.player_id,
            player2_name: second.name.clone(),
        }
    }
}
