//! Derived standings entry.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player's win record, derived from the recorded matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,

    /// Matches this player won
    pub wins: u32,

    /// Matches this player appeared in, as winner or loser
    pub matches_played: u32,
}

impl StandingEntry {
    /// Create an entry with an empty record.
    pub fn new(player_id: PlayerId, name: String) -> Self {
        Self {
            player_id,
            name,
            wins: 0,
            matches_played: 0,
        }
    }

    /// Matches lost.
    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }

    /// Win rate as a fraction (0.0 to 1.0).
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.matches_played as f64
        }
    }
}
