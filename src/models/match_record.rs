//! Recorded match outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// The outcome of a single match between two players.
///
/// Records are append-only. Draws are not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,

    /// When the result was reported
    pub recorded_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
            recorded_at: Utc::now(),
        }
    }
}
