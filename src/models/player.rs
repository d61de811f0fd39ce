//! Registered tournament player.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player registered in the tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Store-assigned identifier
    pub id: PlayerId,

    /// Display name (not required to be unique)
    pub name: String,

    /// When the player was registered
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player. The name is stored trimmed.
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId::new(1), "Twilight Sparkle");
        assert_eq!(player.id, PlayerId::new(1));
        assert_eq!(player.name, "Twilight Sparkle");
    }

    #[test]
    fn test_player_name_trimmed() {
        let player = Player::new(PlayerId::new(1), "  Bruno Walton \n");
        assert_eq!(player.name, "Bruno Walton");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(5), "Boots O'Neal");
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"id\":5"));

        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
