//! Store-assigned integer identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A player identifier assigned by the results store on registration.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Create a new PlayerId from a raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id that follows this one in a store sequence.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_next() {
        let id = PlayerId::new(7);
        assert_eq!(id.next(), PlayerId::new(8));
    }

    #[test]
    fn test_player_id_serializes_as_integer() {
        let json = serde_json::to_string(&PlayerId::new(42)).unwrap();
        assert_eq!(json, "42");

        let parsed: PlayerId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, PlayerId::new(42));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(3)), "3");
    }

    #[test]
    fn test_player_id_debug() {
        let debug_str = format!("{:?}", PlayerId::new(3));
        assert_eq!(debug_str, "PlayerId(3)");
    }

    #[test]
    fn test_player_id_from_str() {
        assert_eq!(" 12 ".parse::<PlayerId>().unwrap(), PlayerId::new(12));
        assert!("abc".parse::<PlayerId>().is_err());
        assert!("-1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_ordering() {
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }
}
