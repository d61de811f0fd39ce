//! Results store.
//!
//! Durable player and match records live in the local data directory:
//! - Normalized JSONL files (players, matches)
//! - State files (player id sequence)

mod jsonl;
mod memory;
mod store;

pub use jsonl::*;
pub use memory::*;
pub use store::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn normalized_dir(&self) -> PathBuf {
        self.data_dir.join("normalized")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    pub fn players_path(&self) -> PathBuf {
        self.normalized_dir().join(EntityType::Player.filename())
    }

    pub fn matches_path(&self) -> PathBuf {
        self.normalized_dir().join(EntityType::Match.filename())
    }

    pub fn player_sequence_path(&self) -> PathBuf {
        self.state_dir().join("player_seq.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
