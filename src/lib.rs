//! # Swiss Tracker
//!
//! Tracks players and match results for a Swiss-system tournament and
//! computes next-round pairings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, standings, pairings)
//! - **storage**: Results store (JSONL files or in-memory)
//! - **calculate**: Standings and pairing engine
//! - **tournament**: Validated tournament operations over a store
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;
pub mod tournament;

pub use models::*;
pub use tournament::{Tournament, TournamentError};
