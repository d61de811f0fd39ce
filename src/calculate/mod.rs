//! Standings and pairing engine.
//!
//! Pure functions over the recorded players and matches:
//! - Win/loss standings ranked by wins
//! - Adjacent-rank Swiss pairings for the next round

mod pairing;
mod standings;

pub use pairing::*;
pub use standings::*;
