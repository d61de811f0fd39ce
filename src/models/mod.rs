//! Core data models for the tournament tracker.

mod ids;
mod match_record;
mod pairing;
mod player;
mod standing;

pub use ids::*;
pub use match_record::*;
pub use pairing::*;
pub use player::*;
pub use standing::*;
