//! Standings computation.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{MatchRecord, Player, PlayerId, StandingEntry};

/// Compute ranked standings from the full set of players and matches.
///
/// Every player gets an entry, including players with no matches. Entries
/// are ordered by wins descending; players level on wins keep the order in
/// which `players` lists them (registration order as returned by the store).
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingEntry> {
    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|p| StandingEntry::new(p.id, p.name.clone()))
        .collect();

    let index: HashMap<PlayerId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.player_id, i))
        .collect();

    for record in matches {
        match (index.get(&record.winner_id), index.get(&record.loser_id)) {
            (Some(&w), Some(&l)) => {
                standings[w].wins += 1;
                standings[w].matches_played += 1;
                standings[l].matches_played += 1;
            }
            _ => {
                warn!(
                    "Skipping match {} vs {}: unknown player",
                    record.winner_id, record.loser_id
                );
            }
        }
    }

    // sort_by is stable, so ties stay in registration order
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}
