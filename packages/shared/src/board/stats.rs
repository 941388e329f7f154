use serde::Serialize;

use crate::models::auth::AuthState;
use crate::models::filters::SearchFilters;
use crate::models::tournament::Tournament;

/// Headline numbers over the cached tournament list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_tournaments: usize,
    pub upcoming_events: usize,
    pub registered_players: u64,
}

impl BoardStats {
    pub fn from_tournaments(tournaments: &[Tournament]) -> Self {
        BoardStats {
            total_tournaments: tournaments.len(),
            upcoming_events: tournaments
                .iter()
                .filter(|t| t.is_open_for_registration())
                .count(),
            registered_players: tournaments
                .iter()
                .map(|t| u64::from(t.registered_players))
                .sum(),
        }
    }
}

/// Why nothing is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// The store has no tournaments at all.
    NoTournaments,
    /// Tournaments exist but none pass the current filters.
    NoMatches,
}

/// Read-only copy of everything the board renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub auth: AuthState,
    pub tournaments_loading: bool,
    pub filters: SearchFilters,
    pub tournaments: Vec<Tournament>,
    pub stats: BoardStats,
    pub empty_state: Option<EmptyState>,
}
