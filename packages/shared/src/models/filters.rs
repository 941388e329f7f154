use serde::{Deserialize, Serialize};

use crate::models::tournament::Tournament;

/// Criteria typed into the search bar. An empty field means "no filter".
///
/// `query` and `location` are case-insensitive substring matches; `game`,
/// `format` and `status` must match exactly.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchFilters {
    pub query: String,
    pub game: String,
    pub format: String,
    pub status: String,
    pub location: String,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.game.is_empty()
            && self.format.is_empty()
            && self.status.is_empty()
            && self.location.is_empty()
    }

    pub fn matches(&self, tournament: &Tournament) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = contains_ignore_case(&tournament.title, &query)
                || contains_ignore_case(&tournament.description, &query)
                || contains_ignore_case(&tournament.organizer_name, &query);
            if !hit {
                return false;
            }
        }

        if !self.game.is_empty() && tournament.game != self.game {
            return false;
        }

        if !self.format.is_empty() && tournament.format != self.format {
            return false;
        }

        if !self.status.is_empty() && tournament.status.as_str() != self.status {
            return false;
        }

        if !self.location.is_empty() {
            let location = self.location.to_lowercase();
            return contains_ignore_case(&tournament.location, &location)
                || contains_ignore_case(&tournament.address, &location);
        }

        true
    }
}

// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
