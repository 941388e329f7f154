use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::SessionUser;

/// Games offered by the create form and the search filters.
pub const GAMES: [&str; 7] = [
    "Magic: The Gathering",
    "Pokemon TCG",
    "Yu-Gi-Oh!",
    "Flesh and Blood",
    "Digimon Card Game",
    "Dragon Ball Super",
    "One Piece Card Game",
];

pub const FORMATS: [&str; 8] = [
    "Standard",
    "Modern",
    "Legacy",
    "Vintage",
    "Commander",
    "Draft",
    "Sealed",
    "Constructed",
];

pub const DEFAULT_MAX_PLAYERS: u32 = 16;
pub const MIN_PLAYERS: u32 = 4;
pub const MAX_PLAYERS: u32 = 128;

/// Lifecycle of a tournament. Set to `Registration` on creation and only ever
/// changed by an operator; nothing in this crate advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Registration,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Registration => "registration",
            TournamentStatus::Ongoing => "ongoing",
            TournamentStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tournament record as held by the remote store. Attribute names are
/// camelCase on the wire.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub description: String,
    pub game: String,
    pub format: String,
    pub location: String,
    pub address: String,
    pub date: String,
    pub time: String,
    pub max_players: u32,
    pub entry_fee: f64,
    pub prize_pool: String,
    pub status: TournamentStatus,
    pub organizer_id: String,
    pub organizer_name: String,
    pub registered_players: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(request: CreateTournamentRequest, organizer: &SessionUser) -> Self {
        let now = Utc::now();
        Tournament {
            id: format!("tournament_{}", Uuid::new_v4()),
            title: request.title,
            description: request.description,
            game: request.game,
            format: request.format,
            location: request.location,
            address: request.address,
            date: request.date,
            time: request.time,
            max_players: request.max_players,
            entry_fee: request.entry_fee,
            prize_pool: request.prize_pool,
            status: TournamentStatus::Registration,
            organizer_id: organizer.id.clone(),
            organizer_name: organizer.display_name_or_email().to_string(),
            registered_players: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_full(&self) -> bool {
        self.registered_players >= self.max_players
    }

    pub fn spots_left(&self) -> u32 {
        self.max_players.saturating_sub(self.registered_players)
    }

    /// Counted as an upcoming event on the board.
    pub fn is_open_for_registration(&self) -> bool {
        matches!(
            self.status,
            TournamentStatus::Registration | TournamentStatus::Upcoming
        )
    }
}

fn default_max_players() -> u32 {
    DEFAULT_MAX_PLAYERS
}

/// Payload of the create form.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub game: String,
    pub format: String,
    pub location: String,
    pub address: String,
    pub date: String,
    pub time: String,
    #[serde(default = "default_max_players")]
    pub max_players: u32,
    #[serde(default)]
    pub entry_fee: f64,
    #[serde(default)]
    pub prize_pool: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organizer() -> SessionUser {
        SessionUser {
            id: "user-1".to_string(),
            email: "shop@example.com".to_string(),
            display_name: None,
        }
    }

    fn request() -> CreateTournamentRequest {
        CreateTournamentRequest {
            title: "Friday Night Magic".to_string(),
            description: "Weekly event".to_string(),
            game: "Magic: The Gathering".to_string(),
            format: "Draft".to_string(),
            location: "Card Kingdom".to_string(),
            address: "5105 Leary Ave NW, Seattle".to_string(),
            date: "2026-11-06".to_string(),
            time: "18:30".to_string(),
            max_players: 24,
            entry_fee: 15.0,
            prize_pool: "Booster packs".to_string(),
        }
    }

    #[test]
    fn test_new_tournament_defaults() {
        let tournament = Tournament::new(request(), &organizer());

        assert!(tournament.id.starts_with("tournament_"));
        assert_eq!(tournament.status, TournamentStatus::Registration);
        assert_eq!(tournament.registered_players, 0);
        assert_eq!(tournament.organizer_id, "user-1");
        assert_eq!(tournament.organizer_name, "shop@example.com");
        assert_eq!(tournament.created_at, tournament.updated_at);
    }

    #[test]
    fn test_capacity_helpers() {
        let mut tournament = Tournament::new(request(), &organizer());
        tournament.max_players = 2;

        tournament.registered_players = 1;
        assert!(!tournament.is_full());
        assert_eq!(tournament.spots_left(), 1);

        tournament.registered_players = 2;
        assert!(tournament.is_full());
        assert_eq!(tournament.spots_left(), 0);

        tournament.registered_players = 3;
        assert!(tournament.is_full());
        assert_eq!(tournament.spots_left(), 0);
    }

    #[test]
    fn test_open_for_registration() {
        let mut tournament = Tournament::new(request(), &organizer());
        assert!(tournament.is_open_for_registration());

        tournament.status = TournamentStatus::Upcoming;
        assert!(tournament.is_open_for_registration());

        tournament.status = TournamentStatus::Ongoing;
        assert!(!tournament.is_open_for_registration());

        tournament.status = TournamentStatus::Completed;
        assert!(!tournament.is_open_for_registration());
    }

    #[test]
    fn test_tournament_wire_format_is_camel_case() {
        let tournament = Tournament::new(request(), &organizer());
        let json = serde_json::to_value(&tournament).unwrap();

        assert_eq!(json["maxPlayers"], 24);
        assert_eq!(json["registeredPlayers"], 0);
        assert_eq!(json["organizerName"], "shop@example.com");
        assert_eq!(json["status"], "registration");
        assert!(json.get("max_players").is_none());
    }

    #[test]
    fn test_create_request_defaults() {
        let json = r#"{
            "title": "Pokemon League",
            "game": "Pokemon TCG",
            "format": "Standard",
            "location": "Game Haven",
            "address": "1 Main St",
            "date": "2026-12-01",
            "time": "10:00"
        }"#;

        let request: CreateTournamentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.max_players, DEFAULT_MAX_PLAYERS);
        assert_eq!(request.entry_fee, 0.0);
        assert!(request.description.is_empty());
        assert!(request.prize_pool.is_empty());
    }
}
