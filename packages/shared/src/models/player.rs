use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::SessionUser;

/// One user's registration to one tournament. Created once per join and
/// never updated here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_id: String,
    pub tournament_id: String,
    pub checked_in: bool,
    pub registered_at: DateTime<Utc>,
}

impl Player {
    pub fn new(user: &SessionUser, tournament_id: &str) -> Self {
        Player {
            id: format!("player_{}", Uuid::new_v4()),
            name: user.display_name_or_email().to_string(),
            email: user.email.clone(),
            user_id: user.id.clone(),
            tournament_id: tournament_id.to_string(),
            checked_in: false,
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let user = SessionUser {
            id: "user-7".to_string(),
            email: "misty@example.com".to_string(),
            display_name: Some("Misty".to_string()),
        };

        let player = Player::new(&user, "t1");

        assert!(player.id.starts_with("player_"));
        assert_eq!(player.name, "Misty");
        assert_eq!(player.email, "misty@example.com");
        assert_eq!(player.user_id, "user-7");
        assert_eq!(player.tournament_id, "t1");
        assert!(!player.checked_in);
    }

    #[test]
    fn test_player_id_uniqueness() {
        let user = SessionUser {
            id: "user-7".to_string(),
            email: "misty@example.com".to_string(),
            display_name: None,
        };

        let first = Player::new(&user, "t1");
        let second = Player::new(&user, "t1");

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "misty@example.com");
    }
}
