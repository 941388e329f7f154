use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::config::DEFAULT_FETCH_LIMIT;
use crate::models::tournament::{CreateTournamentRequest, Tournament, MAX_PLAYERS, MIN_PLAYERS};
use crate::models::user::SessionUser;
use crate::repositories::tournament_repository::TournamentRepository;
use crate::services::errors::tournament_service_errors::TournamentServiceError;

#[derive(Clone)]
pub struct TournamentService {
    repository: Arc<dyn TournamentRepository + Send + Sync>,
    fetch_limit: i32,
}

impl TournamentService {
    pub fn new(repository: Arc<dyn TournamentRepository + Send + Sync>) -> Self {
        Self::with_fetch_limit(repository, DEFAULT_FETCH_LIMIT)
    }

    pub fn with_fetch_limit(
        repository: Arc<dyn TournamentRepository + Send + Sync>,
        fetch_limit: i32,
    ) -> Self {
        TournamentService {
            repository,
            fetch_limit,
        }
    }

    /// The newest tournaments, up to the configured fetch limit.
    pub async fn list_recent(&self) -> Result<Vec<Tournament>, TournamentServiceError> {
        let tournaments = self.repository.list_recent(self.fetch_limit).await?;
        debug!("Fetched {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    pub async fn get_tournament(
        &self,
        tournament_id: &str,
    ) -> Result<Tournament, TournamentServiceError> {
        if tournament_id.is_empty() {
            return Err(TournamentServiceError::ValidationError(
                "Tournament ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_tournament(tournament_id)
            .await?
            .ok_or(TournamentServiceError::TournamentNotFound)
    }

    pub async fn create_tournament(
        &self,
        request: CreateTournamentRequest,
        organizer: &SessionUser,
    ) -> Result<Tournament, TournamentServiceError> {
        validate(&request)?;

        let tournament = Tournament::new(request, organizer);
        self.repository.create_tournament(&tournament).await?;

        info!(
            "Tournament {} created by organizer {}",
            tournament.id, tournament.organizer_id
        );
        Ok(tournament)
    }
}

fn validate(request: &CreateTournamentRequest) -> Result<(), TournamentServiceError> {
    let required = [
        ("Title", &request.title),
        ("Game", &request.game),
        ("Format", &request.format),
        ("Venue name", &request.location),
        ("Address", &request.address),
        ("Date", &request.date),
        ("Start time", &request.time),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(TournamentServiceError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
    }

    if NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").is_err() {
        return Err(TournamentServiceError::ValidationError(
            "Date must be formatted as YYYY-MM-DD".to_string(),
        ));
    }

    if NaiveTime::parse_from_str(&request.time, "%H:%M").is_err() {
        return Err(TournamentServiceError::ValidationError(
            "Start time must be formatted as HH:MM".to_string(),
        ));
    }

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&request.max_players) {
        return Err(TournamentServiceError::ValidationError(format!(
            "Max players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }

    if !request.entry_fee.is_finite() || request.entry_fee < 0.0 {
        return Err(TournamentServiceError::ValidationError(
            "Entry fee cannot be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tournament::TournamentStatus;
    use crate::repositories::errors::tournament_repository_errors::TournamentRepositoryError;
    use crate::repositories::tournament_repository::MockTournamentRepository;

    fn organizer() -> SessionUser {
        SessionUser {
            id: "org-1".to_string(),
            email: "owner@gamehaven.example".to_string(),
            display_name: Some("Game Haven".to_string()),
        }
    }

    fn request() -> CreateTournamentRequest {
        CreateTournamentRequest {
            title: "Commander Clash".to_string(),
            description: "Four-player pods".to_string(),
            game: "Magic: The Gathering".to_string(),
            format: "Commander".to_string(),
            location: "Game Haven".to_string(),
            address: "77 Oak Ave".to_string(),
            date: "2026-11-28".to_string(),
            time: "13:00".to_string(),
            max_players: 32,
            entry_fee: 20.0,
            prize_pool: "$200 store credit".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_tournament_persists_record() {
        let mut mock_repo = MockTournamentRepository::new();
        mock_repo
            .expect_create_tournament()
            .withf(|t| t.title == "Commander Clash" && t.registered_players == 0)
            .times(1)
            .returning(|_| Ok(()));

        let service = TournamentService::new(Arc::new(mock_repo));
        let tournament = service
            .create_tournament(request(), &organizer())
            .await
            .unwrap();

        assert_eq!(tournament.status, TournamentStatus::Registration);
        assert_eq!(tournament.organizer_name, "Game Haven");
    }

    #[tokio::test]
    async fn test_create_tournament_rejects_invalid_requests() {
        let mut mock_repo = MockTournamentRepository::new();
        mock_repo.expect_create_tournament().never();
        let service = TournamentService::new(Arc::new(mock_repo));

        let mut blank_title = request();
        blank_title.title = "  ".to_string();

        let mut bad_date = request();
        bad_date.date = "28/11/2026".to_string();

        let mut bad_time = request();
        bad_time.time = "1pm".to_string();

        let mut too_small = request();
        too_small.max_players = 3;

        let mut too_big = request();
        too_big.max_players = 129;

        let mut negative_fee = request();
        negative_fee.entry_fee = -1.0;

        for invalid in [blank_title, bad_date, bad_time, too_small, too_big, negative_fee] {
            let result = service.create_tournament(invalid, &organizer()).await;
            assert!(matches!(
                result,
                Err(TournamentServiceError::ValidationError(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_create_tournament_surfaces_store_errors() {
        let mut mock_repo = MockTournamentRepository::new();
        mock_repo
            .expect_create_tournament()
            .returning(|_| Err(TournamentRepositoryError::DynamoDb("timeout".to_string())));

        let service = TournamentService::new(Arc::new(mock_repo));
        let result = service.create_tournament(request(), &organizer()).await;

        assert!(matches!(
            result,
            Err(TournamentServiceError::RepositoryError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_recent_uses_fetch_limit() {
        let mut mock_repo = MockTournamentRepository::new();
        mock_repo
            .expect_list_recent()
            .withf(|limit| *limit == 25)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = TournamentService::with_fetch_limit(Arc::new(mock_repo), 25);

        assert!(service.list_recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_tournament() {
        let mut mock_repo = MockTournamentRepository::new();
        mock_repo.expect_get_tournament().returning(|_| Ok(None));

        let service = TournamentService::new(Arc::new(mock_repo));
        let result = service.get_tournament("nope").await;

        assert!(matches!(
            result,
            Err(TournamentServiceError::TournamentNotFound)
        ));
    }
}
