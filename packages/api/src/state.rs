use std::sync::Arc;

use tcg_shared::config::{Settings, StoreBackend};
use tcg_shared::repositories::memory::InMemoryStore;
use tcg_shared::repositories::player_repository::{DynamoDbPlayerRepository, PlayerRepository};
use tcg_shared::repositories::tournament_repository::{
    DynamoDbTournamentRepository, TournamentRepository,
};
use tcg_shared::services::auth_service::AuthService;
use tcg_shared::services::registration_service::RegistrationService;
use tcg_shared::services::tournament_service::TournamentService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub tournament_service: Arc<TournamentService>,
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(
        auth_service: AuthService,
        tournaments: Arc<dyn TournamentRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
        fetch_limit: i32,
    ) -> Self {
        AppState {
            auth_service: Arc::new(auth_service),
            tournament_service: Arc::new(TournamentService::with_fetch_limit(
                tournaments.clone(),
                fetch_limit,
            )),
            registration_service: Arc::new(RegistrationService::new(tournaments, players)),
        }
    }

    pub async fn from_settings(settings: &Settings) -> Self {
        let auth_service = AuthService::new(settings.jwt_secret.clone());

        match settings.store_backend {
            StoreBackend::DynamoDb => {
                let config = aws_config::load_from_env().await;
                let client = aws_sdk_dynamodb::Client::new(&config);
                let tournaments = Arc::new(DynamoDbTournamentRepository::new(
                    client.clone(),
                    settings.tournaments_table.clone(),
                ));
                let players = Arc::new(DynamoDbPlayerRepository::new(
                    client,
                    settings.players_table.clone(),
                    settings.players_user_index.clone(),
                ));
                Self::new(auth_service, tournaments, players, settings.fetch_limit)
            }
            StoreBackend::Memory => {
                let store = Arc::new(InMemoryStore::new());
                Self::new(auth_service, store.clone(), store, settings.fetch_limit)
            }
        }
    }
}
