use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::player::Player;
use crate::models::tournament::Tournament;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::errors::tournament_repository_errors::TournamentRepositoryError;
use crate::repositories::player_repository::PlayerRepository;
use crate::repositories::tournament_repository::{most_recent, TournamentRepository};

const UNAVAILABLE: &str = "store unavailable";

/// Process-local store for both collections. Used as the `memory` backend for
/// local runs and as the remote-store fake in tests, which is why it counts
/// list calls and can be told to fail.
#[derive(Default)]
pub struct InMemoryStore {
    tournaments: Mutex<HashMap<String, Tournament>>,
    players: Mutex<Vec<Player>>,
    fail_all: AtomicBool,
    fail_tournament_updates: AtomicBool,
    tournament_list_calls: AtomicUsize,
    player_list_calls: AtomicUsize,
    player_create_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tournaments(tournaments: impl IntoIterator<Item = Tournament>) -> Self {
        let store = Self::new();
        {
            let mut map = store.lock_tournaments();
            for tournament in tournaments {
                map.insert(tournament.id.clone(), tournament);
            }
        }
        store
    }

    /// Every call fails with a store error while set.
    pub fn set_failing(&self, failing: bool) {
        self.fail_all.store(failing, Ordering::SeqCst);
    }

    /// Only `update_registered_players` fails while set.
    pub fn set_failing_tournament_updates(&self, failing: bool) {
        self.fail_tournament_updates.store(failing, Ordering::SeqCst);
    }

    pub fn tournament_list_calls(&self) -> usize {
        self.tournament_list_calls.load(Ordering::SeqCst)
    }

    pub fn player_list_calls(&self) -> usize {
        self.player_list_calls.load(Ordering::SeqCst)
    }

    pub fn player_create_calls(&self) -> usize {
        self.player_create_calls.load(Ordering::SeqCst)
    }

    pub fn players(&self) -> Vec<Player> {
        self.lock_players().clone()
    }

    pub fn tournament(&self, tournament_id: &str) -> Option<Tournament> {
        self.lock_tournaments().get(tournament_id).cloned()
    }

    fn failing(&self) -> bool {
        self.fail_all.load(Ordering::SeqCst)
    }

    fn lock_tournaments(&self) -> std::sync::MutexGuard<'_, HashMap<String, Tournament>> {
        // A poisoned lock still holds consistent data: every write is a single insert.
        self.tournaments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_players(&self) -> std::sync::MutexGuard<'_, Vec<Player>> {
        self.players
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TournamentRepository for InMemoryStore {
    async fn list_recent(&self, limit: i32) -> Result<Vec<Tournament>, TournamentRepositoryError> {
        self.tournament_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing() {
            return Err(TournamentRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        let tournaments = self.lock_tournaments().values().cloned().collect();
        Ok(most_recent(tournaments, limit))
    }

    async fn get_tournament(
        &self,
        tournament_id: &str,
    ) -> Result<Option<Tournament>, TournamentRepositoryError> {
        if self.failing() {
            return Err(TournamentRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        Ok(self.tournament(tournament_id))
    }

    async fn create_tournament(
        &self,
        tournament: &Tournament,
    ) -> Result<(), TournamentRepositoryError> {
        if self.failing() {
            return Err(TournamentRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        self.lock_tournaments()
            .insert(tournament.id.clone(), tournament.clone());
        Ok(())
    }

    async fn update_registered_players(
        &self,
        tournament_id: &str,
        registered_players: u32,
    ) -> Result<(), TournamentRepositoryError> {
        if self.failing() || self.fail_tournament_updates.load(Ordering::SeqCst) {
            return Err(TournamentRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        let mut tournaments = self.lock_tournaments();
        let tournament = tournaments
            .get_mut(tournament_id)
            .ok_or(TournamentRepositoryError::NotFound)?;
        tournament.registered_players = registered_players;
        tournament.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        self.player_create_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing() {
            return Err(PlayerRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        self.lock_players().push(player.clone());
        Ok(())
    }

    async fn list_players_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Player>, PlayerRepositoryError> {
        self.player_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing() {
            return Err(PlayerRepositoryError::DynamoDb(UNAVAILABLE.to_string()));
        }
        Ok(self
            .lock_players()
            .iter()
            .filter(|player| player.user_id == user_id)
            .cloned()
            .collect())
    }
}
