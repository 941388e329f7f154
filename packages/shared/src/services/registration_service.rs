use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::models::player::Player;
use crate::models::tournament::Tournament;
use crate::models::user::SessionUser;
use crate::repositories::player_repository::PlayerRepository;
use crate::repositories::tournament_repository::TournamentRepository;
use crate::services::errors::registration_service_errors::RegistrationServiceError;

#[derive(Clone)]
pub struct RegistrationService {
    tournaments: Arc<dyn TournamentRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl RegistrationService {
    pub fn new(
        tournaments: Arc<dyn TournamentRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        RegistrationService {
            tournaments,
            players,
        }
    }

    /// Registers `user` for the given (cached) tournament.
    ///
    /// The capacity check reads `tournament.registered_players` as passed in,
    /// which may be stale relative to other clients. Creating the player and
    /// bumping the count are two separate writes: if the second fails the
    /// player record is left in place.
    pub async fn join(
        &self,
        tournament: &Tournament,
        user: &SessionUser,
    ) -> Result<Player, RegistrationServiceError> {
        if user.id.is_empty() {
            return Err(RegistrationServiceError::NotAuthenticated);
        }

        if tournament.is_full() {
            info!(
                "Tournament {} is full ({}/{}), rejecting user {}",
                tournament.id, tournament.registered_players, tournament.max_players, user.id
            );
            return Err(RegistrationServiceError::TournamentFull);
        }

        let player = Player::new(user, &tournament.id);
        debug!(
            "Creating player {} for user {} in tournament {}",
            player.id, user.id, tournament.id
        );
        self.players.create_player(&player).await.map_err(|e| {
            error!(
                "Failed to create player for user {} in tournament {}: {}",
                user.id, tournament.id, e
            );
            RegistrationServiceError::from(e)
        })?;

        let registered_players = tournament.registered_players + 1;
        self.tournaments
            .update_registered_players(&tournament.id, registered_players)
            .await
            .map_err(|e| {
                error!(
                    "Player {} created but count for tournament {} not updated: {}",
                    player.id, tournament.id, e
                );
                RegistrationServiceError::from(e)
            })?;

        info!(
            "User {} registered for tournament {} ({}/{})",
            user.id, tournament.id, registered_players, tournament.max_players
        );
        Ok(player)
    }

    /// Ids of every tournament the user holds a player record for.
    pub async fn registered_tournament_ids(
        &self,
        user_id: &str,
    ) -> Result<HashSet<String>, RegistrationServiceError> {
        if user_id.is_empty() {
            return Err(RegistrationServiceError::NotAuthenticated);
        }
        let players = self.players.list_players_by_user(user_id).await?;
        Ok(players
            .into_iter()
            .map(|player| player.tournament_id)
            .collect())
    }
}
