//! Client-side state of the tournament board.
//!
//! [`TournamentBoard`] owns the auth state, the cached tournament list, the
//! filtered list derived from it and the ids of tournaments the current user
//! has joined. It reacts to auth transitions and user actions and keeps those
//! four in sync. All remote work goes through the injected services.

pub mod notices;
pub mod stats;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::models::auth::AuthState;
use crate::models::filters::SearchFilters;
use crate::models::player::Player;
use crate::models::tournament::{CreateTournamentRequest, Tournament};
use crate::models::user::SessionUser;
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::errors::registration_service_errors::RegistrationServiceError;
use crate::services::errors::tournament_service_errors::TournamentServiceError;
use crate::services::registration_service::RegistrationService;
use crate::services::search_service::filter_tournaments;
use crate::services::session::AuthProvider;
use crate::services::tournament_service::TournamentService;

use notices::{
    Notice, Notifier, CREATED_MESSAGE, CREATE_FAILED_MESSAGE, DETAILS_COMING_SOON_MESSAGE,
    JOINED_MESSAGE, STORE_UNAVAILABLE_MESSAGE, TOURNAMENT_FULL_MESSAGE,
};
use stats::{BoardStats, BoardView, EmptyState};

struct BoardState {
    auth: AuthState,
    tournaments: Vec<Tournament>,
    filtered: Vec<Tournament>,
    filters: SearchFilters,
    registered: HashSet<String>,
    tournaments_loading: bool,
    // Bumped whenever a response for the slice would be outdated; a response
    // is applied only if its generation is still current.
    tournaments_generation: u64,
    registrations_generation: u64,
}

impl BoardState {
    fn new() -> Self {
        BoardState {
            auth: AuthState::Loading,
            tournaments: Vec::new(),
            filtered: Vec::new(),
            filters: SearchFilters::default(),
            registered: HashSet::new(),
            tournaments_loading: true,
            tournaments_generation: 0,
            registrations_generation: 0,
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_tournaments(&self.tournaments, &self.filters);
    }
}

pub struct TournamentBoard {
    tournament_service: TournamentService,
    registration_service: RegistrationService,
    auth: Arc<dyn AuthProvider>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<BoardState>,
}

impl TournamentBoard {
    pub fn new(
        tournament_service: TournamentService,
        registration_service: RegistrationService,
        auth: Arc<dyn AuthProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        TournamentBoard {
            tournament_service,
            registration_service,
            auth,
            notifier,
            state: Mutex::new(BoardState::new()),
        }
    }

    /// Follows the auth provider until it goes away.
    pub async fn run(&self) {
        let mut auth_states = self.auth.subscribe();
        loop {
            let next = auth_states.borrow_and_update().clone();
            self.handle_auth_state(next).await;
            if auth_states.changed().await.is_err() {
                debug!("Auth provider closed, board stopped following it");
                break;
            }
        }
    }

    /// Records an auth transition. Becoming authenticated as a new user loads
    /// tournaments and that user's registrations concurrently; nothing is
    /// fetched while loading or signed out. Signing out keeps the cached lists.
    pub async fn handle_auth_state(&self, next: AuthState) {
        let load = {
            let mut state = self.lock_state();
            let previous_user = state.auth.user().map(|u| u.id.clone());
            let next_user = next.user().map(|u| u.id.clone());

            if previous_user != next_user {
                // Registrations still in flight belong to the old session.
                state.registrations_generation += 1;
            }
            match &next {
                AuthState::Loading => debug!("Auth state loading"),
                AuthState::Authenticated(user) => info!("Board authenticated as {}", user.id),
                AuthState::Unauthenticated => info!("Board signed out"),
            }
            state.auth = next;

            next_user.is_some() && previous_user != next_user
        };

        if load {
            tokio::join!(self.refresh_tournaments(), self.load_registrations());
        }
    }

    /// Re-fetches the newest tournaments and re-applies the current filters.
    /// A failed fetch shows an empty list; no notice is raised.
    pub async fn refresh_tournaments(&self) {
        let generation = {
            let mut state = self.lock_state();
            state.tournaments_generation += 1;
            state.tournaments_loading = true;
            state.tournaments_generation
        };

        let tournaments = match self.tournament_service.list_recent().await {
            Ok(tournaments) => tournaments,
            Err(e) => {
                warn!("Error loading tournaments: {}", e);
                Vec::new()
            }
        };

        let mut state = self.lock_state();
        if state.tournaments_generation != generation {
            debug!(
                "Discarding tournament response {} (current {})",
                generation, state.tournaments_generation
            );
            return;
        }
        state.tournaments = tournaments;
        state.refilter();
        state.tournaments_loading = false;
    }

    /// Re-derives the joined set for the signed-in user. A failed fetch
    /// leaves the set empty.
    pub async fn load_registrations(&self) {
        let (generation, user_id) = {
            let mut state = self.lock_state();
            let user_id = match state.auth.user() {
                Some(user) => user.id.clone(),
                None => return,
            };
            state.registrations_generation += 1;
            (state.registrations_generation, user_id)
        };

        let registered = match self
            .registration_service
            .registered_tournament_ids(&user_id)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Error loading registrations for {}: {}", user_id, e);
                HashSet::new()
            }
        };

        let mut state = self.lock_state();
        if state.registrations_generation != generation {
            debug!("Discarding registrations response for {}", user_id);
            return;
        }
        state.registered = registered;
    }

    pub fn apply_filters(&self, filters: SearchFilters) {
        let mut state = self.lock_state();
        state.filters = filters;
        state.refilter();
    }

    pub fn clear_filters(&self) {
        self.apply_filters(SearchFilters::default());
    }

    /// Joins a tournament from the cached list as the signed-in user.
    ///
    /// Precondition failures (not signed in, tournament not cached) return an
    /// error without a notice. Everything else is reported to the user.
    pub async fn join(&self, tournament_id: &str) -> Result<Player, RegistrationServiceError> {
        let (tournament, user) = {
            let state = self.lock_state();
            let user = state
                .auth
                .user()
                .cloned()
                .ok_or(RegistrationServiceError::NotAuthenticated)?;
            let tournament = state
                .tournaments
                .iter()
                .find(|t| t.id == tournament_id)
                .cloned()
                .ok_or(RegistrationServiceError::TournamentNotFound)?;
            (tournament, user)
        };

        match self.registration_service.join(&tournament, &user).await {
            Ok(player) => {
                self.notifier.notify(Notice::success(JOINED_MESSAGE));
                {
                    let mut state = self.lock_state();
                    // The joined set belongs to whoever is signed in now.
                    if state.auth.user().map(|u| u.id.as_str()) == Some(user.id.as_str()) {
                        state.registered.insert(tournament_id.to_string());
                    } else {
                        debug!(
                            "User changed during join of {}, not marking it joined",
                            tournament_id
                        );
                    }
                }
                self.refresh_tournaments().await;
                Ok(player)
            }
            Err(RegistrationServiceError::TournamentFull) => {
                self.notifier.notify(Notice::error(TOURNAMENT_FULL_MESSAGE));
                Err(RegistrationServiceError::TournamentFull)
            }
            Err(e) => {
                error!("Error joining tournament {}: {}", tournament_id, e);
                self.notifier.notify(Notice::error(STORE_UNAVAILABLE_MESSAGE));
                Err(e)
            }
        }
    }

    /// Creates a tournament organized by the signed-in user, then re-fetches
    /// so the list and stats include it.
    pub async fn create_tournament(
        &self,
        request: CreateTournamentRequest,
    ) -> Result<Tournament, TournamentServiceError> {
        let organizer = self
            .current_user()
            .ok_or(TournamentServiceError::NotAuthenticated)?;

        match self
            .tournament_service
            .create_tournament(request, &organizer)
            .await
        {
            Ok(tournament) => {
                self.notifier.notify(Notice::success(CREATED_MESSAGE));
                self.refresh_tournaments().await;
                Ok(tournament)
            }
            Err(e) => {
                error!("Error creating tournament: {}", e);
                self.notifier.notify(Notice::error(CREATE_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn view_tournament(&self, tournament_id: &str) {
        debug!("Details requested for tournament {}", tournament_id);
        self.notifier
            .notify(Notice::info(DETAILS_COMING_SOON_MESSAGE));
    }

    /// Signs out through the provider; the board hears about it on its
    /// subscription.
    pub async fn logout(&self) -> Result<(), AuthServiceError> {
        self.auth.logout().await
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.lock_state().auth.user().cloned()
    }

    pub fn is_registered(&self, tournament_id: &str) -> bool {
        self.lock_state().registered.contains(tournament_id)
    }

    pub fn registered_ids(&self) -> HashSet<String> {
        self.lock_state().registered.clone()
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tournaments(&self.lock_state().tournaments)
    }

    pub fn snapshot(&self) -> BoardView {
        let state = self.lock_state();
        let empty_state = if state.tournaments_loading || !state.filtered.is_empty() {
            None
        } else if state.tournaments.is_empty() {
            Some(EmptyState::NoTournaments)
        } else {
            Some(EmptyState::NoMatches)
        };

        BoardView {
            auth: state.auth.clone(),
            tournaments_loading: state.tournaments_loading,
            filters: state.filters.clone(),
            tournaments: state.filtered.clone(),
            stats: BoardStats::from_tournaments(&state.tournaments),
            empty_state,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, BoardState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
