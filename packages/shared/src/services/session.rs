use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::auth::AuthState;
use crate::models::user::SessionUser;
use crate::services::auth_service::AuthService;
use crate::services::errors::auth_service_errors::AuthServiceError;

/// Source of auth state transitions. Dropping the returned receiver is the
/// unsubscribe.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<AuthState>;
    async fn logout(&self) -> Result<(), AuthServiceError>;
}

/// Session backed by a bearer token from the hosted auth service.
pub struct SessionAuthProvider {
    auth_service: AuthService,
    state: watch::Sender<AuthState>,
}

impl SessionAuthProvider {
    pub fn new(auth_service: AuthService) -> Self {
        let (state, _) = watch::channel(AuthState::Loading);
        SessionAuthProvider {
            auth_service,
            state,
        }
    }

    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Resolves the initial `Loading` state from a stored token, if any.
    pub fn restore(&self, token: Option<&str>) -> AuthState {
        match token {
            Some(token) => {
                if let Err(e) = self.sign_in_with_token(token) {
                    debug!("Stored session not restored: {}", e);
                }
            }
            None => {
                self.state.send_replace(AuthState::Unauthenticated);
            }
        }
        self.current()
    }

    pub fn sign_in_with_token(&self, token: &str) -> Result<SessionUser, AuthServiceError> {
        match self.auth_service.session_user(token) {
            Ok(user) => {
                info!("User {} signed in", user.id);
                self.state
                    .send_replace(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!("Rejected session token: {}", e);
                self.state.send_replace(AuthState::Unauthenticated);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl AuthProvider for SessionAuthProvider {
    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    async fn logout(&self) -> Result<(), AuthServiceError> {
        if let AuthState::Authenticated(user) = self.current() {
            info!("User {} signed out", user.id);
        }
        self.state.send_replace(AuthState::Unauthenticated);
        Ok(())
    }
}
