pub mod responses;

use serde::{Deserialize, Serialize};

use crate::models::user::SessionUser;

/// What the auth subscription reports. Starts as `Loading` until the hosted
/// service has resolved the session.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "user", rename_all = "camelCase")]
pub enum AuthState {
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }
}
