use axum::{extract::FromRequestParts, http::request::Parts};
use lambda_http::tracing::debug;

use crate::{error::ApiError, state::AppState};
use tcg_shared::models::user::SessionUser;

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: SessionUser,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or(ApiError::Unauthorized)?
            .to_str()
            .map_err(|_| ApiError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let user = state.auth_service.session_user(token).map_err(|e| {
            debug!("Rejected bearer token: {}", e);
            ApiError::from(e)
        })?;

        Ok(AuthenticatedUser { user })
    }
}
