use axum::{extract::State, routing::get, Json, Router};
use lambda_http::tracing::error;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/registrations", get(list_registrations))
}

/// Ids of the tournaments the caller has joined, sorted.
async fn list_registrations(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Vec<String>>, ApiError> {
    let registered = state
        .registration_service
        .registered_tournament_ids(&authenticated_user.user.id)
        .await
        .map_err(|e| {
            error!(
                "Failed to list registrations for {}: {}",
                authenticated_user.user.id, e
            );
            ApiError::from(e)
        })?;

    let mut ids: Vec<String> = registered.into_iter().collect();
    ids.sort();
    Ok(Json(ids))
}
