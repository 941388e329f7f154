use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use tcg_shared::board::stats::BoardStats;
use tcg_shared::models::filters::SearchFilters;
use tcg_shared::models::player::Player;
use tcg_shared::models::tournament::{CreateTournamentRequest, Tournament};
use tcg_shared::services::search_service::filter_tournaments;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tournaments", get(list_tournaments).post(create_tournament))
        .route("/tournaments/stats", get(tournament_stats))
        .route("/tournaments/{tournament_id}/join", post(join_tournament))
}

async fn list_tournaments(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    let tournaments = state.tournament_service.list_recent().await.map_err(|e| {
        error!("Failed to list tournaments: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(filter_tournaments(&tournaments, &filters)))
}

async fn tournament_stats(
    State(state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
) -> Result<Json<BoardStats>, ApiError> {
    let tournaments = state.tournament_service.list_recent().await.map_err(|e| {
        error!("Failed to list tournaments for stats: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(BoardStats::from_tournaments(&tournaments)))
}

async fn create_tournament(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<Tournament>), ApiError> {
    let tournament = state
        .tournament_service
        .create_tournament(payload, &authenticated_user.user)
        .await
        .map_err(|e| {
            error!(
                "Failed to create tournament for {}: {}",
                authenticated_user.user.id, e
            );
            ApiError::from(e)
        })?;

    debug!("Tournament created: {}", tournament.id);
    Ok((StatusCode::CREATED, Json(tournament)))
}

async fn join_tournament(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(tournament_id): Path<String>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let tournament = state
        .tournament_service
        .get_tournament(&tournament_id)
        .await
        .map_err(|e| {
            error!("Failed to load tournament {}: {}", tournament_id, e);
            ApiError::from(e)
        })?;

    let player = state
        .registration_service
        .join(&tournament, &authenticated_user.user)
        .await
        .map_err(|e| {
            error!(
                "User {} failed to join tournament {}: {}",
                authenticated_user.user.id, tournament_id, e
            );
            ApiError::from(e)
        })?;

    debug!(
        "User {} joined tournament {}",
        authenticated_user.user.id, tournament_id
    );
    Ok((StatusCode::CREATED, Json(player)))
}
