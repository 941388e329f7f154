use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tcg_shared::services::errors::{
    auth_service_errors::AuthServiceError, registration_service_errors::RegistrationServiceError,
    tournament_service_errors::TournamentServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    AuthService(AuthServiceError),
    TournamentService(TournamentServiceError),
    RegistrationService(RegistrationServiceError),
    Unauthorized,
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<TournamentServiceError> for ApiError {
    fn from(error: TournamentServiceError) -> Self {
        ApiError::TournamentService(error)
    }
}

impl From<RegistrationServiceError> for ApiError {
    fn from(error: RegistrationServiceError) -> Self {
        ApiError::RegistrationService(error)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthService(AuthServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::AuthService(AuthServiceError::JwtError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::AuthService(
                AuthServiceError::InvalidToken | AuthServiceError::ExpiredToken,
            ) => StatusCode::UNAUTHORIZED,

            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,

            ApiError::TournamentService(TournamentServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TournamentService(TournamentServiceError::TournamentNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::TournamentService(TournamentServiceError::NotAuthenticated) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::TournamentService(TournamentServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::RegistrationService(RegistrationServiceError::TournamentFull) => {
                StatusCode::CONFLICT
            }
            ApiError::RegistrationService(RegistrationServiceError::TournamentNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::RegistrationService(RegistrationServiceError::NotAuthenticated) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::RegistrationService(RegistrationServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Store failures are not described to callers.
        let message = match &self {
            ApiError::AuthService(err) => err.to_string(),
            ApiError::Unauthorized => "Missing or malformed bearer token".to_string(),
            _ if status == StatusCode::INTERNAL_SERVER_ERROR => {
                "Database not available. Please try again later.".to_string()
            }
            ApiError::TournamentService(err) => err.to_string(),
            ApiError::RegistrationService(err) => err.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
