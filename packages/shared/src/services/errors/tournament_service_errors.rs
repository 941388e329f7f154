use std::fmt;

use crate::repositories::errors::tournament_repository_errors::TournamentRepositoryError;

#[derive(Debug)]
pub enum TournamentServiceError {
    RepositoryError(TournamentRepositoryError),
    TournamentNotFound,
    NotAuthenticated,
    ValidationError(String),
}

impl fmt::Display for TournamentServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TournamentServiceError::RepositoryError(err) => write!(f, "Repository error: {}", err),
            TournamentServiceError::TournamentNotFound => write!(f, "Tournament not found"),
            TournamentServiceError::NotAuthenticated => write!(f, "User is not signed in"),
            TournamentServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentServiceError {}

impl From<TournamentRepositoryError> for TournamentServiceError {
    fn from(err: TournamentRepositoryError) -> Self {
        match err {
            TournamentRepositoryError::NotFound => TournamentServiceError::TournamentNotFound,
            other => TournamentServiceError::RepositoryError(other),
        }
    }
}
