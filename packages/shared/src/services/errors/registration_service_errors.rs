use std::fmt;

use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::errors::tournament_repository_errors::TournamentRepositoryError;

#[derive(Debug)]
pub enum RegistrationServiceError {
    /// The cached count says there is no room. Advisory: the count may be stale.
    TournamentFull,
    TournamentNotFound,
    NotAuthenticated,
    RepositoryError(String),
}

impl fmt::Display for RegistrationServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistrationServiceError::TournamentFull => write!(f, "Tournament is full"),
            RegistrationServiceError::TournamentNotFound => write!(f, "Tournament not found"),
            RegistrationServiceError::NotAuthenticated => write!(f, "User is not signed in"),
            RegistrationServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegistrationServiceError {}

impl From<PlayerRepositoryError> for RegistrationServiceError {
    fn from(err: PlayerRepositoryError) -> Self {
        RegistrationServiceError::RepositoryError(err.to_string())
    }
}

impl From<TournamentRepositoryError> for RegistrationServiceError {
    fn from(err: TournamentRepositoryError) -> Self {
        match err {
            TournamentRepositoryError::NotFound => RegistrationServiceError::TournamentNotFound,
            other => RegistrationServiceError::RepositoryError(other.to_string()),
        }
    }
}
