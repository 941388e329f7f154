use std::fmt;

#[derive(Debug)]
pub enum AuthServiceError {
    JwtError(String),
    ValidationError(String),
    InvalidToken,
    ExpiredToken,
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthServiceError::JwtError(msg) => write!(f, "JWT error: {}", msg),
            AuthServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthServiceError::InvalidToken => write!(f, "Invalid JWT token"),
            AuthServiceError::ExpiredToken => write!(f, "JWT token has expired"),
        }
    }
}

impl std::error::Error for AuthServiceError {}
