#[derive(Debug)]
pub enum TournamentRepositoryError {
    NotFound,
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for TournamentRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentRepositoryError::NotFound => write!(f, "Tournament not found"),
            TournamentRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            TournamentRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentRepositoryError {}
