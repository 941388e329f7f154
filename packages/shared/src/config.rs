use std::fmt;

use tracing::Level;

pub const DEFAULT_TOURNAMENTS_TABLE: &str = "tournaments";
pub const DEFAULT_PLAYERS_TABLE: &str = "players";
pub const DEFAULT_PLAYERS_USER_INDEX: &str = "GSI_PlayerByUser";
/// Upper bound on how many tournaments the board keeps cached.
pub const DEFAULT_FETCH_LIMIT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} environment variable must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Settings {
    pub tournaments_table: String,
    pub players_table: String,
    pub players_user_index: String,
    pub jwt_secret: String,
    pub fetch_limit: i32,
    pub store_backend: StoreBackend,
    pub log_level: Level,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let fetch_limit = match lookup("TOURNAMENT_FETCH_LIMIT") {
            Some(raw) => match raw.parse::<i32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "TOURNAMENT_FETCH_LIMIT",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_FETCH_LIMIT,
        };

        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("dynamodb") => StoreBackend::DynamoDb,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.parse::<Level>().map_err(|_| ConfigError::Invalid {
                key: "LOG_LEVEL",
                value: raw,
            })?,
            None => Level::INFO,
        };

        Ok(Settings {
            tournaments_table: lookup("TOURNAMENTS_TABLE")
                .unwrap_or_else(|| DEFAULT_TOURNAMENTS_TABLE.to_string()),
            players_table: lookup("PLAYERS_TABLE")
                .unwrap_or_else(|| DEFAULT_PLAYERS_TABLE.to_string()),
            players_user_index: lookup("PLAYERS_USER_INDEX")
                .unwrap_or_else(|| DEFAULT_PLAYERS_USER_INDEX.to_string()),
            jwt_secret,
            fetch_limit,
            store_backend,
            log_level,
        })
    }
}
