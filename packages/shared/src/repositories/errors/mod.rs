pub mod player_repository_errors;
pub mod tournament_repository_errors;
