pub mod errors;
pub mod memory;
pub mod player_repository;
pub mod tournament_repository;
