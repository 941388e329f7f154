pub mod auth_service;
pub mod errors;
pub mod registration_service;
pub mod search_service;
pub mod session;
pub mod tournament_service;
