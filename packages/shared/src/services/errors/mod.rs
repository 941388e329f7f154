pub mod auth_service_errors;
pub mod registration_service_errors;
pub mod tournament_service_errors;
