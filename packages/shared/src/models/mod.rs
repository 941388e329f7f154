pub mod auth;
pub mod filters;
pub mod player;
pub mod tournament;
pub mod user;
