pub mod health;
pub mod registrations;
pub mod tournaments;
