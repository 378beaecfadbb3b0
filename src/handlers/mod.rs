pub mod health;
pub mod missions;
