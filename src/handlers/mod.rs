pub mod birds;
pub mod health;
