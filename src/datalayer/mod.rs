pub mod birds;
pub mod config;

pub use birds::{Bird, BirdStore};
pub use config::DbConfig;
