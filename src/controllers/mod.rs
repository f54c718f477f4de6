pub mod health;
pub mod settings;
pub mod thumbnail;
