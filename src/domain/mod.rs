pub mod auth;
pub mod catalog;
pub mod listing;
pub mod settings;
pub mod thumbnail;
