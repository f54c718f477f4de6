pub mod auth;
pub mod config;
pub mod db;
pub mod http;
pub mod rendering;
pub mod repositories;
