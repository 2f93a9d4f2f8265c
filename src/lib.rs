// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, AppState};
pub use routes::build_router;
