//! Bookstore Server
//!
//! A Rust REST API server exposing CRUD operations over a MongoDB book
//! catalog plus an untyped Users collection.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database handle, kept for readiness pings
    pub database: mongodb::Database,
    pub services: Arc<services::Services>,
}
