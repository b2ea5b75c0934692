//! Bookshelf server
//!
//! A small REST JSON API over two in-memory collections: books, with a
//! borrow/return workflow and title search, and products, with CRUD and
//! price filtering.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the services described by `config` over empty collections
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let services = services::Services::new(&config.library).await?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
