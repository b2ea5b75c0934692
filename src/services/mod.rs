//! Business logic services

pub mod books;
pub mod products;

use crate::{config::LibraryConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub products: products::ProductsService,
}

impl Services {
    /// Create all services over fresh in-memory collections
    pub async fn new(config: &LibraryConfig) -> AppResult<Self> {
        let repository = Repository::new(config);
        let services = Self {
            books: books::BooksService::new(repository.clone()),
            products: products::ProductsService::new(repository),
        };

        if config.seed_products {
            services.products.seed_demo().await?;
        }

        Ok(services)
    }
}
