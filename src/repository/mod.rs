//! Repository layer holding the in-memory collections

pub mod books;
pub mod products;

use crate::config::LibraryConfig;

/// Main repository struct holding every collection
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub products: products::ProductsRepository,
}

impl Repository {
    /// Create empty collections configured with the library rules
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            books: books::BooksRepository::new(config),
            products: products::ProductsRepository::new(),
        }
    }
}
