//! Data models for Bookshelf

pub mod book;
pub mod product;

// Re-export commonly used types
pub use book::{Book, BookInput, BookSearchQuery};
pub use product::{CreateProduct, Product, ProductQuery, ProductSearchQuery, UpdateProduct};
