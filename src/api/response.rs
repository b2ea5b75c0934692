//! Success envelope and response payloads

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Book, Product};

/// `{ success, message, data, timestamp }` wrapper for every successful response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        })
    }
}

/// Payload for endpoints without data
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<Book>,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowedBooks {
    pub books: Vec<Book>,
    /// Number of books currently lent out
    pub borrowed: usize,
    /// Maximum number of books that can be lent out at once
    pub capacity: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductData {
    pub product: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}
