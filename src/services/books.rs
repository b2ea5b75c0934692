//! Book catalog and lending service

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
    repository::Repository,
};

/// Lending occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LendingStatus {
    pub borrowed: usize,
    pub capacity: usize,
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Validate and add a new book
    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        let input = input.validated()?;
        let book = self.repository.books.create(input).await?;
        tracing::info!("Book created: id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }

    /// Validate and replace an existing book's fields
    pub async fn update(&self, id: i32, input: BookInput) -> AppResult<Book> {
        let input = input.validated()?;
        let book = self.repository.books.update(id, input).await?;
        tracing::info!("Book updated: id={}", book.id);
        Ok(book)
    }

    /// Search titles; a missing query is treated as empty
    pub async fn search(&self, query: Option<&str>) -> AppResult<Vec<Book>> {
        let query = query.unwrap_or_default();
        tracing::debug!("Searching books for {:?}", query);
        self.repository.books.search_title(query).await
    }

    pub async fn borrow(&self, id: i32) -> AppResult<Book> {
        match self.repository.books.borrow(id).await {
            Ok(book) => {
                tracing::info!("Book {} borrowed", id);
                Ok(book)
            }
            Err(e) => {
                tracing::warn!("Borrow of book {} rejected: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn return_book(&self, id: i32) -> AppResult<Book> {
        match self.repository.books.return_book(id).await {
            Ok(book) => {
                tracing::info!("Book {} returned", id);
                Ok(book)
            }
            Err(e) => {
                tracing::warn!("Return of book {} rejected: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn borrowed(&self) -> Vec<Book> {
        self.repository.books.borrowed().await
    }

    pub async fn lending_status(&self) -> LendingStatus {
        LendingStatus {
            borrowed: self.repository.books.borrowed_count().await,
            capacity: self.repository.books.max_borrowed(),
        }
    }
}
