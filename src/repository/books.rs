//! In-memory book store and lending tracker

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tokio::sync::RwLock;

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

/// Books in insertion order plus the ids currently lent out.
///
/// `borrowed` is an index over `books`: an id is in it exactly when the
/// matching record has `is_available == false`. Both are only mutated
/// together, under the same write lock.
#[derive(Debug, Default)]
struct Shelf {
    books: IndexMap<i32, Book>,
    borrowed: IndexSet<i32>,
}

impl Shelf {
    fn next_id(&self) -> i32 {
        self.books.keys().max().map_or(1, |max| max + 1)
    }

    fn isbn_taken(&self, isbn: &str, except: Option<i32>) -> bool {
        self.books
            .values()
            .any(|book| book.isbn == isbn && Some(book.id) != except)
    }

    fn insert(&mut self, input: BookInput) -> AppResult<Book> {
        if self.isbn_taken(&input.isbn, None) {
            return Err(AppError::DuplicateKey(format!(
                "A book with ISBN {} already exists",
                input.isbn
            )));
        }

        let book = Book::from_input(self.next_id(), input);
        self.books.insert(book.id, book.clone());
        Ok(book)
    }

    fn update(&mut self, id: i32, input: BookInput) -> AppResult<Book> {
        if !self.books.contains_key(&id) {
            return Err(not_found(id));
        }
        if self.isbn_taken(&input.isbn, Some(id)) {
            return Err(AppError::DuplicateKey(format!(
                "A book with ISBN {} already exists",
                input.isbn
            )));
        }

        let book = self.books.get_mut(&id).ok_or_else(|| not_found(id))?;
        book.apply(input);
        Ok(book.clone())
    }

    fn borrow(&mut self, id: i32, capacity: usize) -> AppResult<Book> {
        let book = self.books.get_mut(&id).ok_or_else(|| not_found(id))?;
        if !book.is_available {
            return Err(AppError::NotAvailable(format!("Book {} is already borrowed", id)));
        }
        if self.borrowed.len() >= capacity {
            return Err(AppError::CapacityExceeded(format!(
                "Borrow limit of {} books reached",
                capacity
            )));
        }

        book.is_available = false;
        self.borrowed.insert(id);
        Ok(book.clone())
    }

    fn return_book(&mut self, id: i32) -> AppResult<Book> {
        if !self.borrowed.contains(&id) {
            if self.books.contains_key(&id) {
                return Err(AppError::NotBorrowed(format!(
                    "Book {} is not currently borrowed",
                    id
                )));
            }
            return Err(not_found(id));
        }

        let book = self.books.get_mut(&id).ok_or_else(|| {
            AppError::Internal(format!("Borrowed book {} is missing from the store", id))
        })?;
        book.is_available = true;
        self.borrowed.shift_remove(&id);
        Ok(book.clone())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found", id))
}

/// Shared handle to the book store
#[derive(Clone)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
    max_borrowed: usize,
    min_query_length: usize,
}

impl BooksRepository {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf::default())),
            max_borrowed: config.max_borrowed,
            min_query_length: config.min_query_length,
        }
    }

    /// All books in store order
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.shelf
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Insert a validated book under the next free id
    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        self.shelf.write().await.insert(input)
    }

    /// Replace the descriptive fields of an existing book
    pub async fn update(&self, id: i32, input: BookInput) -> AppResult<Book> {
        self.shelf.write().await.update(id, input)
    }

    /// Case-insensitive title substring search, in store order
    pub async fn search_title(&self, query: &str) -> AppResult<Vec<Book>> {
        if query.chars().count() < self.min_query_length {
            return Err(AppError::InvalidQuery(format!(
                "Search term must be at least {} characters",
                self.min_query_length
            )));
        }

        let needle = query.to_lowercase();
        Ok(self
            .shelf
            .read()
            .await
            .books
            .values()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Mark a book as borrowed and track it
    pub async fn borrow(&self, id: i32) -> AppResult<Book> {
        self.shelf.write().await.borrow(id, self.max_borrowed)
    }

    /// Mark a borrowed book as available again
    pub async fn return_book(&self, id: i32) -> AppResult<Book> {
        self.shelf.write().await.return_book(id)
    }

    /// Books currently lent out, in borrow order
    pub async fn borrowed(&self) -> Vec<Book> {
        let shelf = self.shelf.read().await;
        shelf
            .borrowed
            .iter()
            .filter_map(|id| shelf.books.get(id).cloned())
            .collect()
    }

    pub async fn borrowed_count(&self) -> usize {
        self.shelf.read().await.borrowed.len()
    }

    pub async fn is_borrowed(&self, id: i32) -> bool {
        self.shelf.read().await.borrowed.contains(&id)
    }

    pub fn max_borrowed(&self) -> usize {
        self.max_borrowed
    }
}
