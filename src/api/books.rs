//! Book catalog and lending endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{BookInput, BookSearchQuery},
    AppState,
};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::response::{ApiResponse, BookData, BookList, BorrowedBooks};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = BookList)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<ApiResponse<BookList>> {
    let books = state.services.books.list().await;
    let total = books.len();
    ApiResponse::ok("Books retrieved", BookList { books, total })
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = BookData),
        (status = 400, description = "ISBN already exists"),
        (status = 422, description = "Invalid field")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BookInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookData>>)> {
    let book = state.services.books.create(input).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Book created successfully", BookData { book }),
    ))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookData),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(ApiResponse::ok("Book found", BookData { book }))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = BookData),
        (status = 400, description = "ISBN already used by another book"),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Invalid field")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<BookInput>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.books.update(id, input).await?;
    Ok(ApiResponse::ok("Book updated successfully", BookData { book }))
}

/// Search books by title
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books", body = BookList),
        (status = 400, description = "Search term too short")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookSearchQuery>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    let books = state.services.books.search(query.q.as_deref()).await?;
    let total = books.len();
    Ok(ApiResponse::ok("Search results", BookList { books, total }))
}

/// List books currently lent out
#[utoipa::path(
    get,
    path = "/books/borrowed",
    tag = "books",
    responses(
        (status = 200, description = "Borrowed books", body = BorrowedBooks)
    )
)]
pub async fn list_borrowed(State(state): State<AppState>) -> Json<ApiResponse<BorrowedBooks>> {
    let books = state.services.books.borrowed().await;
    let status = state.services.books.lending_status().await;
    ApiResponse::ok(
        "Borrowed books",
        BorrowedBooks {
            books,
            borrowed: status.borrowed,
            capacity: status.capacity,
        },
    )
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/books/{id}/borrow",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book borrowed", body = BookData),
        (status = 400, description = "Borrow limit reached"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book already borrowed")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.books.borrow(id).await?;
    Ok(ApiResponse::ok("Book borrowed successfully", BookData { book }))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/books/{id}/return",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book returned", body = BookData),
        (status = 404, description = "Book not found or not currently borrowed")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.books.return_book(id).await?;
    Ok(ApiResponse::ok("Book returned successfully", BookData { book }))
}
