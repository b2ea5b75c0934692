//! Book model and input validation

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// ISBN-13 with the `978`/`979` prefix followed by a dash and ten digits
static ISBN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^97[89]-\d{10}$").expect("valid ISBN pattern"));

pub const MIN_YEAR: i32 = 1800;
pub const BESTSELLER_MIN_RATING: f64 = 4.0;
/// Books published before this year must be priced at least `OLD_BOOK_MIN_PRICE`
pub const OLD_BOOK_YEAR: i32 = 1900;
pub const OLD_BOOK_MIN_PRICE: f64 = 5.0;

/// Book record as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// ISBN, e.g. `978-0441172719`
    pub isbn: String,
    pub year: i32,
    /// Rating between 0 and 5
    pub rating: f64,
    pub tags: Vec<String>,
    pub price: f64,
    pub is_available: bool,
    pub is_bestseller: bool,
}

impl Book {
    /// Build a new, available book from validated input
    pub fn from_input(id: i32, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            year: input.year,
            rating: input.rating,
            tags: input.tags,
            price: input.price,
            is_available: true,
            is_bestseller: input.is_bestseller,
        }
    }

    /// Replace the descriptive fields, keeping id and lending state
    pub fn apply(&mut self, input: BookInput) {
        self.title = input.title;
        self.author = input.author;
        self.isbn = input.isbn;
        self.year = input.year;
        self.rating = input.rating;
        self.tags = input.tags;
        self.price = input.price;
        self.is_bestseller = input.is_bestseller;
    }
}

/// Create/replace book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 2, max = 200, message = "Title must be between 2 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 2, message = "Author must be at least 2 characters"))]
    pub author: String,
    #[validate(regex(path = *ISBN_PATTERN, message = "ISBN must look like 978-XXXXXXXXXX"))]
    pub isbn: String,
    #[validate(range(min = 1800, message = "Year must not be before 1800"))]
    pub year: i32,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub is_bestseller: bool,
}

impl BookInput {
    /// Run field-level then cross-field rules and normalize the title.
    pub fn validated(mut self) -> AppResult<Self> {
        self.validate()?;

        let current_year = Utc::now().year();
        if self.year > current_year {
            return Err(AppError::InvalidField(format!(
                "year: must be between {} and {}",
                MIN_YEAR, current_year
            )));
        }

        if is_numeric(&self.author) {
            return Err(AppError::InvalidField(
                "author: must not be only digits".to_string(),
            ));
        }

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(AppError::InvalidField(
                "price: must be greater than 0".to_string(),
            ));
        }

        if has_duplicates(&self.tags) {
            return Err(AppError::InvalidField(
                "tags: duplicate tags are not allowed".to_string(),
            ));
        }

        if self.is_bestseller && self.rating < BESTSELLER_MIN_RATING {
            return Err(AppError::InvalidField(format!(
                "bestsellers must have a rating of at least {}",
                BESTSELLER_MIN_RATING
            )));
        }

        if self.year < OLD_BOOK_YEAR && self.price < OLD_BOOK_MIN_PRICE {
            return Err(AppError::InvalidField(format!(
                "books published before {} must cost at least {}",
                OLD_BOOK_YEAR, OLD_BOOK_MIN_PRICE
            )));
        }

        self.title = title_case(&self.title);
        Ok(self)
    }
}

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Substring to look for in titles (at least 2 characters)
    pub q: Option<String>,
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

fn has_duplicates(tags: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(tags.len());
    !tags.iter().all(|tag| seen.insert(tag.as_str()))
}

/// Upper-case the first letter of every word and lower-case the rest.
/// A word is any run of alphabetic characters.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
