//! Product model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE_LIMIT: usize = 10;
pub const MAX_PAGE_LIMIT: usize = 50;

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    pub description: Option<String>,
}

impl CreateProduct {
    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        check_price(self.price)?;
        Ok(self)
    }
}

/// Update product request, only provided fields change
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl UpdateProduct {
    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        if let Some(price) = self.price {
            check_price(price)?;
        }
        Ok(self)
    }
}

/// List query: price range then `[skip, skip + limit)`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub skip: Option<usize>,
    /// Page size (default 10, at most 50)
    pub limit: Option<usize>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Search query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchQuery {
    /// Substring to look for in names (at least 2 characters)
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn check_price(price: f64) -> AppResult<()> {
    if price > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidField("price: must be greater than 0".to_string()))
    }
}
