//! Product catalog service

use crate::{
    error::{AppError, AppResult},
    models::product::{
        CreateProduct, Product, ProductQuery, ProductSearchQuery, UpdateProduct,
        DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
    },
    repository::Repository,
};

const MIN_SEARCH_LENGTH: usize = 2;

#[derive(Clone)]
pub struct ProductsService {
    repository: Repository,
}

impl ProductsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Load the demo catalog
    pub async fn seed_demo(&self) -> AppResult<()> {
        let demo = [
            ("Gaming Laptop", 1500.0, 10, "High-end gaming laptop"),
            ("Wireless Mouse", 45.0, 50, "Ergonomic wireless mouse"),
        ];
        for (name, price, stock, description) in demo {
            self.repository
                .products
                .create(CreateProduct {
                    name: name.to_string(),
                    price,
                    stock,
                    description: Some(description.to_string()),
                })
                .await?;
        }
        tracing::info!("Loaded {} demo products", demo.len());
        Ok(())
    }

    /// Filter by price range, then slice `[skip, skip + limit)`
    pub async fn list(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit > MAX_PAGE_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be at most {}",
                MAX_PAGE_LIMIT
            )));
        }
        let skip = query.skip.unwrap_or(0);

        tracing::info!("Listing products (skip={}, limit={})", skip, limit);
        let products = self
            .repository
            .products
            .list_by_price(query.min_price, query.max_price)
            .await;
        Ok(products.into_iter().skip(skip).take(limit).collect())
    }

    /// Search by name and price range
    pub async fn search(&self, query: &ProductSearchQuery) -> AppResult<Vec<Product>> {
        let name = match query.name.as_deref() {
            Some(raw) if !raw.is_empty() => {
                let name = raw.trim().to_lowercase();
                if name.chars().count() < MIN_SEARCH_LENGTH {
                    return Err(AppError::InvalidQuery(format!(
                        "Search term must be at least {} characters",
                        MIN_SEARCH_LENGTH
                    )));
                }
                Some(name)
            }
            _ => None,
        };

        if query.min_price.is_some_and(|p| p < 0.0) {
            return Err(AppError::BadRequest("min_price must not be negative".to_string()));
        }
        if query.max_price.is_some_and(|p| p < 0.0) {
            return Err(AppError::BadRequest("max_price must not be negative".to_string()));
        }
        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(AppError::BadRequest(format!(
                    "min_price ({}) must not exceed max_price ({})",
                    min, max
                )));
            }
        }

        Ok(self
            .repository
            .products
            .search(name.as_deref(), query.min_price, query.max_price)
            .await)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        tracing::info!("Looking up product {}", id);
        if id <= 0 {
            return Err(AppError::BadRequest("Product ID must be greater than 0".to_string()));
        }
        self.repository.products.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        let data = data.validated()?;
        let product = self.repository.products.create(data).await?;
        tracing::info!("Product created: id={} name={}", product.id, product.name);
        Ok(product)
    }

    pub async fn update(&self, id: i32, data: UpdateProduct) -> AppResult<Product> {
        let data = data.validated()?;
        let product = self.repository.products.update(id, data).await?;
        tracing::info!("Product updated: id={}", product.id);
        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> AppResult<Product> {
        let product = self.repository.products.delete(id).await?;
        tracing::info!("Product deleted: id={}", id);
        Ok(product)
    }
}
