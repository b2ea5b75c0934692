//! In-memory product catalog

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, Product, UpdateProduct},
};

#[derive(Clone, Default)]
pub struct ProductsRepository {
    catalog: Arc<RwLock<IndexMap<i32, Product>>>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}

fn name_taken(catalog: &IndexMap<i32, Product>, name: &str, except: Option<i32>) -> bool {
    let name = name.to_lowercase();
    catalog
        .values()
        .any(|p| p.name.to_lowercase() == name && Some(p.id) != except)
}

fn in_price_range(product: &Product, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    min_price.map_or(true, |min| product.price >= min)
        && max_price.map_or(true, |max| product.price <= max)
}

impl ProductsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products whose price lies in the given range, in catalog order
    pub async fn list_by_price(&self, min_price: Option<f64>, max_price: Option<f64>) -> Vec<Product> {
        self.catalog
            .read()
            .await
            .values()
            .filter(|p| in_price_range(p, min_price, max_price))
            .cloned()
            .collect()
    }

    /// Name substring (already lowercased) and price range filter
    pub async fn search(
        &self,
        name: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Vec<Product> {
        self.catalog
            .read()
            .await
            .values()
            .filter(|p| name.map_or(true, |n| p.name.to_lowercase().contains(n)))
            .filter(|p| in_price_range(p, min_price, max_price))
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.catalog
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Create a product; names are unique regardless of case
    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        let mut catalog = self.catalog.write().await;
        if name_taken(&catalog, &data.name, None) {
            return Err(AppError::DuplicateKey(format!(
                "Product '{}' already exists",
                data.name
            )));
        }

        let id = catalog.keys().max().map_or(1, |max| max + 1);
        let product = Product {
            id,
            name: data.name,
            price: data.price,
            stock: data.stock,
            description: data.description,
            created_at: Utc::now(),
        };
        catalog.insert(id, product.clone());
        Ok(product)
    }

    /// Apply the provided fields
    pub async fn update(&self, id: i32, data: UpdateProduct) -> AppResult<Product> {
        let mut catalog = self.catalog.write().await;
        if !catalog.contains_key(&id) {
            return Err(not_found(id));
        }
        if let Some(ref name) = data.name {
            if name_taken(&catalog, name, Some(id)) {
                return Err(AppError::DuplicateKey(format!(
                    "Product '{}' already exists",
                    name
                )));
            }
        }

        let product = catalog.get_mut(&id).ok_or_else(|| not_found(id))?;
        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(price) = data.price {
            product.price = price;
        }
        if let Some(stock) = data.stock {
            product.stock = stock;
        }
        if let Some(description) = data.description {
            product.description = Some(description);
        }
        Ok(product.clone())
    }

    /// Remove a product and return it
    pub async fn delete(&self, id: i32) -> AppResult<Product> {
        self.catalog
            .write()
            .await
            .shift_remove(&id)
            .ok_or_else(|| not_found(id))
    }

    pub async fn count(&self) -> usize {
        self.catalog.read().await.len()
    }
}
