//! Product endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::product::{CreateProduct, ProductQuery, ProductSearchQuery, UpdateProduct},
    AppState,
};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::response::{ApiResponse, ProductData, ProductList};

/// List products with price filter and pagination
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductList),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let products = state.services.products.list(&query).await?;
    Ok(ApiResponse::ok("Products retrieved", ProductList { products }))
}

/// Search products by name and price range
#[utoipa::path(
    get,
    path = "/products/search",
    tag = "products",
    params(ProductSearchQuery),
    responses(
        (status = 200, description = "Matching products", body = ProductList),
        (status = 400, description = "Invalid search parameters")
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductSearchQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let products = state.services.products.search(&query).await?;
    Ok(ApiResponse::ok("Search results", ProductList { products }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductData),
        (status = 400, description = "ID must be positive"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<ProductData>>> {
    let product = state.services.products.get_by_id(id).await?;
    Ok(ApiResponse::ok("Product found", ProductData { product }))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductData),
        (status = 400, description = "Product name already exists")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductData>>)> {
    let product = state.services.products.create(data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Product created successfully", ProductData { product }),
    ))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductData),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateProduct>,
) -> AppResult<Json<ApiResponse<ProductData>>> {
    let product = state.services.products.update(id, data).await?;
    Ok(ApiResponse::ok("Product updated successfully", ProductData { product }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted product", body = ProductData),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<ProductData>>> {
    let product = state.services.products.delete(id).await?;
    Ok(ApiResponse::ok("Product deleted successfully", ProductData { product }))
}
