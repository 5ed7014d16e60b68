//! REST API handlers for product operations
//!
//! This module implements the HTTP endpoints for listing, reading,
//! creating, updating and deleting products, plus category statistics.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::AppError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

/// Creates routes for product operations.
///
/// `/products/stats/all` is registered before `/products/:id` so that
/// `stats` is never taken for a product id. Each route answers unsupported
/// methods with a 405 in the shared error format.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/stats/all",
            get(product_stats).fallback(method_not_allowed),
        )
        .route(
            "/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}

/// Endpoint: GET /products
/// Filters by `category` and `search`, then paginates with `page` and `limit`.
async fn list_products(
    State(state): State<SharedState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>, AppError> {
    let Query(query) = query?;
    let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE)?;
    let limit = parse_positive(query.limit.as_deref(), state.default_limit)?;

    let filter = ProductFilter {
        category: non_empty(query.category),
        search: non_empty(query.search),
    };

    let matches = state.products.list(&filter);

    Ok(Json(ListResponse {
        total: matches.len(),
        page,
        products: paginate(&matches, page, limit).to_vec(),
    }))
}

/// Endpoint: GET /products/stats/all
async fn product_stats(State(state): State<SharedState>) -> Json<ProductStats> {
    Json(state.products.stats())
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id?;
    state.products.get(&id).map(Json)
}

/// Endpoint: POST /products
/// Validates the body and stores it under a new id.
async fn create_product(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(body) = payload?;
    let input = validate_product(&body)?;

    Ok((StatusCode::CREATED, Json(state.products.create(input))))
}

/// Endpoint: PUT /products/:id
/// Requires the same complete body as a create.
async fn update_product(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let input = validate_product(&body)?;

    state.products.update(&id, input).map(Json)
}

/// Endpoint: DELETE /products/:id
async fn delete_product(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(id) = id?;
    state.products.delete(&id)?;

    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
