//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. Handlers translate the
//! coordinator's results into responses: absence becomes a 404, validation
//! failures a 400, store failures a 500.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::catalog::CatalogService;
use crate::error::{CatalogError, Result};
use crate::models::{
    DataResponse, FilterQuery, HealthResponse, MessageResponse, Product, ProductRequest,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The catalog service is cheap to clone; it shares its store and cache
/// handles internally.
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside catalog coordinator
    pub catalog: CatalogService,
}

impl AppState {
    /// Creates a new AppState around the given catalog service.
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// Handler for GET /products
///
/// Returns the full product list, served cache-aside.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Product>>>> {
    let products = state.catalog.list_all().await?;
    Ok(Json(DataResponse::new(products)))
}

/// Handler for GET /products/:id
///
/// Returns a single product or 404.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Product>>> {
    let product = state
        .catalog
        .get(&id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;
    Ok(Json(DataResponse::new(product)))
}

/// Handler for POST /products
///
/// Inserts a new product; the store assigns the identifier.
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<DataResponse<Product>>)> {
    if let Some(field) = req.validate() {
        return Err(CatalogError::validation(field));
    }

    let product = state.catalog.create(req.into_fields()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// Handler for PUT /products/:id
///
/// Replaces a product's fields or returns 404.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<DataResponse<Product>>> {
    if let Some(field) = req.validate() {
        return Err(CatalogError::validation(field));
    }

    let product = state
        .catalog
        .update(&id, req.into_fields())
        .await?
        .ok_or(CatalogError::NotFound(id))?;
    Ok(Json(DataResponse::new(product)))
}

/// Handler for DELETE /products/:id
///
/// Removes a product or returns 404.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    if !state.catalog.delete(&id).await? {
        return Err(CatalogError::NotFound(id));
    }
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// Handler for GET /products/filter
///
/// Returns products matching the category/price-range filter, or 400 when a
/// price parameter does not parse.
pub async fn filter_products(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<DataResponse<Vec<Product>>>> {
    let products = state.catalog.filter(query).await?;
    Ok(Json(DataResponse::new(products)))
}

/// Handler for GET /stats
///
/// Returns cache hit/miss counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.catalog.stats()))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
