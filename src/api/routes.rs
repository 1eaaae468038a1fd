//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_product, delete_product, filter_products, get_product, health_handler, list_products,
    stats_handler, update_product, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - Full product list
/// - `POST /products` - Create a product
/// - `GET /products/filter` - Filtered product list
/// - `GET /products/:id` - Fetch a product
/// - `PUT /products/:id` - Replace a product
/// - `DELETE /products/:id` - Remove a product
/// - `GET /stats` - Cache hit/miss statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints. The static /products/filter segment
    // takes priority over the :id capture.
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/filter", get(filter_products))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::{CacheClient, MemoryCache};
    use crate::catalog::CatalogService;
    use crate::store::MemoryStore;

    fn create_test_app() -> Router {
        let store = Arc::new(MemoryStore::new());
        let cache = CacheClient::new(Arc::new(MemoryCache::new()));
        let state = AppState::new(CatalogService::new(store, cache, 600, 300));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/products")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Drone","category":"Electronics","price":499.0,"stock":10}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_filter_route_not_captured_by_id() {
        let app = create_test_app();

        // /products/filter must reach the filter handler, not /products/:id
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products/filter?category=Bike")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
