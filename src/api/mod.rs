//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products` - Full product list
//! - `POST /products` - Create a product
//! - `GET /products/filter` - Filtered product list
//! - `GET /products/:id` - Fetch a product
//! - `PUT /products/:id` - Replace a product
//! - `DELETE /products/:id` - Remove a product
//! - `GET /stats` - Cache hit/miss statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
