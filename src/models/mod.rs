//! Domain model and API DTOs
//!
//! The `Product` record plus the request/response types used for
//! serializing/deserializing HTTP bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Product, ProductFields};
pub use requests::{FilterQuery, ProductRequest};
pub use responses::{DataResponse, HealthResponse, MessageResponse, StatsResponse};
