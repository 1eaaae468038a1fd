//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
///
/// Absence of a record is normally expressed as `Option::None` by the
/// coordinator; `NotFound` exists so the HTTP layer can turn that absence
/// into a 404 response.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product does not exist in the store
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Malformed filter or request parameter, rejected before any I/O
    #[error("Invalid value for {field}")]
    Validation {
        /// Name of the offending field
        field: String,
    },

    /// The persistent store could not be reached; fatal for the operation
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The cache could not be reached; reads degrade to the store,
    /// invalidations are logged and skipped
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),
}

impl CatalogError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: impl Into<String>) -> Self {
        CatalogError::Validation {
            field: field.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Validation { .. } => StatusCode::BAD_REQUEST,
            CatalogError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::CacheUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
