//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;

/// Envelope for successful responses carrying a payload.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    /// The response payload
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wraps a payload in the response envelope.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response body for the delete operation (DELETE /products/:id).
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats).
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<StatsSnapshot> for StatsResponse {
    /// Builds the response body from a counter snapshot; the rate comes from
    /// the snapshot itself rather than being recomputed here.
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            hit_rate: snapshot.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_response_serialize() {
        let resp = DataResponse::new(vec!["a", "b"]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"data\""));
        assert!(json.contains("\"a\""));
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("Product deleted successfully");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::from(StatsSnapshot {
            hits: 80,
            misses: 20,
        });
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(StatsSnapshot { hits: 0, misses: 0 });
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_stats_response_rate_matches_snapshot() {
        let snapshot = StatsSnapshot { hits: 3, misses: 1 };
        let resp = StatsResponse::from(snapshot);
        assert_eq!(resp.hit_rate, snapshot.hit_rate());
        assert_eq!(resp.hits, 3);
        assert_eq!(resp.misses, 1);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
