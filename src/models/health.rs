use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: "Healthy".to_string(),
        }
    }
}
