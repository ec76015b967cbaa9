use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response payload for the Hello World endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    /// A friendly greeting from the API.
    pub message: String,
}

impl HelloResponse {
    pub fn hello_world() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
