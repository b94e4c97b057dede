/*
 * Responsibility
 * - Request/response DTOs of the sample routes
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub success: bool,
    pub message: String,
}

impl SampleResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Any JSON value is accepted for `name`; only the body's syntax is checked.
#[derive(Debug, Default, Deserialize)]
pub struct SamplePostRequest {
    #[serde(default)]
    pub name: Option<Value>,
}
