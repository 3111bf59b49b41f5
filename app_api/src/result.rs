use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Standard `{message, data}` response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self { message: message.to_string(), data }
    }
}

pub fn result() -> Value {
    serde_json::json!({ "code": 200 })
}
