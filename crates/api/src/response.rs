//! Shared response envelope for API handlers.
//!
//! Every `/api` response is `{ "success": bool, "data"?: T, "error"?: string }`
//! with absent fields omitted. Handlers build it through [`ApiResponse::ok`];
//! failures go through [`AppError`](crate::error::AppError).

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error() {
        let json = serde_json::to_value(ApiResponse::ok(1)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 1}));
    }

    #[test]
    fn failure_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "nope"}));
    }
}
