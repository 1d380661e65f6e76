//! Response envelope builder.
//!
//! Every response body is `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`, and every response carries the same two headers.
//! Success is always 200; any other status goes through [`error`].

use super::ApiResponse;
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

pub const CONTENT_TYPE: &str = "application/json";

const FALLBACK_BODY: &str = r#"{"success":false,"error":"Internal server error"}"#;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Headers attached to every response.
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

/// 200 response wrapping `data`.
pub fn success<T: Serialize>(data: &T) -> ApiResponse {
    respond(
        200,
        &Envelope {
            success: true,
            data: Some(data),
            error: None,
        },
    )
}

/// Error response with the given status and message.
pub fn error(status_code: u16, message: &str) -> ApiResponse {
    respond::<()>(
        status_code,
        &Envelope {
            success: false,
            data: None,
            error: Some(message),
        },
    )
}

fn respond<T: Serialize>(status_code: u16, envelope: &Envelope<'_, T>) -> ApiResponse {
    match serde_json::to_string(envelope) {
        Ok(body) => ApiResponse {
            status_code,
            headers: default_headers(),
            body,
        },
        Err(e) => {
            error!(error = %e, status_code, "Failed to serialize response");
            ApiResponse {
                status_code: 500,
                headers: default_headers(),
                body: FALLBACK_BODY.to_string(),
            }
        }
    }
}
