//! Invocation boundary types.
//!
//! [`ApiRequest`] and [`ApiResponse`] mirror the API Gateway proxy event and response
//! (camelCase on the wire), which is what the function host hands us and expects back.
//! Nothing here knows about records; the router reads these and the envelope builder
//! writes them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Inbound request as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, deserialize_with = "nullable_map")]
    pub path_parameters: HashMap<String, String>,
    #[serde(default, deserialize_with = "nullable_map")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

// The host sends `null` rather than `{}` when there are no parameters.
fn nullable_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Non-empty segments of the request path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }

    /// The collection the path addresses: `users` for `/users/2`.
    pub fn resource(&self) -> Option<&str> {
        self.segments().next()
    }

    /// Raw record identifier, unparsed.
    ///
    /// Taken from the `id` path parameter when the host resolved one, otherwise from the
    /// second path segment (`/users/{id}`).
    pub fn record_id(&self) -> Option<&str> {
        self.path_parameters
            .get("id")
            .map(String::as_str)
            .or_else(|| self.segments().nth(1))
    }

    /// The same request with `base` removed from the front of the path.
    ///
    /// Matching is per segment, so `/api` strips `/api/users` but not `/apix/users`.
    /// Returns `None` when the path does not start with `base`.
    pub fn strip_base_path(&self, base: &str) -> Option<Self> {
        let mut segments = self.segments();
        for expected in base.split('/').filter(|segment| !segment.is_empty()) {
            if segments.next() != Some(expected) {
                return None;
            }
        }
        let rest: Vec<&str> = segments.collect();
        Some(Self {
            path: format!("/{}", rest.join("/")),
            ..self.clone()
        })
    }
}

/// Outbound response handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// Parses the body back into JSON.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}
