//! HTTP transport for the Porkbun JSON API.
//!
//! Thin adapter over `reqwest`: signed POST requests carrying the
//! credential pair merged with command-specific fields, and unauthenticated
//! GET requests for the public pricing endpoint. Every response body is
//! decoded as a dynamic `serde_json::Value`; the API's shapes vary too much
//! across endpoints for strongly-typed decoding to pay off.

use crate::credentials::ApiCredentials;
use crate::error::PorkbunError;
use crate::response::coerce_string;
use crate::types::ClientConfig;
use serde_json::{json, Map, Value};
use tracing::debug;

/// Low-level API transport.
///
/// Issues one blocking-per-await request at a time. The SUCCESS status gate
/// for signed endpoints lives here; GET responses are gated on the HTTP
/// status only, since the pricing parser checks `status` itself.
pub struct ApiTransport {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiTransport {
    /// Create a transport from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, PorkbunError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PorkbunError::network_with_source("Failed to create HTTP client", e.to_string())
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a signed POST request.
    ///
    /// The body is the credential pair merged with `fields`; fields win on
    /// key collisions. Returns the decoded response object.
    ///
    /// # Errors
    ///
    /// Returns `PorkbunError::ApiError` when the HTTP status is 400 or
    /// above, or when the response `status` field is not `"SUCCESS"`
    /// (case-insensitive). The API's `message` field, when present, becomes
    /// the error text.
    pub async fn post(
        &self,
        endpoint: &str,
        credentials: &ApiCredentials,
        fields: Map<String, Value>,
    ) -> Result<Value, PorkbunError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "POST");

        let mut payload = Map::new();
        payload.insert("apikey".to_string(), json!(credentials.api_key));
        payload.insert("secretapikey".to_string(), json!(credentials.secret_key));
        for (key, value) in fields {
            payload.insert(key, value);
        }

        let response = self
            .http_client
            .post(&url)
            .json(&Value::Object(payload))
            .send()
            .await?;

        let http_status = response.status();
        let data = response.json::<Value>().await.map_err(|e| {
            PorkbunError::ParseError {
                message: format!("failed to decode API response: {}", e),
            }
        })?;

        if http_status.as_u16() >= 400 {
            let message = response_message(&data)
                .unwrap_or_else(|| http_status.to_string());
            return Err(PorkbunError::api_with_status(
                endpoint,
                message,
                http_status.as_u16(),
            ));
        }

        if !status_is_success(&data) {
            let message =
                response_message(&data).unwrap_or_else(|| "request failed".to_string());
            return Err(PorkbunError::api(endpoint, message));
        }

        Ok(data)
    }

    /// Issue an unauthenticated GET request.
    ///
    /// # Errors
    ///
    /// Returns `PorkbunError::ApiError` when the HTTP status is 400 or
    /// above; the response `status` field is left for the caller.
    pub async fn get(&self, endpoint: &str) -> Result<Value, PorkbunError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "GET");

        let response = self.http_client.get(&url).send().await?;

        let http_status = response.status();
        if http_status.as_u16() >= 400 {
            return Err(PorkbunError::api_with_status(
                endpoint,
                format!("HTTP {}", http_status),
                http_status.as_u16(),
            ));
        }

        let data = response.json::<Value>().await.map_err(|e| {
            PorkbunError::ParseError {
                message: format!("failed to decode API response: {}", e),
            }
        })?;

        Ok(data)
    }
}

/// Whether a response object carries `status: "SUCCESS"` (case-insensitive).
pub(crate) fn status_is_success(data: &Value) -> bool {
    data.get("status")
        .and_then(coerce_string)
        .map(|s| s.eq_ignore_ascii_case("SUCCESS"))
        .unwrap_or(false)
}

/// Extract a non-empty `message` field from a response object.
pub(crate) fn response_message(data: &Value) -> Option<String> {
    data.get("message")
        .and_then(coerce_string)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_is_success_case_insensitive() {
        assert!(status_is_success(&json!({"status": "SUCCESS"})));
        assert!(status_is_success(&json!({"status": "success"})));
        assert!(!status_is_success(&json!({"status": "ERROR"})));
        assert!(!status_is_success(&json!({})));
        assert!(!status_is_success(&json!({"status": 1})));
    }

    #[test]
    fn test_response_message_skips_blank() {
        assert_eq!(
            response_message(&json!({"message": "Invalid API key."})),
            Some("Invalid API key.".to_string())
        );
        assert_eq!(response_message(&json!({"message": "   "})), None);
        assert_eq!(response_message(&json!({})), None);
    }

    #[test]
    fn test_transport_construction() {
        let transport = ApiTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_base_url("http://localhost:1234/");
        let transport = ApiTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "http://localhost:1234");
    }
}
