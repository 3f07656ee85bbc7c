//! Core data types for the Porkbun API client.
//!
//! This module defines the result structures produced by each command and
//! the client configuration options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a single domain availability check.
///
/// One of these is produced per API call and never mutated afterwards.
/// Price fields hold display strings straight from the API; when the API
/// omits a price the field carries the `"-"` sentinel, and when a bulk
/// lookup fails outright both prices carry `"error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// The domain name that was checked (e.g., "example.com")
    pub domain: String,

    /// Whether the domain is available for registration.
    /// True only if the API call reported overall success AND the
    /// domain-specific availability flag was truthy.
    pub available: bool,

    /// Registration price as reported by the API, or a sentinel
    pub price: String,

    /// Renewal price as reported by the API, or a sentinel
    pub renewal: String,

    /// Human-readable message from the API, if it sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One row of the TLD price list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRow {
    /// Top-level domain without the leading dot (e.g., "com", "de")
    pub tld: String,

    /// Registration price as a display string
    pub registration: String,

    /// Renewal price as a display string
    pub renewal: String,

    /// Registration price parsed as a number, used for sorting only
    #[serde(skip)]
    pub registration_value: f64,
}

/// Result of a credential verification ping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResult {
    /// The caller's IP address as seen by the API, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_ip: Option<String>,
}

/// Result of a successful domain registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// The domain that was registered
    pub domain: String,

    /// Registration price from the pre-registration check
    pub price: String,

    /// Renewal price from the pre-registration check, or a sentinel
    pub renewal: String,

    /// Total cost submitted with the request, in currency cents
    /// (registration price times the minimum registration duration)
    pub cost_cents: i64,

    /// Confirmation message from the API
    pub message: String,
}

/// Configuration options for the Porkbun client.
///
/// Covers the base endpoint, the HTTP timeout, and the fixed delay the
/// bulk checker waits between sequential requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the JSON API, without a trailing slash
    pub base_url: String,

    /// Timeout for each HTTP request
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Fixed wait between sequential bulk-check requests.
    /// The upstream API rate-limits aggressively; this is a politeness
    /// delay, not a backoff mechanism.
    /// Default: 1200 milliseconds
    pub bulk_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            bulk_delay: Duration::from_millis(1200),
        }
    }
}

impl ClientConfig {
    /// Override the API base URL (mainly useful for tests).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the delay between sequential bulk-check requests.
    pub fn with_bulk_delay(mut self, delay: Duration) -> Self {
        self.bulk_delay = delay;
        self
    }
}
