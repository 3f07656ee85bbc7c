//! Error handling for Porkbun API operations.
//!
//! This module defines a single error type that covers all the different
//! ways a registrar command can fail, from a missing credential file to an
//! API-reported rejection.

use std::fmt;

/// Main error type for Porkbun API operations.
///
/// The taxonomy mirrors how failures are handled: configuration and local
/// validation errors are always fatal, network and API errors are fatal for
/// single-domain commands but absorbed into sentinel rows by the bulk
/// checker. Nothing is ever retried.
#[derive(Debug, Clone)]
pub enum PorkbunError {
    /// Credential file missing, unreadable, or incomplete
    ConfigError { message: String },

    /// File I/O errors when reading the credential file
    FileError { path: String, message: String },

    /// Network-related errors (connection, timeout, etc.)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// The API answered, but with a non-success status or HTTP error
    ApiError {
        endpoint: String,
        message: String,
        status_code: Option<u16>,
    },

    /// JSON decoding errors for API responses
    ParseError { message: String },

    /// A price string from the API failed to parse as a decimal number.
    /// Fatal before any registration request is sent.
    InvalidPrice { domain: String, price: String },

    /// Registration was requested for a domain that is not available
    DomainUnavailable { domain: String },

    /// The registration request itself was rejected by the API
    RegistrationFailed { domain: String, message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl PorkbunError {
    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new API error.
    pub fn api<E: Into<String>, M: Into<String>>(endpoint: E, message: M) -> Self {
        Self::ApiError {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a new API error with HTTP status code.
    pub fn api_with_status<E: Into<String>, M: Into<String>>(
        endpoint: E,
        message: M,
        status_code: u16,
    ) -> Self {
        Self::ApiError {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new invalid-price error.
    pub fn invalid_price<D: Into<String>, P: Into<String>>(domain: D, price: P) -> Self {
        Self::InvalidPrice {
            domain: domain.into(),
            price: price.into(),
        }
    }

    /// Create a new domain-unavailable error.
    pub fn unavailable<D: Into<String>>(domain: D) -> Self {
        Self::DomainUnavailable {
            domain: domain.into(),
        }
    }

    /// Create a new registration-failed error.
    pub fn registration_failed<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::RegistrationFailed {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The human-readable reason the API reported, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } | Self::RegistrationFailed { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PorkbunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::ApiError {
                endpoint,
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "API error for '{}' (HTTP {}): {}", endpoint, code, message)
                } else {
                    write!(f, "API error for '{}': {}", endpoint, message)
                }
            }
            Self::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            Self::InvalidPrice { domain, price } => {
                write!(f, "invalid registration price \"{}\" for '{}'", price, domain)
            }
            Self::DomainUnavailable { domain } => {
                write!(f, "domain '{}' is not available", domain)
            }
            Self::RegistrationFailed { domain, message } => {
                write!(f, "registration of '{}' failed: {}", domain, message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for PorkbunError {}

// Implement From conversions for common error types
impl From<reqwest::Error> for PorkbunError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timed out", err.to_string())
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for PorkbunError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: format!("JSON parsing failed: {}", err),
        }
    }
}

impl From<std::io::Error> for PorkbunError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
