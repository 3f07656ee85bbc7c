//! # porkctl Library
//!
//! A client library for the Porkbun domain registrar's JSON/HTTP API.
//!
//! This library covers the small surface a registrar CLI needs: verifying API
//! credentials, checking domain availability (single and bulk), registering
//! domains, and fetching TLD pricing. All requests are issued sequentially;
//! the upstream API enforces an implicit rate limit, so the bulk checker
//! waits a fixed delay between calls instead of fanning out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use porkctl_lib::{ApiCredentials, PorkbunClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ApiCredentials::load()?;
//!     let client = PorkbunClient::new(credentials)?;
//!     let result = client.check_domain("example.com").await?;
//!
//!     println!("Domain: {} - Available: {}", result.domain, result.available);
//!     Ok(())
//! }
//! ```

// Re-export main public API types and functions
// This makes them available as porkctl_lib::TypeName
pub use client::{sort_check_results, PorkbunClient};
pub use credentials::{ApiCredentials, ENV_FILE_OVERRIDE};
pub use error::PorkbunError;
pub use pricing::{parse_pricing, MAX_PRICING_ROWS};
pub use response::{
    min_duration, normalize_check, registration_cost_cents, CheckOutcome, PRICE_ERROR,
    PRICE_UNKNOWN,
};
pub use types::{CheckResult, ClientConfig, PingResult, PricingRow, RegistrationOutcome};

// Internal modules - these are not part of the public API
mod client;
mod credentials;
mod error;
mod pricing;
mod response;
mod transport;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, PorkbunError>;

// Library version, shared with the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base endpoint of the Porkbun JSON API (version 3).
pub const API_BASE: &str = "https://api.porkbun.com/api/json/v3";
