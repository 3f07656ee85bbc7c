//! Main Porkbun API client.
//!
//! This module provides the `PorkbunClient` struct that composes the
//! transport, the response normalizer, and the pricing parser into the
//! operations the CLI exposes: ping, single and bulk availability checks,
//! registration, and the TLD price list.

use crate::credentials::ApiCredentials;
use crate::error::PorkbunError;
use crate::pricing::parse_pricing;
use crate::response::{
    min_duration, normalize_check, registration_cost_cents, PRICE_ERROR,
};
use crate::transport::{response_message, ApiTransport};
use crate::types::{CheckResult, ClientConfig, PingResult, PricingRow, RegistrationOutcome};
use serde_json::{json, Map};
use tracing::{debug, warn};

/// Client for the Porkbun registrar API.
///
/// Holds the credential pair for the lifetime of the process invocation
/// and issues strictly sequential requests. There is no retry, no token
/// refresh, and no caching of prior lookups.
///
/// # Example
///
/// ```rust,no_run
/// use porkctl_lib::{ApiCredentials, PorkbunClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PorkbunClient::new(ApiCredentials::load()?)?;
///     let result = client.check_domain("example.com").await?;
///     println!("Available: {}", result.available);
///     Ok(())
/// }
/// ```
pub struct PorkbunClient {
    credentials: Option<ApiCredentials>,
    transport: ApiTransport,
    config: ClientConfig,
}

impl PorkbunClient {
    /// Create a client with default configuration.
    pub fn new(credentials: ApiCredentials) -> Result<Self, PorkbunError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client without credentials.
    ///
    /// Only the public pricing endpoint works on an anonymous client;
    /// signed operations return a configuration error.
    pub fn anonymous(config: ClientConfig) -> Result<Self, PorkbunError> {
        let transport = ApiTransport::new(&config)?;
        Ok(Self {
            credentials: None,
            transport,
            config,
        })
    }

    /// Create a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use porkctl_lib::{ApiCredentials, ClientConfig, PorkbunClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::default().with_bulk_delay(Duration::from_millis(500));
    /// let client = PorkbunClient::with_config(
    ///     ApiCredentials::new("pk", "sk"),
    ///     config,
    /// ).unwrap();
    /// ```
    pub fn with_config(
        credentials: ApiCredentials,
        config: ClientConfig,
    ) -> Result<Self, PorkbunError> {
        let transport = ApiTransport::new(&config)?;
        Ok(Self {
            credentials: Some(credentials),
            transport,
            config,
        })
    }

    /// Get the current configuration for this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The credential pair, or a configuration error on anonymous clients.
    fn credentials(&self) -> Result<&ApiCredentials, PorkbunError> {
        self.credentials
            .as_ref()
            .ok_or_else(|| PorkbunError::config("this operation requires API credentials"))
    }

    /// Verify that the API key pair works.
    ///
    /// # Errors
    ///
    /// Returns `PorkbunError::ApiError` with the API's message when the
    /// credentials are rejected, or a network error when the endpoint is
    /// unreachable.
    pub async fn ping(&self) -> Result<PingResult, PorkbunError> {
        let data = self
            .transport
            .post("/ping", self.credentials()?, Map::new())
            .await?;

        Ok(PingResult {
            your_ip: data
                .get("yourIp")
                .and_then(crate::response::coerce_string)
                .filter(|ip| !ip.is_empty()),
        })
    }

    /// Check availability of a single domain.
    ///
    /// # Errors
    ///
    /// Fatal on network errors and API-reported failures; a successful
    /// response always normalizes, however partial its fields.
    pub async fn check_domain(&self, domain: &str) -> Result<CheckResult, PorkbunError> {
        let data = self
            .transport
            .post(
                &format!("/domain/checkDomain/{}", domain),
                self.credentials()?,
                Map::new(),
            )
            .await?;

        let outcome = normalize_check(&data);
        Ok(CheckResult {
            domain: domain.to_string(),
            available: outcome.available,
            price: outcome.register_price,
            renewal: outcome.renewal_price,
            message: response_message(&data),
        })
    }

    /// Check a batch of domains, one request at a time.
    ///
    /// Requests are strictly sequential with a fixed delay between calls
    /// (not after the last one); the upstream API rate-limits aggressively
    /// and parallel checks trip its abuse protection. A per-domain failure
    /// is absorbed into a result row with `"error"` price sentinels so the
    /// rest of the batch still reports. This method itself never fails.
    ///
    /// Results come back in input order; use [`sort_check_results`] for
    /// the available-first display ordering.
    pub async fn check_domains(&self, domains: &[String]) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(domains.len());

        for (index, domain) in domains.iter().enumerate() {
            match self.check_domain(domain).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(domain = domain.as_str(), error = %e, "bulk check item failed");
                    results.push(CheckResult {
                        domain: domain.clone(),
                        available: false,
                        price: PRICE_ERROR.to_string(),
                        renewal: PRICE_ERROR.to_string(),
                        message: None,
                    });
                }
            }

            if index < domains.len() - 1 {
                tokio::time::sleep(self.config.bulk_delay).await;
            }
        }

        results
    }

    /// Register a domain.
    ///
    /// Re-checks availability immediately before registering; a prior
    /// check is never assumed to still hold. The submitted cost is the
    /// registration price times the minimum registration duration the API
    /// reports (default 1 year), in cents, rounded half-up.
    ///
    /// # Errors
    ///
    /// - `DomainUnavailable` when the fresh check says the domain is taken
    /// - `InvalidPrice` when the price string fails to parse (nothing is
    ///   sent to the API in that case)
    /// - `RegistrationFailed` when the API rejects the create request;
    ///   the failure is reported, never retried
    pub async fn register(&self, domain: &str) -> Result<RegistrationOutcome, PorkbunError> {
        let data = self
            .transport
            .post(
                &format!("/domain/checkDomain/{}", domain),
                self.credentials()?,
                Map::new(),
            )
            .await?;

        let outcome = normalize_check(&data);
        if !outcome.available {
            return Err(PorkbunError::unavailable(domain));
        }

        let duration = min_duration(&data);
        let cost_cents = registration_cost_cents(domain, &outcome.register_price, duration)?;
        debug!(domain, cost_cents, duration, "submitting registration");

        let mut fields = Map::new();
        fields.insert("cost".to_string(), json!(cost_cents));
        fields.insert("agreeToTerms".to_string(), json!("yes"));

        let create = self
            .transport
            .post(
                &format!("/domain/create/{}", domain),
                self.credentials()?,
                fields,
            )
            .await;

        match create {
            Ok(data) => Ok(RegistrationOutcome {
                domain: domain.to_string(),
                price: outcome.register_price,
                renewal: outcome.renewal_price,
                cost_cents,
                message: response_message(&data)
                    .unwrap_or_else(|| "Domain registered successfully".to_string()),
            }),
            Err(PorkbunError::ApiError { message, .. }) => {
                Err(PorkbunError::registration_failed(domain, message))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the TLD price list (no credentials required).
    ///
    /// Returns at most [`crate::MAX_PRICING_ROWS`] rows, sorted ascending
    /// by numeric registration price.
    pub async fn pricing(&self) -> Result<Vec<PricingRow>, PorkbunError> {
        let data = self.transport.get("/pricing/get").await?;
        parse_pricing(&data)
    }
}

/// Sort bulk-check results for display.
///
/// Available domains sort before unavailable ones; within each group,
/// shorter domain names sort first. The sort is stable, so equal-length
/// domains keep their original input order.
pub fn sort_check_results(results: &mut [CheckResult]) {
    results.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then(a.domain.len().cmp(&b.domain.len()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(domain: &str, available: bool) -> CheckResult {
        CheckResult {
            domain: domain.to_string(),
            available,
            price: "-".to_string(),
            renewal: "-".to_string(),
            message: None,
        }
    }

    #[test]
    fn test_sort_available_before_unavailable_regardless_of_length() {
        let mut results = vec![
            result("very-long-taken-domain.com", false),
            result("ok.de", true),
        ];
        sort_check_results(&mut results);

        assert_eq!(results[0].domain, "ok.de");
        assert!(results[0].available);
    }

    #[test]
    fn test_sort_shorter_first_within_group() {
        let mut results = vec![result("ab.com", false), result("a.com", false)];
        sort_check_results(&mut results);

        assert_eq!(results[0].domain, "a.com");
        assert_eq!(results[1].domain, "ab.com");
    }

    #[test]
    fn test_sort_stable_on_equal_length() {
        let mut results = vec![
            result("aa.com", true),
            result("bb.com", true),
            result("cc.com", true),
        ];
        sort_check_results(&mut results);

        let domains: Vec<&str> = results.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, vec!["aa.com", "bb.com", "cc.com"]);
    }

    #[test]
    fn test_sort_mixed_groups() {
        let mut results = vec![
            result("long-unavailable.com", false),
            result("b.io", false),
            result("available-but-long.com", true),
            result("a.io", true),
        ];
        sort_check_results(&mut results);

        let domains: Vec<&str> = results.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(
            domains,
            vec!["a.io", "available-but-long.com", "b.io", "long-unavailable.com"]
        );
    }

    #[test]
    fn test_client_construction() {
        let client = PorkbunClient::new(ApiCredentials::new("pk", "sk"));
        assert!(client.is_ok());
    }
}
