//! TLD price list parsing.
//!
//! The pricing endpoint is public and returns one entry per TLD under a
//! `pricing` object. Entries are sorted ascending by their numeric
//! registration price and truncated to the cheapest 50 before display.

use crate::error::PorkbunError;
use crate::response::coerce_string;
use crate::transport::{response_message, status_is_success};
use crate::types::PricingRow;
use serde_json::Value;
use tracing::warn;

/// Maximum number of rows returned by [`parse_pricing`].
pub const MAX_PRICING_ROWS: usize = 50;

/// Parse a pricing-list response into sorted, truncated rows.
///
/// Entries whose registration price does not parse as a decimal number are
/// excluded (and logged) rather than coerced to zero: a zero fallback would
/// sort broken entries to the top of the cheapest-first list.
///
/// # Errors
///
/// Returns `PorkbunError::ApiError` when the response status is not
/// SUCCESS, and `PorkbunError::ParseError` when the `pricing` object is
/// missing entirely.
pub fn parse_pricing(data: &Value) -> Result<Vec<PricingRow>, PorkbunError> {
    if !status_is_success(data) {
        let message =
            response_message(data).unwrap_or_else(|| "failed to get pricing".to_string());
        return Err(PorkbunError::api("/pricing/get", message));
    }

    let pricing = data
        .get("pricing")
        .and_then(|p| p.as_object())
        .ok_or_else(|| PorkbunError::ParseError {
            message: "missing pricing data".to_string(),
        })?;

    let mut rows: Vec<PricingRow> = Vec::with_capacity(pricing.len());
    for (tld, entry) in pricing {
        if !entry.is_object() {
            continue;
        }

        let registration = entry
            .get("registration")
            .and_then(coerce_string)
            .unwrap_or_default();
        let renewal = entry
            .get("renewal")
            .and_then(coerce_string)
            .unwrap_or_default();

        let Ok(registration_value) = registration.parse::<f64>() else {
            warn!(tld = tld.as_str(), price = registration.as_str(), "skipping unparseable registration price");
            continue;
        };

        rows.push(PricingRow {
            tld: tld.clone(),
            registration,
            renewal,
            registration_value,
        });
    }

    // Stable sort: equal prices keep the API's entry order
    rows.sort_by(|a, b| a.registration_value.total_cmp(&b.registration_value));
    rows.truncate(MAX_PRICING_ROWS);

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pricing_response(entries: &[(&str, &str, &str)]) -> Value {
        let mut pricing = serde_json::Map::new();
        for (tld, registration, renewal) in entries {
            pricing.insert(
                tld.to_string(),
                json!({"registration": registration, "renewal": renewal}),
            );
        }
        json!({"status": "SUCCESS", "pricing": pricing})
    }

    #[test]
    fn test_sorted_ascending_by_registration_price() {
        let data = pricing_response(&[
            ("com", "9.99", "10.50"),
            ("xyz", "1.99", "12.00"),
            ("de", "4.50", "4.50"),
        ]);

        let rows = parse_pricing(&data).unwrap();
        let tlds: Vec<&str> = rows.iter().map(|r| r.tld.as_str()).collect();
        assert_eq!(tlds, vec!["xyz", "de", "com"]);

        // Non-decreasing across the whole sequence
        for pair in rows.windows(2) {
            assert!(pair[0].registration_value <= pair[1].registration_value);
        }
    }

    #[test]
    fn test_truncated_to_max_rows() {
        let entries: Vec<(String, String, String)> = (0..80)
            .map(|i| (format!("tld{:02}", i), format!("{}.00", i + 1), "5.00".to_string()))
            .collect();
        let borrowed: Vec<(&str, &str, &str)> = entries
            .iter()
            .map(|(t, r, n)| (t.as_str(), r.as_str(), n.as_str()))
            .collect();

        let rows = parse_pricing(&pricing_response(&borrowed)).unwrap();
        assert_eq!(rows.len(), MAX_PRICING_ROWS);
        // The cheapest entry survives truncation
        assert_eq!(rows[0].registration, "1.00");
    }

    #[test]
    fn test_unparseable_prices_excluded_not_zeroed() {
        let data = pricing_response(&[
            ("com", "9.99", "10.50"),
            ("broken", "contact us", "-"),
            ("xyz", "1.99", "12.00"),
        ]);

        let rows = parse_pricing(&data).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.tld != "broken"));
        // And nothing sorted a broken entry to the front
        assert_eq!(rows[0].tld, "xyz");
    }

    #[test]
    fn test_non_success_status_is_api_error() {
        let data = json!({"status": "ERROR", "message": "down for maintenance"});
        let err = parse_pricing(&data).unwrap_err();
        assert_eq!(err.api_message(), Some("down for maintenance"));
    }

    #[test]
    fn test_missing_pricing_object_is_parse_error() {
        let data = json!({"status": "SUCCESS"});
        assert!(matches!(
            parse_pricing(&data).unwrap_err(),
            PorkbunError::ParseError { .. }
        ));
    }

    #[test]
    fn test_non_object_entries_skipped() {
        let data = json!({
            "status": "SUCCESS",
            "pricing": {
                "com": {"registration": "9.99", "renewal": "10.50"},
                "weird": "not an object"
            }
        });

        let rows = parse_pricing(&data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tld, "com");
    }
}
