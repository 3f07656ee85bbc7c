//! Response normalization for the availability endpoint.
//!
//! The Porkbun API returns availability and pricing under varying shapes:
//! the interesting fields may sit at the top level or nested under a
//! `response` key, prices may come flat or under a `pricing` object, and
//! scalar fields may be strings, numbers, or booleans depending on the
//! endpoint. This module flattens all of that into a fixed `CheckOutcome`.
//! Normalization never fails; missing or mistyped fields only weaken the
//! result toward its defaults.

use crate::error::PorkbunError;
use serde_json::Value;

/// Sentinel for a price the API did not report.
pub const PRICE_UNKNOWN: &str = "-";

/// Sentinel for a price slot on a bulk row whose lookup failed outright.
pub const PRICE_ERROR: &str = "error";

/// Normalized view of an availability-check response.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// True only if the top-level status was SUCCESS and the nested
    /// availability flag was truthy
    pub available: bool,

    /// Registration price, or `PRICE_UNKNOWN`
    pub register_price: String,

    /// Renewal price, or `PRICE_UNKNOWN`
    pub renewal_price: String,
}

/// Normalize a decoded availability-check response.
///
/// Field lookups happen in the object nested under `response` when one
/// exists, falling back to the top-level object. Availability is an
/// AND-gate: the top-level `status` must equal `"SUCCESS"`
/// (case-insensitive) and the scoped `avail` field must be truthy, where
/// truthy covers boolean `true` and the strings `"yes"` / `"true"`
/// (case-insensitive).
///
/// Register price resolution: scoped `price` if non-empty, else scoped
/// `pricing.registration`, else `PRICE_UNKNOWN`. Renewal resolution:
/// scoped `additional.renewal.price`, else scoped `pricing.renewal`, else
/// `PRICE_UNKNOWN`.
pub fn normalize_check(data: &Value) -> CheckOutcome {
    let scope = data.get("response").filter(|v| v.is_object()).unwrap_or(data);

    let status_ok = data
        .get("status")
        .and_then(coerce_string)
        .map(|s| s.eq_ignore_ascii_case("SUCCESS"))
        .unwrap_or(false);

    let avail = match scope.get("avail") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    };

    let register_price = scope
        .get("price")
        .and_then(coerce_string)
        .filter(|p| !p.is_empty())
        .or_else(|| {
            scope
                .get("pricing")
                .and_then(|p| p.get("registration"))
                .and_then(coerce_string)
                .filter(|p| !p.is_empty())
        })
        .unwrap_or_else(|| PRICE_UNKNOWN.to_string());

    let renewal_price = scope
        .get("additional")
        .and_then(|a| a.get("renewal"))
        .and_then(|r| r.get("price"))
        .and_then(coerce_string)
        .filter(|p| !p.is_empty())
        .or_else(|| {
            scope
                .get("pricing")
                .and_then(|p| p.get("renewal"))
                .and_then(coerce_string)
                .filter(|p| !p.is_empty())
        })
        .unwrap_or_else(|| PRICE_UNKNOWN.to_string());

    CheckOutcome {
        available: status_ok && avail,
        register_price,
        renewal_price,
    }
}

/// Minimum registration duration in years from a check response.
///
/// Read from `response.minDuration`; defaults to 1.0 when absent,
/// unparseable, or non-positive.
pub fn min_duration(data: &Value) -> f64 {
    data.get("response")
        .and_then(|r| r.get("minDuration"))
        .and_then(coerce_f64)
        .filter(|&d| d > 0.0)
        .unwrap_or(1.0)
}

/// Total registration cost in currency cents.
///
/// Parses the price string as a decimal, multiplies by 100 and the minimum
/// registration duration, and rounds half-up by adding 0.5 before
/// truncation.
///
/// # Errors
///
/// Returns `PorkbunError::InvalidPrice` when the price string does not
/// parse as a decimal number. An unparseable price is a fatal local error
/// and is never sent to the API.
pub fn registration_cost_cents(
    domain: &str,
    price: &str,
    min_duration: f64,
) -> Result<i64, PorkbunError> {
    let price_value: f64 = price
        .parse()
        .map_err(|_| PorkbunError::invalid_price(domain, price))?;

    Ok((price_value * 100.0 * min_duration + 0.5) as i64)
}

/// Coerce a scalar JSON value to a display string.
///
/// The API is loose about scalar types, so every field extraction goes
/// through this single exhaustive decoding step instead of repeating
/// per-call-site type switches. Containers and null coerce to `None`.
pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a scalar JSON value to a float, accepting numeric strings.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
