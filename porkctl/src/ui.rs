//! Output formatting for the porkctl CLI.
//!
//! Structured `KEY: value` lines for single-item commands and fixed-width
//! text tables for bulk results and pricing. Table rendering returns
//! strings so it stays testable; only the status words get `console`
//! styling, which degrades to plain text off-TTY.

use console::style;
use porkctl_lib::{CheckResult, PingResult, PricingRow, RegistrationOutcome, PRICE_UNKNOWN};

// ── Single-item output ───────────────────────────────────────────────────────

/// Print the result of a credential ping.
pub fn print_ping(result: &PingResult) {
    println!("STATUS: {}", style("OK").green().bold());
    println!(
        "IP: {}",
        result.your_ip.as_deref().unwrap_or("unknown")
    );
}

/// Print a single availability check as `KEY: value` lines.
///
/// Price lines are omitted when the API reported nothing; the API message
/// is shown only for unavailable domains, where it usually explains why.
pub fn print_check(result: &CheckResult) {
    println!("DOMAIN: {}", result.domain);
    if result.available {
        println!("AVAILABLE: {}", style("yes").green().bold());
    } else {
        println!("AVAILABLE: {}", style("no").red());
    }
    if result.price != PRICE_UNKNOWN {
        println!("REGISTER_PRICE: {}", result.price);
    }
    if result.renewal != PRICE_UNKNOWN {
        println!("RENEWAL_PRICE: {}", result.renewal);
    }
    if !result.available {
        if let Some(message) = &result.message {
            println!("MESSAGE: {}", message);
        }
    }
}

/// Print a completed registration.
pub fn print_registration(outcome: &RegistrationOutcome) {
    println!("DOMAIN: {}", outcome.domain);
    println!("AVAILABLE: {}", style("yes").green().bold());
    if outcome.price != PRICE_UNKNOWN {
        println!("REGISTER_PRICE: {}", outcome.price);
    }
    if outcome.renewal != PRICE_UNKNOWN {
        println!("RENEWAL_PRICE: {}", outcome.renewal);
    }
    println!("COST_CENTS: {}", outcome.cost_cents);
    println!("REGISTERED: {}", style("yes").green().bold());
    println!("MESSAGE: {}", outcome.message);
}

// ── Tables ───────────────────────────────────────────────────────────────────

/// Render the bulk-check table: domain column sized to the longest entry,
/// `YES` in caps for available rows so they stand out in a long list.
pub fn render_bulk_table(results: &[CheckResult]) -> String {
    let domain_width = results
        .iter()
        .map(|r| r.domain.len())
        .max()
        .unwrap_or(0)
        .max("DOMAIN".len());

    let header = format!(
        "{:<width$}  AVAIL  REG_PRICE  RENEWAL",
        "DOMAIN",
        width = domain_width
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for result in results {
        let avail = if result.available { "YES" } else { "no" };
        out.push_str(&format!(
            "{:<width$}  {:<5}  {:<9}  {}\n",
            result.domain,
            avail,
            result.price,
            result.renewal,
            width = domain_width
        ));
    }

    out
}

/// Render the TLD pricing table.
pub fn render_pricing_table(rows: &[PricingRow]) -> String {
    let tld_width = rows
        .iter()
        .map(|r| r.tld.len())
        .max()
        .unwrap_or(0)
        .max("TLD".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$}  REGISTER  RENEWAL\n",
        "TLD",
        width = tld_width
    ));
    out.push_str(&"-".repeat(tld_width + 22));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {:<8}  {}\n",
            row.tld,
            row.registration,
            row.renewal,
            width = tld_width
        ));
    }

    out
}

// ── Tests ────────────────────────────────────────────────────────────────────
