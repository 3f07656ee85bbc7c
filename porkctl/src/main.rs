//! porkctl CLI Application
//!
//! A command-line interface for the Porkbun domain registrar API. Verifies
//! API credentials, checks domain availability (single and bulk), registers
//! domains, and lists TLD pricing.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use porkctl_lib::{sort_check_results, ApiCredentials, ClientConfig, PorkbunClient, PorkbunError};
use std::process;
use std::time::Duration;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for porkctl
#[derive(Parser, Debug)]
#[command(name = "porkctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Porkbun domain tool: check availability, register domains, list TLD pricing")]
#[command(
    long_about = "Command-line client for the Porkbun registrar API.\n\nCredentials are read from an env file (PORKBUN_API_KEY / PORKBUN_SECRET_KEY); set PORKCTL_ENV_FILE or create ./porkbun.env. The pricing command needs no credentials."
)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output results as JSON instead of text
    #[arg(short = 'j', long = "json", global = true)]
    pub json: bool,

    /// Verbose logging (also honors RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Delay between bulk-check requests, in milliseconds
    #[arg(long = "delay", value_name = "MS", default_value = "1200", global = true)]
    pub delay_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version
    Version,

    /// Verify API keys work
    Ping,

    /// Check single domain availability
    Check {
        /// Domain to check (e.g., clau.de)
        domain: String,
    },

    /// Check multiple domains, one request at a time
    CheckBulk {
        /// Domains to check
        #[arg(required = true, value_name = "DOMAIN")]
        domains: Vec<String>,
    },

    /// Register a domain
    Register {
        /// Domain to register
        domain: String,
    },

    /// Show TLD pricing (cheapest 50, no credentials required)
    Pricing,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        init_tracing();
    }

    if let Err(e) = run(args).await {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("porkctl=debug,porkctl_lib=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client_config(args: &Args) -> ClientConfig {
    ClientConfig::default().with_bulk_delay(Duration::from_millis(args.delay_ms))
}

/// Build a signed client from the resolved credential file.
fn signed_client(args: &Args) -> Result<PorkbunClient, PorkbunError> {
    let credentials = ApiCredentials::load()?;
    PorkbunClient::with_config(credentials, client_config(args))
}

async fn run(args: Args) -> Result<(), PorkbunError> {
    match &args.command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Ping => run_ping(&args).await,
        Command::Check { domain } => run_check(&args, domain).await,
        Command::CheckBulk { domains } => run_check_bulk(&args, domains).await,
        Command::Register { domain } => run_register(&args, domain).await,
        Command::Pricing => run_pricing(&args).await,
    }
}

async fn run_ping(args: &Args) -> Result<(), PorkbunError> {
    let client = signed_client(args)?;
    let result = client.ping().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui::print_ping(&result);
    }
    Ok(())
}

async fn run_check(args: &Args, domain: &str) -> Result<(), PorkbunError> {
    let client = signed_client(args)?;
    let result = client.check_domain(domain).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui::print_check(&result);
    }
    Ok(())
}

async fn run_check_bulk(args: &Args, domains: &[String]) -> Result<(), PorkbunError> {
    let client = signed_client(args)?;

    if !args.json {
        println!("CHECKING: {} domains", domains.len());
        println!();
    }

    // Sequential by contract; a per-domain failure becomes a sentinel row
    // and never fails the batch
    let mut results = client.check_domains(domains).await;
    sort_check_results(&mut results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", ui::render_bulk_table(&results));
        println!();
        let available = results.iter().filter(|r| r.available).count();
        println!("SUMMARY: {}/{} available", available, results.len());
    }
    Ok(())
}

async fn run_register(args: &Args, domain: &str) -> Result<(), PorkbunError> {
    let client = signed_client(args)?;
    let outcome = client.register(domain).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        ui::print_registration(&outcome);
    }
    Ok(())
}

async fn run_pricing(args: &Args) -> Result<(), PorkbunError> {
    let client = PorkbunClient::anonymous(client_config(args))?;
    let rows = client.pricing().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", ui::render_pricing_table(&rows));
        println!();
        println!("... showing {} cheapest TLDs", rows.len());
    }
    Ok(())
}
