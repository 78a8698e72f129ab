//! CLI definition and dispatch.

use chrono::Duration;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::clock::SystemClock;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    validate_listing_config, validate_market_config, DEFAULT_REFERENCE_PRICE,
};
use crate::domain::error::GbceError;
use crate::domain::market::Market;
use crate::domain::report::{MarketConfig, MarketReport};
use crate::domain::sample::{self, SAMPLE_REFERENCE_PRICE};
use crate::domain::security::{default_vwap_window, DEFAULT_VWAP_WINDOW_MINUTES};
use crate::ports::clock_port::Clock;
use crate::ports::config_port::ConfigPort;
use crate::ports::listing_port::ListingPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "Global Beverage Corporation Exchange calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in five-stock sample market
    Demo {
        /// Price used for dividend yield and P/E
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// Load a listing from CSV and print the market report
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// Validate a configuration and its listing files
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Demo { price } => run_demo(price),
        Command::Report { config, price } => run_report(&config, price),
        Command::Validate { config } => run_validate(&config),
    }
}

fn fail(err: &GbceError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| fail(&e))
}

pub fn build_market_config(
    adapter: &dyn ConfigPort,
    price_override: Option<f64>,
) -> Result<MarketConfig, GbceError> {
    validate_market_config(adapter)?;
    let reference_price = price_override.unwrap_or_else(|| {
        adapter.get_double("market", "reference_price", DEFAULT_REFERENCE_PRICE)
    });
    let minutes = adapter.get_int("market", "window_minutes", DEFAULT_VWAP_WINDOW_MINUTES);
    let window = Duration::try_minutes(minutes).ok_or_else(|| GbceError::ConfigInvalid {
        section: "market".into(),
        key: "window_minutes".into(),
        reason: format!("{minutes} minutes is out of range"),
    })?;
    Ok(MarketConfig {
        reference_price,
        window,
    })
}

pub fn build_listing(adapter: &FileConfigAdapter) -> Result<CsvAdapter, GbceError> {
    validate_listing_config(adapter)?;
    let securities = adapter
        .get_path("listing", "securities")
        .ok_or_else(|| GbceError::ConfigMissing {
            section: "listing".into(),
            key: "securities".into(),
        })?;
    Ok(CsvAdapter::new(securities, adapter.get_path("listing", "trades")))
}

/// Lists every security from `listing` on `market`, then records its trades.
/// Returns the number of trades recorded.
pub fn load_market(listing: &dyn ListingPort, market: &mut Market) -> Result<usize, GbceError> {
    for security in listing.securities()? {
        market.add_security(security);
    }
    let trades = listing.trades()?;
    for entry in &trades {
        market.record_trade(&entry.symbol, entry.quantity, entry.direction, entry.price)?;
    }
    Ok(trades.len())
}

/// Loads `listing` into a scratch market so every row passes the same
/// checks `report` applies. Returns the security and trade counts.
pub fn validate_listing(listing: &dyn ListingPort) -> Result<(usize, usize), GbceError> {
    let mut market = Market::new();
    let trades = load_market(listing, &mut market)?;
    Ok((market.len(), trades))
}

/// The sample market, with trades stamped by `clock`.
pub fn build_demo_market(clock: impl Clock + 'static) -> Result<Market, GbceError> {
    let mut market = Market::with_clock(clock);
    sample::populate(&mut market)?;
    Ok(market)
}

/// Snapshots `market` at its clock's current instant and hands it to `out`.
pub fn publish_report(
    market: &Market,
    config: &MarketConfig,
    out: &mut dyn ReportPort,
) -> Result<MarketReport, GbceError> {
    let report = MarketReport::compute(market, config.reference_price, market.now(), config.window)?;
    out.write(&report)?;
    Ok(report)
}

pub fn run_demo(price: Option<f64>) -> ExitCode {
    let market = match build_demo_market(SystemClock) {
        Ok(m) => m,
        Err(e) => return fail(&e),
    };
    eprintln!("Loaded {} sample securities", market.len());

    let config = MarketConfig {
        reference_price: price.unwrap_or(SAMPLE_REFERENCE_PRICE),
        window: default_vwap_window(),
    };
    let mut out = TextReportAdapter::new(io::stdout().lock());
    match publish_report(&market, &config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

pub fn run_report(config_path: &PathBuf, price: Option<f64>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let config = match build_market_config(&adapter, price) {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    let listing = match build_listing(&adapter) {
        Ok(l) => l,
        Err(e) => return fail(&e),
    };

    let mut market = Market::new();
    let recorded = match load_market(&listing, &mut market) {
        Ok(n) => n,
        Err(e) => return fail(&e),
    };
    eprintln!(
        "Loaded {} securities, {} trades (window {} min, price {:.2})",
        market.len(),
        recorded,
        config.window.num_minutes(),
        config.reference_price
    );

    let mut out = TextReportAdapter::new(io::stdout().lock());
    match publish_report(&market, &config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

pub fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = build_market_config(&adapter, None) {
        return fail(&e);
    }
    let listing = match build_listing(&adapter) {
        Ok(l) => l,
        Err(e) => return fail(&e),
    };

    let (securities, trades) = match validate_listing(&listing) {
        Ok(counts) => counts,
        Err(e) => return fail(&e),
    };

    eprintln!("  securities: {securities}");
    eprintln!("  trades:     {trades}");
    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
