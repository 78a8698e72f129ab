//! Configuration validation.
//!
//! Validates the `[market]` and `[listing]` sections before anything is loaded.

use crate::domain::error::GbceError;
use crate::domain::security::DEFAULT_VWAP_WINDOW_MINUTES;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_REFERENCE_PRICE: f64 = 120.0;

/// One year.
pub const MAX_WINDOW_MINUTES: i64 = 60 * 24 * 365;

pub fn validate_market_config(config: &dyn ConfigPort) -> Result<(), GbceError> {
    validate_reference_price(config)?;
    validate_window(config)?;
    Ok(())
}

pub fn validate_listing_config(config: &dyn ConfigPort) -> Result<(), GbceError> {
    config.require_string("listing", "securities")?;
    if let Some(trades) = config.get_string("listing", "trades") {
        if trades.trim().is_empty() {
            return Err(GbceError::ConfigInvalid {
                section: "listing".to_string(),
                key: "trades".to_string(),
                reason: "trades path must not be blank when given".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_reference_price(config: &dyn ConfigPort) -> Result<(), GbceError> {
    if let Some(raw) = config.get_string("market", "reference_price") {
        if raw.trim().parse::<f64>().is_err() {
            return Err(GbceError::ConfigInvalid {
                section: "market".to_string(),
                key: "reference_price".to_string(),
                reason: format!("'{}' is not a number", raw.trim()),
            });
        }
    }
    let value = config.get_double("market", "reference_price", DEFAULT_REFERENCE_PRICE);
    if !value.is_finite() || value <= 0.0 {
        return Err(GbceError::ConfigInvalid {
            section: "market".to_string(),
            key: "reference_price".to_string(),
            reason: "reference_price must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_window(config: &dyn ConfigPort) -> Result<(), GbceError> {
    if let Some(raw) = config.get_string("market", "window_minutes") {
        if raw.trim().parse::<i64>().is_err() {
            return Err(GbceError::ConfigInvalid {
                section: "market".to_string(),
                key: "window_minutes".to_string(),
                reason: format!("'{}' is not a whole number of minutes", raw.trim()),
            });
        }
    }
    let value = config.get_int("market", "window_minutes", DEFAULT_VWAP_WINDOW_MINUTES);
    if !(1..=MAX_WINDOW_MINUTES).contains(&value) {
        return Err(GbceError::ConfigInvalid {
            section: "market".to_string(),
            key: "window_minutes".to_string(),
            reason: format!("window_minutes must be between 1 and {MAX_WINDOW_MINUTES}"),
        });
    }
    Ok(())
}
