#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gbce::adapters::clock::FixedClock;
use gbce::domain::error::GbceError;
use gbce::domain::market::Market;
use gbce::domain::security::{Security, SecurityKind};
use gbce::ports::listing_port::{ListingPort, TradeEntry};
use std::io::Write;
use std::rc::Rc;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

pub fn common(symbol: &str, last_dividend: f64, par_value: f64) -> Security {
    Security::new(symbol, SecurityKind::Common, last_dividend, 0.0, par_value).unwrap()
}

pub fn preferred(symbol: &str, last_dividend: f64, rate: f64, par_value: f64) -> Security {
    Security::new(symbol, SecurityKind::Preferred, last_dividend, rate, par_value).unwrap()
}

/// A market on a shared fixed clock the test can move.
pub fn fixed_market() -> (Market, Rc<FixedClock>) {
    let clock = Rc::new(FixedClock::new(t0()));
    (Market::with_clock(clock.clone()), clock)
}

pub struct MockListing {
    pub securities: Vec<Security>,
    pub trades: Vec<TradeEntry>,
    pub error: Option<String>,
}

impl MockListing {
    pub fn new() -> Self {
        Self {
            securities: Vec::new(),
            trades: Vec::new(),
            error: None,
        }
    }

    pub fn with_security(mut self, security: Security) -> Self {
        self.securities.push(security);
        self
    }

    pub fn with_trade(mut self, entry: TradeEntry) -> Self {
        self.trades.push(entry);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl ListingPort for MockListing {
    fn securities(&self) -> Result<Vec<Security>, GbceError> {
        if let Some(reason) = &self.error {
            return Err(GbceError::Listing {
                reason: reason.clone(),
            });
        }
        Ok(self.securities.clone())
    }

    fn trades(&self) -> Result<Vec<TradeEntry>, GbceError> {
        Ok(self.trades.clone())
    }
}

pub fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    path
}
