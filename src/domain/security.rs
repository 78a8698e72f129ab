//! Security definition, trade history and per-stock metrics.
//!
//! A [`Security`] owns its static terms (kind, dividend parameters, par value)
//! and an append-only trade log. All metrics are computed on demand from that
//! state plus an explicit "now", so callers decide which clock to trust.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::GbceError;
use super::trade::{Trade, TradeDirection};

/// Trailing window used for the volume weighted price.
pub const DEFAULT_VWAP_WINDOW_MINUTES: i64 = 5;

pub fn default_vwap_window() -> Duration {
    Duration::minutes(DEFAULT_VWAP_WINDOW_MINUTES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityKind {
    Common,
    Preferred,
}

impl fmt::Display for SecurityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityKind::Common => write!(f, "Common"),
            SecurityKind::Preferred => write!(f, "Preferred"),
        }
    }
}

impl FromStr for SecurityKind {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(SecurityKind::Common),
            "preferred" => Ok(SecurityKind::Preferred),
            other => Err(GbceError::InvalidSecurity {
                reason: format!("unknown stock type '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Security {
    symbol: String,
    kind: SecurityKind,
    last_dividend: f64,
    fixed_dividend_rate: f64,
    par_value: f64,
    trades: Vec<Trade>,
}

impl Security {
    pub fn new(
        symbol: &str,
        kind: SecurityKind,
        last_dividend: f64,
        fixed_dividend_rate: f64,
        par_value: f64,
    ) -> Result<Self, GbceError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(GbceError::InvalidSecurity {
                reason: "symbol must not be empty".into(),
            });
        }
        if !last_dividend.is_finite() || last_dividend < 0.0 {
            return Err(GbceError::InvalidSecurity {
                reason: format!("{symbol}: last dividend must be non-negative"),
            });
        }
        if !fixed_dividend_rate.is_finite() || fixed_dividend_rate < 0.0 {
            return Err(GbceError::InvalidSecurity {
                reason: format!("{symbol}: fixed dividend rate must be non-negative"),
            });
        }
        if !par_value.is_finite() || par_value <= 0.0 {
            return Err(GbceError::InvalidSecurity {
                reason: format!("{symbol}: par value must be positive"),
            });
        }

        Ok(Security {
            symbol,
            kind,
            last_dividend,
            fixed_dividend_rate,
            par_value,
            trades: Vec::new(),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> SecurityKind {
        self.kind
    }

    pub fn last_dividend(&self) -> f64 {
        self.last_dividend
    }

    pub fn fixed_dividend_rate(&self) -> f64 {
        self.fixed_dividend_rate
    }

    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    /// Recorded trades in the order they were appended.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Appends a trade stamped with `timestamp`. Nothing is recorded on error.
    pub fn record_trade(
        &mut self,
        quantity: i64,
        direction: TradeDirection,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<(), GbceError> {
        if quantity <= 0 {
            return Err(GbceError::InvalidTradeInput {
                reason: format!("quantity must be greater than zero, got {quantity}"),
            });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(GbceError::InvalidTradeInput {
                reason: format!("price must be greater than zero, got {price}"),
            });
        }

        let trade = Trade::new(timestamp, quantity.unsigned_abs(), direction, price);
        tracing::debug!(
            symbol = %self.symbol,
            quantity,
            %direction,
            price,
            "trade recorded"
        );
        self.trades.push(trade);
        Ok(())
    }

    /// last_dividend for Common, fixed_dividend_rate * par_value for Preferred.
    pub fn dividend_basis(&self) -> f64 {
        match self.kind {
            SecurityKind::Common => self.last_dividend,
            SecurityKind::Preferred => self.fixed_dividend_rate * self.par_value,
        }
    }

    pub fn dividend_yield(&self, price: f64) -> Result<f64, GbceError> {
        check_price(price)?;
        Ok(self.dividend_basis() / price)
    }

    /// Price over dividend basis. A zero basis yields `f64::INFINITY`.
    pub fn pe_ratio(&self, price: f64) -> Result<f64, GbceError> {
        check_price(price)?;
        let basis = self.dividend_basis();
        if basis == 0.0 {
            return Ok(f64::INFINITY);
        }
        Ok(price / basis)
    }

    /// Volume weighted price over the default five minute window ending at `now`.
    pub fn volume_weighted_price(&self, now: DateTime<Utc>) -> f64 {
        self.volume_weighted_price_over(now, default_vwap_window())
    }

    /// Σ(quantity * price) / Σ(quantity) over trades stamped at or after
    /// `now - window`. Returns 0.0 when no trade qualifies.
    ///
    /// A window reaching past the earliest representable instant covers the
    /// whole trade history.
    pub fn volume_weighted_price_over(&self, now: DateTime<Utc>, window: Duration) -> f64 {
        let cutoff = now.checked_sub_signed(window);
        let (notional, volume) = self
            .trades
            .iter()
            .filter(|t| cutoff.is_none_or(|c| t.timestamp() >= c))
            .fold((0.0_f64, 0u128), |(notional, volume), t| {
                (notional + t.notional(), volume + u128::from(t.quantity()))
            });

        if volume == 0 {
            0.0
        } else {
            notional / volume as f64
        }
    }
}

fn check_price(price: f64) -> Result<(), GbceError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(GbceError::InvalidPrice { price });
    }
    Ok(())
}
