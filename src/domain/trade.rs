//! Trade records and buy/sell indicator.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::GbceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "buy"),
            TradeDirection::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TradeDirection::Buy),
            "sell" => Ok(TradeDirection::Sell),
            other => Err(GbceError::InvalidTradeInput {
                reason: format!("direction must be 'buy' or 'sell', got '{other}'"),
            }),
        }
    }
}

/// A single executed trade. Immutable once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    timestamp: DateTime<Utc>,
    quantity: u64,
    direction: TradeDirection,
    price: f64,
}

impl Trade {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        quantity: u64,
        direction: TradeDirection,
        price: f64,
    ) -> Self {
        Trade {
            timestamp,
            quantity,
            direction,
            price,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn direction(&self) -> TradeDirection {
        self.direction
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// quantity * price
    pub fn notional(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
