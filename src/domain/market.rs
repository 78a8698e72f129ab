//! Security registry and the GBCE All Share Index.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::error::GbceError;
use super::security::{default_vwap_window, Security};
use super::trade::TradeDirection;
use crate::adapters::clock::SystemClock;
use crate::ports::clock_port::Clock;

/// Securities keyed by symbol, kept in registration order.
pub struct Market {
    securities: Vec<Security>,
    index: HashMap<String, usize>,
    clock: Box<dyn Clock>,
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

impl Market {
    /// A market stamped by the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Market {
            securities: Vec::new(),
            index: HashMap::new(),
            clock: Box::new(clock),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Registers `security` under its symbol. A security already listed under
    /// the same symbol is replaced in place and handed back.
    pub fn add_security(&mut self, security: Security) -> Option<Security> {
        match self.index.get(security.symbol()) {
            Some(&pos) => {
                tracing::warn!(
                    symbol = %security.symbol(),
                    "security re-registered, previous listing replaced"
                );
                Some(std::mem::replace(&mut self.securities[pos], security))
            }
            None => {
                self.index
                    .insert(security.symbol().to_string(), self.securities.len());
                self.securities.push(security);
                None
            }
        }
    }

    pub fn security(&self, symbol: &str) -> Option<&Security> {
        let pos = *self.index.get(&symbol.trim().to_uppercase())?;
        self.securities.get(pos)
    }

    pub fn security_mut(&mut self, symbol: &str) -> Option<&mut Security> {
        let pos = *self.index.get(&symbol.trim().to_uppercase())?;
        self.securities.get_mut(pos)
    }

    /// Registered securities in the order they were first listed.
    pub fn securities(&self) -> impl Iterator<Item = &Security> {
        self.securities.iter()
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }

    /// Records a trade against `symbol`, stamped with the market clock.
    pub fn record_trade(
        &mut self,
        symbol: &str,
        quantity: i64,
        direction: TradeDirection,
        price: f64,
    ) -> Result<(), GbceError> {
        let now = self.clock.now();
        let security = self
            .security_mut(symbol)
            .ok_or_else(|| GbceError::UnknownSymbol {
                symbol: symbol.to_string(),
            })?;
        security.record_trade(quantity, direction, price, now)
    }

    /// All Share Index at the market clock's current instant.
    pub fn all_share_index(&self) -> f64 {
        self.all_share_index_at(self.clock.now(), default_vwap_window())
    }

    /// Geometric mean of every strictly positive volume weighted price,
    /// or 0.0 when there is none.
    pub fn all_share_index_at(&self, now: DateTime<Utc>, window: Duration) -> f64 {
        let prices: Vec<f64> = self
            .securities
            .iter()
            .map(|s| s.volume_weighted_price_over(now, window))
            .filter(|&p| p > 0.0)
            .collect();

        let index = geometric_mean(&prices);
        tracing::debug!(
            contributors = prices.len(),
            listed = self.securities.len(),
            index,
            "all share index computed"
        );
        index
    }
}

/// exp(mean(ln x)); 0.0 for an empty slice. Inputs must be positive.
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let log_sum = values.iter().fold(0.0_f64, |acc, v| acc + v.ln());
    (log_sum / values.len() as f64).exp()
}
