//! Point-in-time metrics snapshot of a market.

use chrono::{DateTime, Duration, Utc};

use super::error::GbceError;
use super::market::Market;
use super::security::SecurityKind;

/// Evaluation settings for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    pub reference_price: f64,
    pub window: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityMetrics {
    pub symbol: String,
    pub kind: SecurityKind,
    pub dividend_yield: f64,
    pub pe_ratio: f64,
    pub volume_weighted_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    pub reference_price: f64,
    pub as_of: DateTime<Utc>,
    pub securities: Vec<SecurityMetrics>,
    pub all_share_index: f64,
}

impl MarketReport {
    /// Evaluates every listed security at `reference_price` and the index at `now`.
    pub fn compute(
        market: &Market,
        reference_price: f64,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Self, GbceError> {
        let securities = market
            .securities()
            .map(|s| -> Result<SecurityMetrics, GbceError> {
                Ok(SecurityMetrics {
                    symbol: s.symbol().to_string(),
                    kind: s.kind(),
                    dividend_yield: s.dividend_yield(reference_price)?,
                    pe_ratio: s.pe_ratio(reference_price)?,
                    volume_weighted_price: s.volume_weighted_price_over(now, window),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MarketReport {
            reference_price,
            as_of: now,
            securities,
            all_share_index: market.all_share_index_at(now, window),
        })
    }

    pub fn get(&self, symbol: &str) -> Option<&SecurityMetrics> {
        self.securities.iter().find(|m| m.symbol == symbol)
    }
}
