//! Built-in sample listing: five beverage stocks and one round of trades.

use super::error::GbceError;
use super::market::Market;
use super::security::{Security, SecurityKind};
use super::trade::TradeDirection;

pub const SAMPLE_REFERENCE_PRICE: f64 = 120.0;

/// (symbol, kind, last_dividend, fixed_dividend_rate, par_value)
const SAMPLE_SECURITIES: [(&str, SecurityKind, f64, f64, f64); 5] = [
    ("TEA", SecurityKind::Common, 0.0, 0.0, 100.0),
    ("POP", SecurityKind::Common, 8.0, 0.0, 100.0),
    ("ALE", SecurityKind::Common, 23.0, 0.0, 60.0),
    ("GIN", SecurityKind::Preferred, 8.0, 0.02, 100.0),
    ("JOE", SecurityKind::Common, 13.0, 0.0, 250.0),
];

/// (symbol, quantity, direction, price)
const SAMPLE_TRADES: [(&str, i64, TradeDirection, f64); 6] = [
    ("TEA", 10, TradeDirection::Buy, 120.0),
    ("TEA", 5, TradeDirection::Sell, 125.0),
    ("POP", 20, TradeDirection::Buy, 110.0),
    ("ALE", 15, TradeDirection::Sell, 95.0),
    ("GIN", 25, TradeDirection::Buy, 105.0),
    ("JOE", 30, TradeDirection::Sell, 200.0),
];

pub fn sample_securities() -> Result<Vec<Security>, GbceError> {
    SAMPLE_SECURITIES
        .iter()
        .map(|&(symbol, kind, dividend, rate, par)| Security::new(symbol, kind, dividend, rate, par))
        .collect()
}

/// Lists the sample securities on `market` and records the sample trades.
pub fn populate(market: &mut Market) -> Result<(), GbceError> {
    for security in sample_securities()? {
        market.add_security(security);
    }
    for &(symbol, quantity, direction, price) in &SAMPLE_TRADES {
        market.record_trade(symbol, quantity, direction, price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn sample_listing_has_five_securities() {
        let securities = sample_securities().unwrap();
        let symbols: Vec<&str> = securities.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, vec!["TEA", "POP", "ALE", "GIN", "JOE"]);
    }

    #[test]
    fn populate_records_all_trades() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let mut market = Market::with_clock(FixedClock::new(now));
        populate(&mut market).unwrap();

        assert_eq!(market.len(), 5);
        let total: usize = market.securities().map(|s| s.trades().len()).sum();
        assert_eq!(total, 6);

        let tea = market.security("TEA").unwrap();
        assert_relative_eq!(tea.volume_weighted_price(now), 1825.0 / 15.0);
    }
}
