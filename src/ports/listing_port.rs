//! Listing source port: where securities and their trades come from.

use crate::domain::error::GbceError;
use crate::domain::security::Security;
use crate::domain::trade::TradeDirection;

/// A trade waiting to be recorded against a listed symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEntry {
    pub symbol: String,
    pub quantity: i64,
    pub direction: TradeDirection,
    pub price: f64,
}

pub trait ListingPort {
    fn securities(&self) -> Result<Vec<Security>, GbceError>;

    /// Default implementation: a listing without a trade feed.
    fn trades(&self) -> Result<Vec<TradeEntry>, GbceError> {
        Ok(Vec::new())
    }
}
