//! Report rendering port trait.

use crate::domain::error::GbceError;
use crate::domain::report::MarketReport;

/// Port for publishing a market snapshot.
pub trait ReportPort {
    fn write(&mut self, report: &MarketReport) -> Result<(), GbceError>;
}
