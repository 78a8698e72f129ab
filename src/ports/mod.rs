//! Port traits implemented by adapters.

pub mod clock_port;
pub mod config_port;
pub mod listing_port;
pub mod report_port;
