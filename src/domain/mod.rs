//! Core domain types and logic.

pub mod trade;
pub mod security;
pub mod market;
pub mod report;
pub mod sample;
pub mod config_validation;
pub mod error;
