//! gbce — Global Beverage Corporation Exchange calculations.
//!
//! Per-stock dividend yield, P/E ratio and volume weighted price, plus the
//! GBCE All Share Index. Domain logic lives in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
