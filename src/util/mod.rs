//! Implementations that are useful accross the whole project
//!
//! Cost lines and their closed label sets, per-currency rounding,
//! the ledger and its aggregation against a budget baseline

pub mod baseline;
pub mod choices;
pub mod cost;
pub mod currency;
pub mod entry;
pub mod ledger;
pub mod session;
pub mod summary;
