//! Reports module for monthbook
//!
//! Derives display-ready series from the stored ledger.

pub mod monthly;

pub use monthly::ChartSeries;
