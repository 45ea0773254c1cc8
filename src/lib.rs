//! monthbook - Terminal-based monthly finance ledger with local analytics
//!
//! This library provides the core functionality for monthbook: an
//! append-only per-user ledger of monthly income/expense figures, with a
//! derived remaining balance and a per-month breakdown for display.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, ledger, profile)
//! - `storage`: JSON file storage layer, one ledger file per user
//! - `services`: Business logic layer
//! - `reports`: Chart series aggregation over the ledger
//! - `display`: Terminal output formatting
//! - `export`: CSV export
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::MonthbookError;
