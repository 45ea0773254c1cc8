//! Core data models for monthbook
//!
//! This module contains the data structures of the finance ledger domain:
//! monthly records, the append-only ledger, and the user profile.

pub mod ledger;
pub mod profile;
pub mod record;

pub use ledger::Ledger;
pub use profile::Profile;
pub use record::{
    compute_remaining, validate_amounts, EntryAmounts, EntryValidationError, FinanceRecord,
};
