//! Custom error types for monthbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for monthbook operations
#[derive(Error, Debug)]
pub enum MonthbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (reading or writing ledger/profile files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for entry data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The ledger holds no records yet
    #[error("No data available.")]
    NoData,

    /// No profile has been stored
    #[error("No profile stored.")]
    MissingProfile,
}

/// Convenience result type for monthbook operations
pub type MonthbookResult<T> = Result<T, MonthbookError>;
