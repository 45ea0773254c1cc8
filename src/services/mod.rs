//! Service layer for monthbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, month/year stamping, and persistence.

pub mod entry;

pub use entry::EntryService;
