//! Entry service
//!
//! Provides business logic for recording monthly entries: validation,
//! month/year stamping, appending to the ledger, and persistence. Also
//! hosts the lenient live remaining preview.

use chrono::{Datelike, Local};

use crate::error::{MonthbookError, MonthbookResult};
use crate::models::{compute_remaining, validate_amounts, FinanceRecord};
use crate::storage::Storage;

/// Service for monthly entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a new entry, stamp it with the current month and year,
    /// append it to the ledger, and persist
    ///
    /// Either the record is fully accepted and appended, or the call fails
    /// with no mutation. Repeated entries for the same month are allowed.
    pub fn add_entry(
        &self,
        income: &str,
        expenses: &str,
        extra: &str,
        savings: &str,
    ) -> MonthbookResult<FinanceRecord> {
        let amounts = validate_amounts(income, expenses, extra, savings)
            .map_err(|e| MonthbookError::Validation(e.to_string()))?;

        let now = Local::now();
        let record = FinanceRecord::from_amounts(amounts, month_name(now.month()), now.year());

        self.storage.ledger.append(record.clone())?;
        self.storage.ledger.save()?;

        Ok(record)
    }

    /// Live remaining preview over the raw field contents
    ///
    /// Lenient: unparseable fields count as zero and the result may be
    /// negative. Nothing is validated or persisted.
    pub fn preview_remaining(
        &self,
        income: &str,
        expenses: &str,
        extra: &str,
        savings: &str,
    ) -> f64 {
        compute_remaining(income, expenses, extra, savings)
    }
}

/// English month name for a 1-based month number
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("chrono months are 1-12"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MonthbookPaths;
    use tempfile::TempDir;

    fn test_storage(temp_dir: &TempDir) -> Storage {
        let paths = MonthbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::for_user(paths, "test@example.com").unwrap();
        storage.load().unwrap();
        storage
    }

    #[test]
    fn test_add_entry_appends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = test_storage(&temp_dir);
        let service = EntryService::new(&storage);

        let record = service.add_entry("5000", "2000", "500", "1000").unwrap();
        assert_eq!(record.remaining(), 1500.0);
        assert!(!record.month.is_empty());
        assert!(record.year >= 2024);

        // ledger grew by one and the new record is last
        let ledger = storage.ledger.ledger().unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(*ledger.records().last().unwrap(), record);

        // persisted: a fresh storage sees it
        let reopened = test_storage(&temp_dir);
        assert_eq!(reopened.ledger.len().unwrap(), 1);
    }

    #[test]
    fn test_add_entry_rejects_invalid_input_without_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let storage = test_storage(&temp_dir);
        let service = EntryService::new(&storage);

        // 800 + 300 exceeds 1000
        let err = service.add_entry("1000", "800", "300", "0").unwrap_err();
        assert!(matches!(err, MonthbookError::Validation(_)));
        assert_eq!(storage.ledger.len().unwrap(), 0);

        let err = service.add_entry("-5", "0", "0", "0").unwrap_err();
        assert!(matches!(err, MonthbookError::Validation(_)));
        assert_eq!(storage.ledger.len().unwrap(), 0);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = test_storage(&temp_dir);
        let service = EntryService::new(&storage);

        let a = service.add_entry("1000", "100", "0", "0").unwrap();
        let b = service.add_entry("2000", "200", "0", "0").unwrap();

        let ledger = storage.ledger.ledger().unwrap();
        assert_eq!(ledger.records(), &[a, b][..]);
    }

    #[test]
    fn test_preview_never_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = test_storage(&temp_dir);
        let service = EntryService::new(&storage);

        let remaining = service.preview_remaining("100", "150", "", "junk");
        assert_eq!(remaining, -50.0);
        assert_eq!(storage.ledger.len().unwrap(), 0);
    }

    #[test]
    fn test_month_name_mapping() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
