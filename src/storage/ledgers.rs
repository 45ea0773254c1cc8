//! Ledger repository for JSON storage
//!
//! Manages loading and saving one user's ledger file. The on-disk format
//! is a bare JSON array of record objects, namespaced per user by the
//! file name (`financeData_{email}.json`). A missing file reads as an
//! empty ledger; a corrupt file is a hard storage error, never silently
//! recovered. Writes go through a temp sibling and an atomic rename so a
//! crash mid-save leaves the previous ledger intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::MonthbookError;
use crate::models::{FinanceRecord, Ledger};

fn storage_err(what: &str, path: &Path, err: impl std::fmt::Display) -> MonthbookError {
    MonthbookError::Storage(format!("{} {}: {}", what, path.display(), err))
}

/// Read a ledger file from disk
fn read_ledger(path: &Path) -> Result<Ledger, MonthbookError> {
    if !path.exists() {
        return Ok(Ledger::new());
    }

    let raw = fs::read_to_string(path).map_err(|e| storage_err("Failed to read", path, e))?;
    serde_json::from_str(&raw).map_err(|e| storage_err("Failed to parse", path, e))
}

/// Persist a ledger: serialize fully, fsync a temp sibling, rename over the target
fn write_ledger(path: &Path, ledger: &Ledger) -> Result<(), MonthbookError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| storage_err("Failed to create directory", parent, e))?;
    }

    let json = serde_json::to_vec_pretty(ledger)
        .map_err(|e| storage_err("Failed to serialize ledger for", path, e))?;

    // rename is only atomic within one directory, so the temp file must be
    // a sibling of the target
    let tmp = path.with_extension("json.tmp");
    let mut file =
        fs::File::create(&tmp).map_err(|e| storage_err("Failed to create temp file", &tmp, e))?;
    file.write_all(&json)
        .map_err(|e| storage_err("Failed to write", &tmp, e))?;
    file.sync_all()
        .map_err(|e| storage_err("Failed to sync", &tmp, e))?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        storage_err("Failed to replace", path, e)
    })
}

/// Repository for one user's ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing file loads as an empty ledger.
    pub fn load(&self) -> Result<(), MonthbookError> {
        let ledger = read_ledger(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MonthbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = ledger;
        Ok(())
    }

    /// Save the ledger to disk
    pub fn save(&self) -> Result<(), MonthbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonthbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_ledger(&self.path, &data)
    }

    /// Append a record at the end of the in-memory ledger
    ///
    /// Callers persist with `save()` once the append is accepted.
    pub fn append(&self, record: FinanceRecord) -> Result<(), MonthbookError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MonthbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.append(record);
        Ok(())
    }

    /// Get a snapshot of the full ledger in insertion order
    pub fn ledger(&self) -> Result<Ledger, MonthbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonthbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of records currently held
    pub fn len(&self) -> Result<usize, MonthbookError> {
        let data = self
            .data
            .read()
            .map_err(|e| MonthbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Whether the ledger currently holds no records
    pub fn is_empty(&self) -> Result<bool, MonthbookError> {
        Ok(self.len()? == 0)
    }
}
