//! Append-only ledger of monthly finance records
//!
//! The ledger is an ordered sequence, one per user. Records are only ever
//! appended; existing records are never edited, reordered, or removed.
//! Multiple records may share the same month and year (manual multi-entry
//! is allowed and never merged).

use serde::{Deserialize, Serialize};

use super::record::FinanceRecord;

/// A user's ordered sequence of monthly records
///
/// Serializes transparently as a bare JSON array of record objects, which
/// is the on-disk layout of the per-user ledger file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<FinanceRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end; prior records are untouched
    pub fn append(&mut self, record: FinanceRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn records(&self) -> &[FinanceRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<FinanceRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = FinanceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
