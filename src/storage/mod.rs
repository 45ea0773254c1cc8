//! Storage layer for monthbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. All state belongs to one user, whose identity is injected when
//! the storage is constructed; there is no ambient user lookup.

pub mod ledgers;
pub mod profile;

pub use ledgers::LedgerRepository;
pub use profile::ProfileRepository;

use crate::config::paths::MonthbookPaths;
use crate::error::MonthbookError;

/// Main storage coordinator for one user's data
pub struct Storage {
    paths: MonthbookPaths,
    user_email: String,
    pub ledger: LedgerRepository,
    pub profile: ProfileRepository,
}

impl Storage {
    /// Create a Storage instance bound to the given user identity
    pub fn for_user(
        paths: MonthbookPaths,
        user_email: impl Into<String>,
    ) -> Result<Self, MonthbookError> {
        let user_email = user_email.into();
        if user_email.trim().is_empty() {
            return Err(MonthbookError::Config(
                "No user set; pass --user or set MONTHBOOK_USER".to_string(),
            ));
        }

        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file(&user_email)),
            profile: ProfileRepository::new(paths.profile_file()),
            user_email,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MonthbookPaths {
        &self.paths
    }

    /// The user identity this storage is bound to
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Load the user's ledger from disk
    pub fn load(&self) -> Result<(), MonthbookError> {
        self.ledger.load()
    }
}
