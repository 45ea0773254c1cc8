//! Path management for monthbook
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `MONTHBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/monthbook` or `~/.config/monthbook`
//! 3. Windows: `%APPDATA%\monthbook`

use std::path::PathBuf;

use crate::error::MonthbookError;

/// Manages all paths used by monthbook
#[derive(Debug, Clone)]
pub struct MonthbookPaths {
    /// Base directory for all monthbook data
    base_dir: PathBuf,
}

impl MonthbookPaths {
    /// Create a new MonthbookPaths instance
    ///
    /// Path resolution:
    /// 1. `MONTHBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/monthbook` or `~/.config/monthbook`
    /// 3. Windows: `%APPDATA%\monthbook`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MonthbookError> {
        let base_dir = if let Ok(custom) = std::env::var("MONTHBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MonthbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/monthbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/monthbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to a user's ledger file
    ///
    /// Each user's records live in their own file, namespaced by email:
    /// `data/financeData_{email}.json`.
    pub fn ledger_file(&self, user_email: &str) -> PathBuf {
        self.data_dir()
            .join(format!("financeData_{}.json", user_email))
    }

    /// Get the path to profile.json
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/monthbook/)
    /// - Data directory (~/.config/monthbook/data/)
    pub fn ensure_directories(&self) -> Result<(), MonthbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonthbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MonthbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MonthbookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("monthbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MonthbookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MonthbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("monthbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = MonthbookPaths::with_base_dir(PathBuf::from("/tmp/monthbook-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/monthbook-test"));
        assert_eq!(
            paths.data_dir(),
            PathBuf::from("/tmp/monthbook-test").join("data")
        );
    }

    #[test]
    fn test_ledger_file_is_namespaced_by_email() {
        let paths = MonthbookPaths::with_base_dir(PathBuf::from("/tmp/monthbook-test"));
        let file = paths.ledger_file("alice@example.com");
        assert_eq!(
            file.file_name().unwrap().to_str().unwrap(),
            "financeData_alice@example.com.json"
        );

        let other = paths.ledger_file("bob@example.com");
        assert_ne!(file, other);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonthbookPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
