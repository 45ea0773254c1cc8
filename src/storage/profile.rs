//! Profile repository for JSON storage
//!
//! The profile is stored as a single JSON object and consumed read-only;
//! monthbook never creates or updates it.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::MonthbookError;
use crate::models::Profile;

/// Read-only repository for the stored profile
pub struct ProfileRepository {
    path: PathBuf,
}

impl ProfileRepository {
    /// Create a new profile repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored profile
    ///
    /// Fails with `MissingProfile` when no profile file exists.
    pub fn load(&self) -> Result<Profile, MonthbookError> {
        if !self.path.exists() {
            return Err(MonthbookError::MissingProfile);
        }

        let file = File::open(&self.path).map_err(|e| {
            MonthbookError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            MonthbookError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_profile() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));

        assert!(matches!(repo.load(), Err(MonthbookError::MissingProfile)));
    }

    #[test]
    fn test_load_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"name":"Alice","email":"alice@example.com","dob":"1990-01-01","address":"42 Elm St"}"#,
        )
        .unwrap();

        let repo = ProfileRepository::new(path);
        let profile = repo.load().unwrap();
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.email, "alice@example.com");
    }

    #[test]
    fn test_malformed_profile_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(&path, r#"{"name": 7}"#).unwrap();

        let repo = ProfileRepository::new(path);
        assert!(matches!(repo.load(), Err(MonthbookError::Storage(_))));
    }
}
