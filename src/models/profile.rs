//! User profile model
//!
//! Profile data is consumed read-only for display; monthbook never writes
//! it back.

use serde::{Deserialize, Serialize};

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub address: String,
}

impl Profile {
    /// Uppercased first letter of the name, used as the avatar initial
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}
