//! Display formatting for terminal output
//!
//! Provides utilities for formatting records, profiles, and reports for
//! terminal display.

pub mod report;

pub use report::{format_chart, format_series_data};

use crate::models::{FinanceRecord, Profile};

/// Format an amount with the configured currency symbol
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{}{}", currency, value)
}

/// Format a freshly saved record as a short confirmation block
pub fn format_saved_record(record: &FinanceRecord, currency: &str) -> String {
    format!(
        "Saved entry for {}\n  Income:         {}\n  Needy Expenses: {}\n  Extra Expenses: {}\n  Savings:        {}\n  Remaining:      {}",
        record.label(),
        format_amount(record.income, currency),
        format_amount(record.expenses, currency),
        format_amount(record.extra, currency),
        format_amount(record.savings, currency),
        format_amount(record.remaining(), currency),
    )
}

/// Format the stored profile as a card
pub fn format_profile(profile: &Profile) -> String {
    format!(
        "({}) {}\n  Email:   {}\n  DOB:     {}\n  Address: {}",
        profile.initial(),
        profile.name,
        profile.email,
        profile.dob,
        profile.address,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1500.0, "₹"), "₹1500");
        assert_eq!(format_amount(-50.0, "$"), "$-50");
    }

    #[test]
    fn test_format_saved_record_shows_remaining() {
        let record = FinanceRecord {
            income: 5000.0,
            expenses: 2000.0,
            extra: 500.0,
            savings: 1000.0,
            month: "March".to_string(),
            year: 2024,
        };
        let text = format_saved_record(&record, "₹");
        assert!(text.contains("March 2024"));
        assert!(text.contains("Remaining:      ₹1500"));
    }

    #[test]
    fn test_format_profile_card() {
        let profile = Profile {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            dob: "1990-01-01".to_string(),
            address: "42 Elm St".to_string(),
        };
        let text = format_profile(&profile);
        assert!(text.starts_with("(A) alice"));
        assert!(text.contains("alice@example.com"));
    }
}
