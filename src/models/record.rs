//! Monthly finance record model
//!
//! A record captures one month's figures: income, needy expenses, extra
//! (discretionary) expenses, and savings. The remaining balance is always
//! derived, never stored.

use serde::{Deserialize, Serialize};

/// Validation errors for a new entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    /// A field did not parse as a finite number
    NotANumber { field: &'static str },
    /// A field parsed but is below zero
    NegativeValue { field: &'static str },
    /// Committed amounts (expenses + extra + savings) exceed income
    InsufficientIncome { income: f64, committed: f64 },
}

impl std::fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { field } => {
                write!(f, "Please fill '{}' with a number", field)
            }
            Self::NegativeValue { field } => {
                write!(f, "'{}' cannot be negative", field)
            }
            Self::InsufficientIncome { income, committed } => {
                write!(
                    f,
                    "Total expenses + savings ({}) cannot exceed income ({})",
                    committed, income
                )
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// The four validated amounts of an entry, before month/year stamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryAmounts {
    pub income: f64,
    pub expenses: f64,
    pub extra: f64,
    pub savings: f64,
}

/// One month's finance record
///
/// Immutable once appended to a ledger. Serializes to the flat object
/// layout used on disk:
/// `{"income": .., "expenses": .., "extra": .., "savings": .., "month": "..", "year": ..}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// Monthly income
    pub income: f64,
    /// Needy (essential) expenses
    pub expenses: f64,
    /// Extra (discretionary) expenses
    pub extra: f64,
    /// Amount put into savings
    pub savings: f64,
    /// Calendar month name at creation time (e.g. "March")
    pub month: String,
    /// Calendar year at creation time
    pub year: i32,
}

impl FinanceRecord {
    /// Build a record from validated amounts and a month/year stamp
    pub fn from_amounts(amounts: EntryAmounts, month: impl Into<String>, year: i32) -> Self {
        Self {
            income: amounts.income,
            expenses: amounts.expenses,
            extra: amounts.extra,
            savings: amounts.savings,
            month: month.into(),
            year,
        }
    }

    /// Remaining balance: income minus everything committed
    pub fn remaining(&self) -> f64 {
        self.income - (self.expenses + self.extra + self.savings)
    }

    /// Chart label for this record (e.g. "March 2024")
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// Validate the four raw entry fields
///
/// Pure validation, no side effects. Check order matches the entry form:
/// every field must parse as a finite number, no field may be negative,
/// and income must cover expenses + extra + savings.
pub fn validate_amounts(
    income: &str,
    expenses: &str,
    extra: &str,
    savings: &str,
) -> Result<EntryAmounts, EntryValidationError> {
    let fields = [
        ("income", income),
        ("expenses", expenses),
        ("extra", extra),
        ("savings", savings),
    ];

    let mut parsed = [0.0_f64; 4];
    for (slot, (name, raw)) in parsed.iter_mut().zip(fields) {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| EntryValidationError::NotANumber { field: name })?;
        if !value.is_finite() {
            return Err(EntryValidationError::NotANumber { field: name });
        }
        *slot = value;
    }

    for ((name, _), value) in fields.into_iter().zip(parsed) {
        if value < 0.0 {
            return Err(EntryValidationError::NegativeValue { field: name });
        }
    }

    let [income, expenses, extra, savings] = parsed;
    let committed = expenses + extra + savings;
    if income < committed {
        return Err(EntryValidationError::InsufficientIncome { income, committed });
    }

    Ok(EntryAmounts {
        income,
        expenses,
        extra,
        savings,
    })
}

/// Lenient remaining calculation for the live preview
///
/// Unparseable or non-finite fields count as zero, and the result may be
/// negative. Only the final save enforces the income invariant; the
/// preview tracks keystrokes as-is.
pub fn compute_remaining(income: &str, expenses: &str, extra: &str, savings: &str) -> f64 {
    let lenient = |raw: &str| -> f64 {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    };

    lenient(income) - (lenient(expenses) + lenient(extra) + lenient(savings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_balanced_entry() {
        let amounts = validate_amounts("5000", "2000", "500", "1000").unwrap();
        assert_eq!(amounts.income, 5000.0);
        assert_eq!(amounts.expenses, 2000.0);
        assert_eq!(amounts.extra, 500.0);
        assert_eq!(amounts.savings, 1000.0);
    }

    #[test]
    fn test_validate_accepts_exact_income_match() {
        // income == expenses + extra + savings is allowed
        let amounts = validate_amounts("1000", "600", "300", "100").unwrap();
        assert_eq!(amounts.income, 1000.0);
    }

    #[test]
    fn test_validate_rejects_unparseable_field() {
        let err = validate_amounts("abc", "0", "0", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NotANumber { field: "income" });

        let err = validate_amounts("100", "", "0", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NotANumber { field: "expenses" });
    }

    #[test]
    fn test_validate_rejects_non_finite_field() {
        let err = validate_amounts("inf", "0", "0", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NotANumber { field: "income" });

        let err = validate_amounts("100", "NaN", "0", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NotANumber { field: "expenses" });
    }

    #[test]
    fn test_validate_rejects_negative_value() {
        let err = validate_amounts("-5", "0", "0", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NegativeValue { field: "income" });

        let err = validate_amounts("100", "0", "-1", "0").unwrap_err();
        assert_eq!(err, EntryValidationError::NegativeValue { field: "extra" });
    }

    #[test]
    fn test_validate_rejects_insufficient_income() {
        // 800 + 300 = 1100 > 1000
        let err = validate_amounts("1000", "800", "300", "0").unwrap_err();
        assert_eq!(
            err,
            EntryValidationError::InsufficientIncome {
                income: 1000.0,
                committed: 1100.0,
            }
        );
    }

    #[test]
    fn test_parse_errors_take_precedence_over_negatives() {
        // income is negative but savings doesn't parse; all fields must
        // parse before any range check runs
        let err = validate_amounts("-5", "0", "0", "x").unwrap_err();
        assert_eq!(err, EntryValidationError::NotANumber { field: "savings" });
    }

    #[test]
    fn test_remaining_matches_validated_amounts() {
        let amounts = validate_amounts("5000", "2000", "500", "1000").unwrap();
        let record = FinanceRecord::from_amounts(amounts, "March", 2024);
        assert_eq!(record.remaining(), 1500.0);
        assert_eq!(record.label(), "March 2024");
    }

    #[test]
    fn test_preview_is_lenient_and_may_go_negative() {
        // empty and junk fields count as zero
        assert_eq!(compute_remaining("", "", "", ""), 0.0);
        assert_eq!(compute_remaining("100", "abc", "", "20"), 80.0);

        // the preview may dip below zero; only the save path blocks this
        assert_eq!(compute_remaining("100", "150", "0", "0"), -50.0);
    }

    #[test]
    fn test_record_serializes_to_flat_object() {
        let record = FinanceRecord {
            income: 5000.0,
            expenses: 2000.0,
            extra: 500.0,
            savings: 1000.0,
            month: "March".to_string(),
            year: 2024,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["income"], 5000.0);
        assert_eq!(json["month"], "March");
        assert_eq!(json["year"], 2024);

        let back: FinanceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
