//! Expense model
//!
//! A single recorded expense. Expenses are created and deleted by the store;
//! analysis only ever reads them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// Maximum length of an expense name
pub const MAX_NAME_LEN: usize = 100;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short label ("Bus Pass")
    pub name: String,

    /// Amount spent
    pub amount: Money,

    /// Category the expense is filed under
    #[serde(default)]
    pub category: ExpenseCategory,

    /// Calendar date the expense occurred
    pub date: NaiveDate,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Owning user
    pub user_id: UserId,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category,
            date,
            notes: None,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach notes, ignoring blank text
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        let trimmed = notes.trim();
        self.notes = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Case-insensitive match against name and notes
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&term))
    }

    /// Validate the expense before it is stored
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(ExpenseValidationError::NameTooLong(name.chars().count()));
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Expense name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            UserId::new(),
            "Bus Pass",
            Money::from_rupees(500),
            ExpenseCategory::Transport,
            NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
        )
    }

    #[test]
    fn test_new_expense() {
        let expense = sample();
        assert_eq!(expense.name, "Bus Pass");
        assert_eq!(expense.category, ExpenseCategory::Transport);
        assert!(expense.notes.is_none());
        assert_eq!(expense.created_at, expense.updated_at);
    }

    #[test]
    fn test_with_notes_skips_blank() {
        assert_eq!(
            sample().with_notes("  Monthly pass ").notes.as_deref(),
            Some("Monthly pass")
        );
        assert!(sample().with_notes("   ").notes.is_none());
    }

    #[test]
    fn test_validation() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());

        expense.name = "  ".into();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyName));

        expense.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NameTooLong(_))
        ));

        expense.name = "Bus Pass".into();
        expense.amount = Money::zero();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_matches_search() {
        let expense = sample().with_notes("Monthly pass");
        assert!(expense.matches_search("bus"));
        assert!(expense.matches_search("MONTHLY"));
        assert!(!expense.matches_search("train"));
        assert!(sample().matches_search(""));
    }

    #[test]
    fn test_unknown_category_in_stored_json() {
        let expense = sample();
        let mut value = serde_json::to_value(&expense).unwrap();
        value["category"] = serde_json::json!("gadgets");

        let parsed: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.category, ExpenseCategory::Other);
    }

    #[test]
    fn test_serialization() {
        let expense = sample().with_notes("Monthly pass");
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
