//! Expense categories
//!
//! A closed set of categories. Labels that don't match a known category are
//! normalized to [`ExpenseCategory::Other`] when parsed or deserialized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Education,
    Entertainment,
    Shopping,
    Health,
    Utilities,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Education,
            Self::Entertainment,
            Self::Shopping,
            Self::Health,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// The stored key (`food`, `transport`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Transport => "Transportation",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Education => "📚",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Health => "💊",
            Self::Utilities => "💡",
            Self::Other => "📦",
        }
    }

    /// Look up a category by key, returning `None` for unknown labels
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Look up a category by key, normalizing unknown labels to `Other`
    pub fn from_label(label: &str) -> Self {
        Self::from_key(label).unwrap_or_else(|| {
            tracing::warn!(label, "unrecognized expense category, treating as other");
            Self::Other
        })
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    /// Strict parse used by the intake layer; unknown keys are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

impl From<String> for ExpenseCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.key().to_string()
    }
}

/// Error returned when a category key is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.key()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            keys.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for category in ExpenseCategory::all() {
            assert_eq!(ExpenseCategory::from_key(category.key()), Some(*category));
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(ExpenseCategory::from_key("Food"), Some(ExpenseCategory::Food));
        assert_eq!(
            ExpenseCategory::from_key(" SHOPPING "),
            Some(ExpenseCategory::Shopping)
        );
    }

    #[test]
    fn test_unknown_label_normalizes_to_other() {
        assert_eq!(ExpenseCategory::from_label("rent"), ExpenseCategory::Other);
        assert_eq!(ExpenseCategory::from_label(""), ExpenseCategory::Other);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "groceries".parse::<ExpenseCategory>().unwrap_err();
        assert!(err.to_string().contains("groceries"));
        assert!(err.to_string().contains("utilities"));
        assert_eq!("health".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Health));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ExpenseCategory::Food.to_string(), "Food & Dining");
        assert_eq!(ExpenseCategory::Transport.to_string(), "Transportation");
        assert_eq!(ExpenseCategory::Other.icon(), "📦");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExpenseCategory::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");

        let parsed: ExpenseCategory = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Education);

        let unknown: ExpenseCategory = serde_json::from_str("\"gadgets\"").unwrap();
        assert_eq!(unknown, ExpenseCategory::Other);
    }
}
