//! User profile model
//!
//! Holds the monthly budget and savings goal the analyzer measures against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::money::Money;

/// The user whose expenses are being tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,

    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Monthly spending ceiling
    #[serde(default)]
    pub budget: Money,

    /// Target leftover after spending
    #[serde(default)]
    pub savings_goal: Money,

    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with no budget set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: String::new(),
            budget: Money::zero(),
            savings_goal: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style budget setter
    pub fn with_budget(mut self, budget: Money, savings_goal: Money) -> Self {
        self.budget = budget;
        self.savings_goal = savings_goal;
        self
    }

    /// Check the budget update rules: budget > 0, savings goal >= 0
    pub fn validate_budget(budget: Money, savings_goal: Money) -> Result<(), BudgetValidationError> {
        if !budget.is_positive() {
            return Err(BudgetValidationError::NonPositiveBudget(budget));
        }

        if savings_goal.is_negative() {
            return Err(BudgetValidationError::NegativeSavingsGoal(savings_goal));
        }

        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for budget updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveBudget(Money),
    NegativeSavingsGoal(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBudget(amount) => {
                write!(f, "Monthly budget must be positive (got {})", amount)
            }
            Self::NegativeSavingsGoal(amount) => {
                write!(f, "Savings goal must be non-negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
