//! Aggregate budget totals

use serde::Serialize;

use crate::models::{Expense, Money, UserProfile};

/// Headline figures for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of all expense amounts
    pub total_spent: Money,
    /// Budget minus spending; negative when overspent
    pub remaining: Money,
    /// Portion of the savings goal covered by the remaining budget
    pub savings_achieved: Money,
    /// Spending as a percentage of the budget; 0 when no budget is set
    pub percent_used: f64,
}

/// Compute the headline totals for a profile and its expenses
pub fn compute_totals(profile: &UserProfile, expenses: &[Expense]) -> Totals {
    let total_spent: Money = expenses.iter().map(|e| e.amount).sum();
    let remaining = profile.budget - total_spent;

    let savings_achieved = if remaining.is_positive() {
        remaining.min(profile.savings_goal)
    } else {
        Money::zero()
    };

    Totals {
        total_spent,
        remaining,
        savings_achieved,
        percent_used: percent_of(total_spent, profile.budget),
    }
}

/// `part` as a percentage of `whole`, or 0 when `whole` is not positive
pub(crate) fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        part.paise() as f64 * 100.0 / whole.paise() as f64
    } else {
        0.0
    }
}
