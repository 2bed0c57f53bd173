//! Budget analytics view
//!
//! Spending figures plus the run-rate projection, suitable for a report or
//! JSON export.

use serde::Serialize;

use super::category_totals::{compute_category_totals, CategoryTotal};
use super::projection::RunRate;
use super::totals::compute_totals;
use crate::models::{Expense, Money, UserProfile};

/// Number of categories listed under top categories
pub const TOP_CATEGORY_COUNT: usize = 5;

/// Spending analytics for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAnalytics {
    pub total_spent: Money,
    pub remaining: Money,
    /// Percent of budget used, rounded to 2 decimals
    pub percent_used: f64,
    pub category_breakdown: Vec<CategoryTotal>,
    pub top_categories: Vec<CategoryTotal>,
    pub average_daily_spending: Money,
    pub projected_monthly_spending: Money,
}

impl BudgetAnalytics {
    pub fn generate(profile: &UserProfile, expenses: &[Expense], day_of_month: u32) -> Self {
        let totals = compute_totals(profile, expenses);
        let category_breakdown = compute_category_totals(expenses);
        let top_categories = category_breakdown
            .iter()
            .take(TOP_CATEGORY_COUNT)
            .copied()
            .collect();
        let rate = RunRate::project(totals.total_spent, day_of_month);

        Self {
            total_spent: totals.total_spent,
            remaining: totals.remaining,
            percent_used: (totals.percent_used * 100.0).round() / 100.0,
            category_breakdown,
            top_categories,
            average_daily_spending: rate.average_daily,
            projected_monthly_spending: rate.projected_monthly,
        }
    }

    /// Whether the projection runs past the budget
    pub fn projected_over(&self, budget: Money) -> bool {
        self.projected_monthly_spending > budget
    }
}
