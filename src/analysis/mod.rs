//! Budget analysis for ExpenseX
//!
//! Pure functions over a snapshot of a [`UserProfile`] and its expenses. No
//! I/O, no clock reads and no shared state: the current day of the month is
//! passed in by the caller, and the same snapshot always yields the same
//! output, so the analysis can run from any thread.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expensex::analysis::{Analysis, UsageLevel};
//! use expensex::models::{Expense, ExpenseCategory, Money, UserProfile};
//!
//! let profile = UserProfile::new("Demo")
//!     .with_budget(Money::from_rupees(1000), Money::from_rupees(100));
//! let expenses = vec![Expense::new(
//!     profile.id,
//!     "Lunch",
//!     Money::from_rupees(150),
//!     ExpenseCategory::Food,
//!     NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
//! )];
//!
//! let analysis = Analysis::generate(&profile, &expenses, 28);
//! assert_eq!(analysis.usage, UsageLevel::Normal);
//! assert_eq!(analysis.totals.remaining, Money::from_rupees(850));
//! ```

pub mod alerts;
pub mod analytics;
pub mod category_totals;
pub mod projection;
pub mod totals;
pub mod usage;

pub use alerts::{generate_alerts, Alert, AlertKind, AlertSeverity};
pub use analytics::BudgetAnalytics;
pub use category_totals::{compute_category_totals, CategoryTotal};
pub use projection::RunRate;
pub use totals::{compute_totals, Totals};
pub use usage::{classify_usage, UsageLevel};

use serde::Serialize;

use crate::models::{Expense, UserProfile};

/// All derived views for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub totals: Totals,
    pub usage: UsageLevel,
    pub category_totals: Vec<CategoryTotal>,
    pub alerts: Vec<Alert>,
}

impl Analysis {
    /// Run every derivation over the snapshot
    pub fn generate(profile: &UserProfile, expenses: &[Expense], day_of_month: u32) -> Self {
        let totals = compute_totals(profile, expenses);
        let usage = classify_usage(totals.percent_used);
        let category_totals = compute_category_totals(expenses);
        let alerts = generate_alerts(profile, expenses, &totals, &category_totals, day_of_month);

        Self {
            totals,
            usage,
            category_totals,
            alerts,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{Expense, ExpenseCategory, Money, UserId, UserProfile};

    pub fn profile(budget: i64, savings_goal: i64) -> UserProfile {
        UserProfile::new("Test User")
            .with_budget(Money::from_rupees(budget), Money::from_rupees(savings_goal))
    }

    pub fn expense(name: &str, rupees: i64, category: ExpenseCategory) -> Expense {
        Expense::new(
            UserId::new(),
            name,
            Money::from_rupees(rupees),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    pub fn demo_expenses() -> Vec<Expense> {
        crate::storage::demo::demo_expenses(UserId::new())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{demo_expenses, expense, profile};
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    #[test]
    fn test_generate_bundles_all_views() {
        let analysis = Analysis::generate(&profile(10000, 2000), &demo_expenses(), 10);

        assert_eq!(analysis.totals.total_spent, Money::from_rupees(2900));
        assert_eq!(analysis.usage, UsageLevel::Normal);
        assert_eq!(analysis.category_totals[0].category, ExpenseCategory::Shopping);
        assert_eq!(analysis.alerts.len(), 2);
    }

    #[test]
    fn test_usage_and_alerts_agree() {
        for spent in [0, 500, 760, 910, 1000, 1500] {
            let expenses = if spent == 0 {
                Vec::new()
            } else {
                vec![expense("Spend", spent, ExpenseCategory::Other)]
            };
            let analysis = Analysis::generate(&profile(1000, 0), &expenses, 31);

            let status = analysis.alerts.iter().find_map(|a| match a.kind {
                AlertKind::BudgetExceeded { .. } => Some(UsageLevel::Exceeded),
                AlertKind::BudgetCritical { .. } => Some(UsageLevel::Critical),
                AlertKind::BudgetWarning { .. } => Some(UsageLevel::Warning),
                _ => None,
            });
            assert_eq!(status.unwrap_or(UsageLevel::Normal), analysis.usage);
        }
    }

    #[test]
    fn test_input_order_does_not_change_totals() {
        let expenses = demo_expenses();
        let mut reversed = expenses.clone();
        reversed.reverse();

        let a = Analysis::generate(&profile(10000, 2000), &expenses, 10);
        let b = Analysis::generate(&profile(10000, 2000), &reversed, 10);

        assert_eq!(a.totals, b.totals);
        assert_eq!(a.category_totals, b.category_totals);
        assert_eq!(a.alerts, b.alerts);
    }

    #[test]
    fn test_same_snapshot_same_output() {
        let profile = profile(2500, 300);
        let expenses = demo_expenses();

        let first = serde_json::to_vec(&Analysis::generate(&profile, &expenses, 12)).unwrap();
        let second = serde_json::to_vec(&Analysis::generate(&profile, &expenses, 12)).unwrap();
        assert_eq!(first, second);
    }
}
