//! Demo dataset
//!
//! A sample student profile and five expenses, used to seed a fresh store
//! and as the fallback snapshot when the stores can't be read.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{Expense, ExpenseCategory, ExpenseId, Money, UserId, UserProfile};

const DEMO_EXPENSES: &[(&str, i64, ExpenseCategory, (i32, u32, u32), &str)] = &[
    ("Lunch at Canteen", 150, ExpenseCategory::Food, (2024, 1, 28), "Special thali"),
    ("Bus Pass", 500, ExpenseCategory::Transport, (2024, 1, 25), "Monthly pass"),
    (
        "Programming Books",
        800,
        ExpenseCategory::Education,
        (2024, 1, 20),
        "Python and JavaScript books",
    ),
    ("Movie Ticket", 250, ExpenseCategory::Entertainment, (2024, 1, 15), "Weekend movie"),
    (
        "Wireless Headphones",
        1200,
        ExpenseCategory::Shopping,
        (2024, 1, 10),
        "Bluetooth earbuds",
    ),
];

/// The demo user: budget 10000, savings goal 2000
pub fn demo_profile() -> UserProfile {
    let mut profile = UserProfile::new("Demo Student")
        .with_budget(Money::from_rupees(10000), Money::from_rupees(2000));
    profile.email = "student@example.com".to_string();
    profile
}

/// The demo expenses, newest first, owned by `user_id`
///
/// IDs and timestamps are derived from the entry position so repeated calls
/// return identical data.
pub fn demo_expenses(user_id: UserId) -> Vec<Expense> {
    DEMO_EXPENSES
        .iter()
        .enumerate()
        .filter_map(|(i, (name, rupees, category, (y, m, d), notes))| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            let stamp = Utc
                .from_local_datetime(&date.and_hms_opt(12, 0, 0)?)
                .single()?;

            let mut expense =
                Expense::new(user_id, *name, Money::from_rupees(*rupees), *category, date)
                    .with_notes(*notes);
            expense.id = ExpenseId::from_uuid(uuid::Uuid::from_u128(i as u128 + 1));
            expense.created_at = stamp;
            expense.updated_at = stamp;
            Some(expense)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile() {
        let profile = demo_profile();
        assert_eq!(profile.name, "Demo Student");
        assert_eq!(profile.budget, Money::from_rupees(10000));
        assert_eq!(profile.savings_goal, Money::from_rupees(2000));
    }

    #[test]
    fn test_demo_expenses() {
        let user_id = UserId::new();
        let expenses = demo_expenses(user_id);

        assert_eq!(expenses.len(), 5);
        assert!(expenses.iter().all(|e| e.user_id == user_id));
        assert!(expenses.iter().all(|e| e.validate().is_ok()));

        let total: Money = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(total, Money::from_rupees(2900));
        assert!(expenses.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_demo_expenses_are_stable() {
        let user_id = UserId::new();
        assert_eq!(demo_expenses(user_id), demo_expenses(user_id));
    }
}
