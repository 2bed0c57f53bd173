//! Spending grouped by category

use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Money};

/// Total spending in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Sum expenses per category, largest first
///
/// Categories with equal sums keep the order in which they were first
/// encountered in `expenses`.
pub fn compute_category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => total.amount += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount: expense.amount,
            }),
        }
    }

    // Stable sort keeps encounter order among ties
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{demo_expenses, expense};

    #[test]
    fn test_empty_input() {
        assert!(compute_category_totals(&[]).is_empty());
    }

    #[test]
    fn test_demo_ordering() {
        let totals = compute_category_totals(&demo_expenses());
        let order: Vec<_> = totals.iter().map(|t| t.category).collect();

        assert_eq!(
            order,
            vec![
                ExpenseCategory::Shopping,
                ExpenseCategory::Education,
                ExpenseCategory::Transport,
                ExpenseCategory::Entertainment,
                ExpenseCategory::Food,
            ]
        );
        assert_eq!(totals[0].amount, Money::from_rupees(1200));
    }

    #[test]
    fn test_groups_and_sums() {
        let expenses = vec![
            expense("Lunch", 150, ExpenseCategory::Food),
            expense("Bus", 40, ExpenseCategory::Transport),
            expense("Dinner", 300, ExpenseCategory::Food),
        ];
        let totals = compute_category_totals(&expenses);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, ExpenseCategory::Food);
        assert_eq!(totals[0].amount, Money::from_rupees(450));
        assert_eq!(totals[1].amount, Money::from_rupees(40));
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let expenses = vec![
            expense("Pills", 100, ExpenseCategory::Health),
            expense("Movie", 100, ExpenseCategory::Entertainment),
            expense("Power", 100, ExpenseCategory::Utilities),
            expense("Cab", 50, ExpenseCategory::Transport),
            expense("Bus", 50, ExpenseCategory::Transport),
        ];
        let order: Vec<_> = compute_category_totals(&expenses)
            .iter()
            .map(|t| t.category)
            .collect();

        assert_eq!(
            order,
            vec![
                ExpenseCategory::Health,
                ExpenseCategory::Entertainment,
                ExpenseCategory::Utilities,
                ExpenseCategory::Transport,
            ]
        );
    }

    #[test]
    fn test_sum_matches_total_and_sorted_descending() {
        let expenses = demo_expenses();
        let totals = compute_category_totals(&expenses);

        let category_sum: Money = totals.iter().map(|t| t.amount).sum();
        let expense_sum: Money = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(category_sum, expense_sum);
        assert!(totals.windows(2).all(|w| w[0].amount >= w[1].amount));
    }
}
