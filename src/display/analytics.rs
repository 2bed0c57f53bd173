//! Analytics and category breakdown views

use crate::analysis::{BudgetAnalytics, CategoryTotal};
use crate::models::Money;

use super::report::{format_percentage, separator};

const WIDTH: usize = 48;

/// Category totals with their share of all spending
pub fn format_category_breakdown(category_totals: &[CategoryTotal], symbol: &str) -> String {
    if category_totals.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let total: Money = category_totals.iter().map(|t| t.amount).sum();

    let mut output = format!("{:<20} {:>14} {:>8}\n", "Category", "Amount", "Share");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for entry in category_totals {
        let share = entry.amount.as_f64() * 100.0 / total.as_f64();
        output.push_str(&format!(
            "{:<20} {:>14} {:>8}\n",
            entry.category.display_name(),
            entry.amount.format_with_symbol(symbol),
            format_percentage(share)
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>14}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));
    output
}

/// Spending analytics report
pub fn format_analytics(analytics: &BudgetAnalytics, budget: Money, symbol: &str) -> String {
    let mut output = String::from("Budget Analytics\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let rows = [
        ("Total spent", analytics.total_spent.format_with_symbol(symbol)),
        ("Remaining", analytics.remaining.format_with_symbol(symbol)),
        ("Budget used", format!("{:.2}%", analytics.percent_used)),
        ("Average per day", analytics.average_daily_spending.format_with_symbol(symbol)),
        ("Projected month", analytics.projected_monthly_spending.format_with_symbol(symbol)),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{:<20} {:>18}\n", label, value));
    }

    if analytics.projected_over(budget) {
        output.push_str(&format!(
            "Projected spending is over the {} budget.\n",
            budget.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str("Top categories\n");
    for (rank, entry) in analytics.top_categories.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<18} {:>14}\n",
            rank + 1,
            entry.category.display_name(),
            entry.amount.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{demo_expenses, profile};
    use crate::analysis::compute_category_totals;

    #[test]
    fn test_category_breakdown() {
        let text = format_category_breakdown(&compute_category_totals(&demo_expenses()), "₹");
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[2].starts_with("Shopping"));
        assert!(lines[2].contains("41%"));
        assert!(text.contains("₹2900.00"));
    }

    #[test]
    fn test_empty_breakdown() {
        assert_eq!(format_category_breakdown(&[], "₹"), "No expenses recorded yet.");
    }

    #[test]
    fn test_format_analytics() {
        let profile = profile(3000, 0);
        let analytics = BudgetAnalytics::generate(&profile, &demo_expenses(), 10);

        let text = format_analytics(&analytics, profile.budget, "₹");
        assert!(text.contains("₹290.00"));
        assert!(text.contains("₹8700.00"));
        assert!(text.contains("Projected spending is over"));
        assert!(text.contains(" 1. Shopping"));
    }
}
