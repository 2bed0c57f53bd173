//! Dashboard view
//!
//! Budget cards, the usage progress bar, the category chart and the alert
//! list for one analyzed snapshot.

use crate::analysis::{Analysis, CategoryTotal, Totals, UsageLevel};
use crate::models::UserProfile;

use super::alerts::format_alerts;
use super::report::{colored_for_usage, format_bar, format_header, format_percentage, separator};

const WIDTH: usize = 60;
const PROGRESS_WIDTH: usize = 40;
const CHART_WIDTH: usize = 24;

/// Budget, spent, remaining and savings cards
pub fn format_budget_cards(profile: &UserProfile, totals: &Totals, symbol: &str) -> String {
    let cards = [
        ("Monthly Budget", profile.budget),
        ("Total Spent", totals.total_spent),
        ("Remaining", totals.remaining),
        ("Savings", totals.savings_achieved),
    ];

    cards
        .iter()
        .map(|(label, amount)| format!("  {:<16}{:>16}\n", label, amount.format_with_symbol(symbol)))
        .collect()
}

/// Usage progress bar, capped at 100% and colored by tier
pub fn format_progress(totals: &Totals, usage: UsageLevel) -> String {
    let shown = totals.percent_used.clamp(0.0, 100.0);
    let bar = format_bar(shown, 100.0, PROGRESS_WIDTH);

    format!(
        "  {} {} ({})\n",
        colored_for_usage(&bar, usage),
        format_percentage(totals.percent_used),
        usage
    )
}

/// One bar per category, scaled to the largest category
pub fn format_category_chart(category_totals: &[CategoryTotal], symbol: &str) -> String {
    let Some(max) = category_totals.first().map(|t| t.amount.as_f64()) else {
        return "  No expenses recorded yet.\n".to_string();
    };

    let mut output = String::new();
    for total in category_totals {
        output.push_str(&format!(
            "  {} {:<16} {} {:>12}\n",
            total.category.icon(),
            total.category.display_name(),
            format_bar(total.amount.as_f64(), max, CHART_WIDTH),
            total.amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// The full dashboard
pub fn format_dashboard(
    profile: &UserProfile,
    analysis: &Analysis,
    symbol: &str,
    is_demo: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header(&format!("Expense Dashboard: {}", profile.name), WIDTH));
    output.push('\n');
    if is_demo {
        output.push_str(&format_header("(showing demo data)", WIDTH));
        output.push('\n');
    }
    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&format_budget_cards(profile, &analysis.totals, symbol));
    output.push('\n');
    output.push_str("Budget Used\n");
    output.push_str(&format_progress(&analysis.totals, analysis.usage));
    output.push('\n');

    output.push_str("Spending by Category\n");
    output.push_str(&format_category_chart(&analysis.category_totals, symbol));
    output.push('\n');

    output.push_str("Alerts\n");
    output.push_str(&format_alerts(&analysis.alerts, symbol));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{demo_expenses, profile};
    use crate::models::{ExpenseCategory, Money};

    #[test]
    fn test_budget_cards() {
        let profile = profile(10000, 2000);
        let analysis = Analysis::generate(&profile, &demo_expenses(), 10);

        let cards = format_budget_cards(&profile, &analysis.totals, "₹");
        assert!(cards.contains("Monthly Budget"));
        assert!(cards.contains("₹10000.00"));
        assert!(cards.contains("₹2900.00"));
        assert!(cards.contains("₹7100.00"));
    }

    #[test]
    fn test_progress_capped() {
        let totals = Totals {
            total_spent: Money::from_rupees(150),
            remaining: Money::from_rupees(-50),
            savings_achieved: Money::from_rupees(-50),
            percent_used: 150.0,
        };

        let bar = format_progress(&totals, UsageLevel::Exceeded);
        assert_eq!(bar.matches('█').count(), PROGRESS_WIDTH);
        assert!(bar.contains("150%"));
    }

    #[test]
    fn test_category_chart_scaled_to_largest() {
        let totals = vec![
            CategoryTotal {
                category: ExpenseCategory::Shopping,
                amount: Money::from_rupees(1200),
            },
            CategoryTotal {
                category: ExpenseCategory::Food,
                amount: Money::from_rupees(600),
            },
        ];

        let chart = format_category_chart(&totals, "₹");
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines[0].matches('█').count(), CHART_WIDTH);
        assert_eq!(lines[1].matches('█').count(), CHART_WIDTH / 2);
    }

    #[test]
    fn test_empty_chart() {
        assert!(format_category_chart(&[], "₹").contains("No expenses"));
    }

    #[test]
    fn test_dashboard_demo_banner() {
        let profile = profile(10000, 2000);
        let analysis = Analysis::generate(&profile, &demo_expenses(), 10);

        let dashboard = format_dashboard(&profile, &analysis, "₹", true);
        assert!(dashboard.contains("showing demo data"));
        assert!(dashboard.contains("Shopping"));
        assert!(dashboard.contains("Alerts"));
    }
}
