//! Alert list formatting

use crate::analysis::{Alert, AlertSeverity};

fn icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Danger => "🚨",
        AlertSeverity::Warning => "⚠️",
        AlertSeverity::Success => "✅",
        AlertSeverity::Info => "ℹ️",
    }
}

/// One line per alert, in rule order, amounts shown with `symbol`
pub fn format_alerts(alerts: &[Alert], symbol: &str) -> String {
    alerts
        .iter()
        .map(|a| {
            format!(
                "  {} [{}] {}\n",
                icon(a.severity),
                a.severity,
                a.kind.message_with_symbol(symbol)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AlertKind;
    use crate::models::Money;

    #[test]
    fn test_format_alerts_keeps_order() {
        let alerts: Vec<Alert> = vec![
            AlertKind::BudgetWarning { percent_used: 80.0 }.into(),
            AlertKind::OnTrack.into(),
        ];

        let text = format_alerts(&alerts, "₹");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[warning]"));
        assert!(lines[0].contains("80.0%"));
        assert!(lines[1].contains("[success]"));
    }

    #[test]
    fn test_amounts_follow_currency_symbol() {
        let alerts: Vec<Alert> = vec![AlertKind::SavingsGoalReached {
            savings_goal: Money::from_rupees(2000),
        }
        .into()];

        let text = format_alerts(&alerts, "$");
        assert!(text.contains("savings goal of $2000.00!"));
        assert!(!text.contains('₹'));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_alerts(&[], "₹"), "");
    }
}
