//! Budget alerts
//!
//! Rules are evaluated in a fixed priority order and their alerts
//! concatenated:
//!
//! 1. Budget status (exceeded, critical or warning tier)
//! 2. Category concentration, one alert per category over the threshold
//! 3. Savings goal reached
//! 4. Run-rate projection over budget
//!
//! When none of them fire, a single fallback alert is emitted instead.

use serde::Serialize;
use std::fmt;

use super::category_totals::CategoryTotal;
use super::projection::RunRate;
use super::totals::Totals;
use super::usage::{classify_usage, UsageLevel};
use crate::models::{Expense, ExpenseCategory, Money, UserProfile};

/// Share of total spending above which a category is flagged
pub const CATEGORY_CONCENTRATION_THRESHOLD: f64 = 40.0;

/// How an alert should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Danger,
    Warning,
    Success,
    Info,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        };
        f.write_str(s)
    }
}

/// What triggered an alert, with the figures behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertKind {
    BudgetExceeded { overspent: Money },
    BudgetCritical { percent_used: f64 },
    BudgetWarning { percent_used: f64 },
    CategoryConcentration { category: ExpenseCategory, share: f64 },
    SavingsGoalReached { savings_goal: Money },
    ProjectedOverspend { average_daily: Money, overage: Money },
    OnTrack,
    StartTracking,
}

impl AlertKind {
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::BudgetExceeded { .. } | Self::BudgetCritical { .. } => AlertSeverity::Danger,
            Self::BudgetWarning { .. }
            | Self::CategoryConcentration { .. }
            | Self::ProjectedOverspend { .. } => AlertSeverity::Warning,
            Self::SavingsGoalReached { .. } | Self::OnTrack => AlertSeverity::Success,
            Self::StartTracking => AlertSeverity::Info,
        }
    }

    /// Alert text with amounts in rupees
    pub fn message(&self) -> String {
        self.message_with_symbol("₹")
    }

    /// Alert text with amounts prefixed by `symbol`
    pub fn message_with_symbol(&self, symbol: &str) -> String {
        let money = |m: &Money| m.format_with_symbol(symbol);

        match self {
            Self::BudgetExceeded { overspent } => {
                format!("Budget exceeded! You have overspent by {}", money(overspent))
            }
            Self::BudgetCritical { percent_used } => {
                format!("Critical: you have used {:.1}% of your budget!", percent_used)
            }
            Self::BudgetWarning { percent_used } => format!(
                "Warning: you have used {:.1}% of your budget. Spend wisely!",
                percent_used
            ),
            Self::CategoryConcentration { category, share } => format!(
                "{} accounts for {:.1}% of your spending. Consider reducing expenses in this category.",
                category, share
            ),
            Self::SavingsGoalReached { savings_goal } => format!(
                "Congratulations! You've reached your savings goal of {}!",
                money(savings_goal)
            ),
            Self::ProjectedOverspend {
                average_daily,
                overage,
            } => format!(
                "At your current spending rate ({}/day), you'll exceed your budget by {}",
                money(average_daily),
                money(overage)
            ),
            Self::OnTrack => {
                "Great job! You're managing your expenses well. Keep it up!".to_string()
            }
            Self::StartTracking => {
                "Start tracking your expenses to get personalized insights and alerts!".to_string()
            }
        }
    }
}

/// A single alert for the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub kind: AlertKind,
    pub message: String,
}

impl From<AlertKind> for Alert {
    fn from(kind: AlertKind) -> Self {
        Self {
            severity: kind.severity(),
            message: kind.message(),
            kind,
        }
    }
}

/// Generate the prioritized alert list for a snapshot
///
/// `day_of_month` is the current calendar day (1-31) and drives the
/// run-rate projection; it is passed in rather than read from the clock.
pub fn generate_alerts(
    profile: &UserProfile,
    expenses: &[Expense],
    totals: &Totals,
    category_totals: &[CategoryTotal],
    day_of_month: u32,
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = Vec::new();

    if let Some(kind) = budget_status(totals) {
        alerts.push(kind.into());
    }

    alerts.extend(category_concentration(totals, category_totals).map(Alert::from));

    if totals.remaining.is_positive() && totals.remaining >= profile.savings_goal {
        alerts.push(
            AlertKind::SavingsGoalReached {
                savings_goal: profile.savings_goal,
            }
            .into(),
        );
    }

    if !expenses.is_empty() {
        let rate = RunRate::project(totals.total_spent, day_of_month);
        if let Some(overage) = rate.overage(profile.budget) {
            alerts.push(
                AlertKind::ProjectedOverspend {
                    average_daily: rate.average_daily,
                    overage,
                }
                .into(),
            );
        }
    }

    if alerts.is_empty() {
        let fallback = if expenses.is_empty() {
            AlertKind::StartTracking
        } else {
            AlertKind::OnTrack
        };
        alerts.push(fallback.into());
    }

    alerts
}

fn budget_status(totals: &Totals) -> Option<AlertKind> {
    match classify_usage(totals.percent_used) {
        UsageLevel::Exceeded => Some(AlertKind::BudgetExceeded {
            overspent: totals.remaining.abs(),
        }),
        UsageLevel::Critical => Some(AlertKind::BudgetCritical {
            percent_used: totals.percent_used,
        }),
        UsageLevel::Warning => Some(AlertKind::BudgetWarning {
            percent_used: totals.percent_used,
        }),
        UsageLevel::Normal => None,
    }
}

fn category_concentration<'a>(
    totals: &'a Totals,
    category_totals: &'a [CategoryTotal],
) -> impl Iterator<Item = AlertKind> + 'a {
    // No spending means no shares to compare
    let skip = totals.total_spent.is_zero();

    category_totals
        .iter()
        .filter(move |_| !skip)
        .filter_map(move |ct| {
            let share = share_of(ct.amount, totals.total_spent);
            (share > CATEGORY_CONCENTRATION_THRESHOLD).then_some(AlertKind::CategoryConcentration {
                category: ct.category,
                share,
            })
        })
}

/// Category share of a non-zero total; signed totals are allowed here
fn share_of(amount: Money, total: Money) -> f64 {
    amount.paise() as f64 * 100.0 / total.paise() as f64
}
