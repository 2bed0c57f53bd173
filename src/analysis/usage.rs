//! Usage tiers
//!
//! One classification shared by the progress bar and the budget-status
//! alerts so the two never disagree.

use serde::Serialize;
use std::fmt;

/// Percent-used threshold for the warning tier
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Percent-used threshold for the critical tier
pub const CRITICAL_THRESHOLD: f64 = 90.0;
/// Percent-used threshold for the exceeded tier
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// How much of the budget has been consumed, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
    Exceeded,
}

impl UsageLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "On track",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Exceeded => "Exceeded",
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a percent-used value; lower bounds are inclusive
pub fn classify_usage(percent_used: f64) -> UsageLevel {
    if percent_used >= EXCEEDED_THRESHOLD {
        UsageLevel::Exceeded
    } else if percent_used >= CRITICAL_THRESHOLD {
        UsageLevel::Critical
    } else if percent_used >= WARNING_THRESHOLD {
        UsageLevel::Warning
    } else {
        UsageLevel::Normal
    }
}
