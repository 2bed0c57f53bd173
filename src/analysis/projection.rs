//! Run-rate projection
//!
//! Extrapolates month-end spending from the average daily spend so far.

use serde::Serialize;

use crate::models::Money;

/// Month length used for run-rate projections
pub const DAYS_PER_MONTH: u32 = 30;

/// Average daily spend and the month-end figure it implies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunRate {
    pub average_daily: Money,
    pub projected_monthly: Money,
    /// Unrounded projection in paise, used for threshold comparisons
    #[serde(skip)]
    projected_paise: f64,
}

impl RunRate {
    /// Project spending after `day_of_month` days; day 0 projects nothing
    pub fn project(total_spent: Money, day_of_month: u32) -> Self {
        let average_paise = if day_of_month > 0 {
            total_spent.paise() as f64 / f64::from(day_of_month)
        } else {
            0.0
        };
        let projected_paise = average_paise * f64::from(DAYS_PER_MONTH);

        Self {
            average_daily: Money::from_paise_f64(average_paise),
            projected_monthly: Money::from_paise_f64(projected_paise),
            projected_paise,
        }
    }

    /// How far the projection runs over `budget`, if it does
    pub fn overage(&self, budget: Money) -> Option<Money> {
        let budget_paise = budget.paise() as f64;
        if self.projected_paise > budget_paise {
            Some(Money::from_paise_f64(self.projected_paise - budget_paise))
        } else {
            None
        }
    }
}
