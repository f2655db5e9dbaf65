use chrono::NaiveDate;
use serde::Serialize;

use crate::model::calendar::{Week, YearMonth};

/// Month-to-date achievement and the AI-based month-end landing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthRates {
    pub m_actual: f64,
    pub m_target: f64,
    pub mtd_target: f64,
    pub landing_ai: f64,
    pub mtd_rate: Option<f64>,
    pub month_rate_proj: Option<f64>,
}

/// Month-end landing extrapolated from the recent business-day pace.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaceLanding {
    pub landing_pace: f64,
    pub future_biz: usize,
    pub future_holi: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyConfirmedRow {
    pub index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub target_sum: f64,
    pub actual_sum: f64,
    pub rate_confirmed: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShortHorizon {
    pub today_ai: Option<f64>,
    pub week_ai: Option<f64>,
    pub week_target: f64,
}

/// Everything one dashboard render needs, computed for a single reference date.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub month: YearMonth,
    pub today: NaiveDate,
    pub weeks: Vec<Week>,
    pub current_week: Option<usize>,
    /// Stored points for the month; zero means there is no data yet.
    pub point_count: usize,
    pub rates: MonthRates,
    pub pace_window: usize,
    pub pace: Option<f64>,
    pub pace_landing: PaceLanding,
    pub weekly: Vec<WeeklyConfirmedRow>,
    pub short: ShortHorizon,
}

impl DashboardSnapshot {
    /// AI landing minus pace landing. The two landings are shown side by side,
    /// this is only the discrepancy between them.
    pub fn landing_gap(&self) -> f64 {
        self.rates.landing_ai - self.pace_landing.landing_pace
    }

    /// Pace landing against the month target, `None` without a target.
    pub fn pace_rate_proj(&self) -> Option<f64> {
        crate::forecast::aggregate::ratio(self.pace_landing.landing_pace, self.rates.m_target)
    }

    pub fn current_week_row(&self) -> Option<&WeeklyConfirmedRow> {
        self.current_week.and_then(|i| self.weekly.get(i))
    }
}
