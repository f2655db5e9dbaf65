use chrono::NaiveDate;

use crate::forecast::aggregate::{ratio, sum_by};
use crate::model::daily_point::DailyPoint;
use crate::model::projection::MonthRates;

/// Month-to-date actual over target, and the AI landing: confirmed actuals
/// up to `today` plus the AI prediction for every later day.
pub fn compute_month_rates(series: &[DailyPoint], today: NaiveDate) -> MonthRates {
    let (confirmed, future): (Vec<&DailyPoint>, Vec<&DailyPoint>) =
        series.iter().partition(|p| p.is_confirmed(today));

    let m_actual = sum_by(confirmed.iter().copied(), |p| p.actual);
    let mtd_target = sum_by(confirmed.iter().copied(), |p| p.target);
    let m_target = sum_by(series, |p| p.target);
    let future_pred = sum_by(future.iter().copied(), |p| Some(p.predicted));

    let landing_ai = m_actual + future_pred;

    MonthRates {
        m_actual,
        m_target,
        mtd_target,
        landing_ai,
        mtd_rate: ratio(m_actual, mtd_target),
        month_rate_proj: ratio(landing_ai, m_target),
    }
}

/// Sum of confirmed actuals, absent actuals counting as zero.
pub fn month_actual(series: &[DailyPoint], today: NaiveDate) -> f64 {
    sum_by(series.iter().filter(|p| p.is_confirmed(today)), |p| p.actual)
}
