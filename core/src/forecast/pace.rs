use chrono::NaiveDate;

use crate::forecast::aggregate::mean;
use crate::forecast::month::month_actual;
use crate::model::daily_point::DailyPoint;
use crate::model::projection::PaceLanding;

pub const DEFAULT_PACE_WINDOW: usize = 7;

/// Mean actual over the last `window_size` business days strictly before `today`.
///
/// Days inside the window that have no actual are dropped from the mean
/// rather than replaced by older days. `None` when no sample remains.
pub fn current_business_pace(
    series: &[DailyPoint],
    today: NaiveDate,
    window_size: usize,
) -> Option<f64> {
    let mut past: Vec<&DailyPoint> = series
        .iter()
        .filter(|p| p.date < today && p.is_business_day())
        .collect();
    past.sort_by_key(|p| p.date);

    let skip = past.len().saturating_sub(window_size);
    mean(past[skip..].iter().filter_map(|p| p.actual))
}

/// Month-end landing if the recent pace simply continued.
///
/// A `None` pace contributes nothing for the remaining business days.
pub fn landing_by_current_pace(
    series: &[DailyPoint],
    today: NaiveDate,
    pace_biz: Option<f64>,
    pace_holiday: f64,
) -> PaceLanding {
    let m_actual = month_actual(series, today);

    let (future_biz, future_holi) = series
        .iter()
        .filter(|p| p.date > today)
        .fold((0usize, 0usize), |(biz, holi), p| {
            if p.is_business_day() {
                (biz + 1, holi)
            } else {
                (biz, holi + 1)
            }
        });

    let landing_pace = m_actual
        + pace_biz.unwrap_or(0.0) * future_biz as f64
        + pace_holiday * future_holi as f64;

    PaceLanding {
        landing_pace,
        future_biz,
        future_holi,
    }
}
