use chrono::NaiveDate;

use crate::forecast::aggregate::{index_by_date, ratio, sum_by};
use crate::model::calendar::Week;
use crate::model::daily_point::DailyPoint;
use crate::model::projection::WeeklyConfirmedRow;

/// Realized performance per week: the whole week's target against actuals
/// confirmed up to `today`. Forecasts never enter these rows.
pub fn build_weekly_confirmed(
    series: &[DailyPoint],
    weeks: &[Week],
    today: NaiveDate,
) -> Vec<WeeklyConfirmedRow> {
    let by_date = index_by_date(series);

    weeks
        .iter()
        .map(|week| {
            let located: Vec<&DailyPoint> = week
                .days
                .iter()
                .filter_map(|d| by_date.get(d).copied())
                .collect();

            let target_sum = sum_by(located.iter().copied(), |p| p.target);
            let actual_sum = sum_by(
                located.iter().copied().filter(|p| p.is_confirmed(today)),
                |p| p.actual,
            );

            WeeklyConfirmedRow {
                index: week.index,
                start: week.start,
                end: week.end,
                target_sum,
                actual_sum,
                rate_confirmed: ratio(actual_sum, target_sum),
            }
        })
        .collect()
}
