use chrono::NaiveDate;

use crate::forecast::aggregate::{index_by_date, sum, sum_by};
use crate::model::calendar::Week;
use crate::model::daily_point::DailyPoint;
use crate::model::projection::ShortHorizon;

/// Today's AI figure and a blended projection for the current week:
/// actuals for days up to `today`, predictions for the rest.
///
/// `current_week` is `None` when `today` lies outside every tracked week
/// (a Sunday, or a date outside the month).
pub fn build_short_ai(
    series: &[DailyPoint],
    current_week: Option<&Week>,
    today: NaiveDate,
) -> ShortHorizon {
    let by_date = index_by_date(series);
    let today_ai = by_date.get(&today).map(|p| p.predicted);

    let Some(week) = current_week else {
        return ShortHorizon {
            today_ai,
            week_ai: None,
            week_target: 0.0,
        };
    };

    let located: Vec<&DailyPoint> = week
        .days
        .iter()
        .filter_map(|d| by_date.get(d).copied())
        .collect();

    let (confirmed, upcoming): (Vec<&DailyPoint>, Vec<&DailyPoint>) =
        located.iter().copied().partition(|p| p.is_confirmed(today));
    let past = sum_by(confirmed, |p| p.actual);
    let future = sum(upcoming.iter().map(|p| p.predicted));
    let week_target = sum_by(located, |p| p.target);

    ShortHorizon {
        today_ai,
        week_ai: Some(past + future),
        week_target,
    }
}
