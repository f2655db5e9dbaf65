use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::calendar::YearMonth;
use crate::model::daily_point::DailyPoint;

// Mon..Sat multipliers on the base target for the predicted volume.
const WEEKDAY_SHAPE: [f64; 6] = [1.08, 1.02, 0.97, 1.00, 1.05, 0.88];
// Cycled per day of month to scatter actuals around the prediction.
const ACTUAL_DRIFT: [f64; 5] = [0.94, 1.03, 0.98, 1.07, 0.91];

/// A deterministic month for demos: Sundays are holidays with no target,
/// other days carry `base_target`, and actuals exist up to `today`.
pub fn generate_month(month: YearMonth, today: NaiveDate, base_target: f64) -> Vec<DailyPoint> {
    month
        .days()
        .map(|date| {
            if date.weekday() == Weekday::Sun {
                let mut point = DailyPoint::new(date, 0.0).with_target(0.0).holiday();
                if date <= today {
                    point.actual = Some(0.0);
                }
                return point;
            }

            let shape = WEEKDAY_SHAPE[date.weekday().num_days_from_monday() as usize];
            let predicted = (base_target * shape).round();
            let mut point = DailyPoint::new(date, predicted).with_target(base_target);
            if date <= today {
                let drift = ACTUAL_DRIFT[date.day0() as usize % ACTUAL_DRIFT.len()];
                point.actual = Some((predicted * drift).round());
            }
            point
        })
        .collect()
}
