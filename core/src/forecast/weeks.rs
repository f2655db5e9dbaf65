use chrono::{Datelike, Duration};

use crate::model::calendar::{Week, YearMonth};

/// Partitions `month` into Monday-start, six-day weeks.
///
/// Windows start at the Monday on or before the 1st and stride by seven
/// days. A window is kept when any of its days falls inside the month, so
/// the first and last weeks may carry days of the neighbouring months.
pub fn build_weeks(month: YearMonth) -> Vec<Week> {
    let first = month.first_day();
    let last = month.last_day();
    let mut start = first - Duration::days(first.weekday().num_days_from_monday() as i64);

    let mut weeks = Vec::new();
    while start <= last {
        let week = Week::starting(weeks.len(), start);
        if week.days.iter().any(|d| month.contains(*d)) {
            weeks.push(week);
        }
        start += Duration::days(7);
    }
    weeks
}

/// The week whose tracked days contain `date`. Sundays never match.
pub fn find_week(weeks: &[Week], date: chrono::NaiveDate) -> Option<&Week> {
    weeks.iter().find(|w| w.contains(date))
}
