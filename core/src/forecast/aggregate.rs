use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::daily_point::DailyPoint;

/// Lookup by date. A duplicated date keeps its last entry.
pub fn index_by_date(series: &[DailyPoint]) -> HashMap<NaiveDate, &DailyPoint> {
    series.iter().map(|p| (p.date, p)).collect()
}

/// Plain sum; an empty input sums to zero.
pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().sum()
}

/// Sums an optional field, absent values count as zero.
pub fn sum_by<'a, I, F>(points: I, field: F) -> f64
where
    I: IntoIterator<Item = &'a DailyPoint>,
    F: Fn(&DailyPoint) -> Option<f64>,
{
    sum(points.into_iter().map(|p| field(p).unwrap_or(0.0)))
}

/// Arithmetic mean, `None` for an empty sample.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// `numerator / denominator`, `None` when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
