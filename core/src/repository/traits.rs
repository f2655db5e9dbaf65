use crate::model::calendar::YearMonth;
use crate::model::daily_point::DailyPoint;
use anyhow::Result;

/// Source of one month's daily series.
pub trait DailySeriesRepository {
    /// The month's points sorted by date; empty when nothing is stored.
    fn month(&self, month: YearMonth) -> Result<Vec<DailyPoint>>;
    fn upsert(&self, point: DailyPoint) -> Result<()>;
    fn replace_month(&self, month: YearMonth, points: Vec<DailyPoint>) -> Result<()>;
}
