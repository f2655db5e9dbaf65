use anyhow::Result;
use chrono::NaiveDate;

use crate::demo::generate_month;
use crate::model::calendar::YearMonth;
use crate::model::daily_point::DailyPoint;
use crate::repository::DailySeriesRepository;

/// Fields to overwrite on one day's point. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPatch {
    pub predicted: Option<f64>,
    pub actual: Option<f64>,
    pub target: Option<f64>,
    pub business_day: Option<bool>,
}

impl PointPatch {
    pub fn is_empty(&self) -> bool {
        *self == PointPatch::default()
    }

    fn apply(&self, point: &mut DailyPoint) {
        if let Some(v) = self.predicted {
            point.predicted = v;
        }
        if let Some(v) = self.actual {
            point.actual = Some(v);
        }
        if let Some(v) = self.target {
            point.target = Some(v);
        }
        if let Some(v) = self.business_day {
            point.is_business_day = Some(v);
        }
    }
}

pub struct SeriesService<R: DailySeriesRepository> {
    repo: R,
}

impl<R: DailySeriesRepository> SeriesService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_month(&self, month: YearMonth) -> Result<Vec<DailyPoint>> {
        self.repo.month(month)
    }

    /// Patches the point for `date`, creating it with a zero prediction if absent.
    pub fn record(&self, date: NaiveDate, patch: &PointPatch) -> Result<DailyPoint> {
        let existing = self
            .repo
            .month(YearMonth::of(date)?)?
            .into_iter()
            .find(|p| p.date == date);
        let mut point = existing.unwrap_or_else(|| DailyPoint::new(date, 0.0));
        patch.apply(&mut point);
        self.repo.upsert(point.clone())?;
        log::debug!("recorded {:?} for {}", patch, date);
        Ok(point)
    }

    /// Overwrites `month` with the demo fixture and returns the number of points written.
    pub fn seed_demo(&self, month: YearMonth, today: NaiveDate, base_target: f64) -> Result<usize> {
        let points = generate_month(month, today, base_target);
        let count = points.len();
        self.repo.replace_month(month, points)?;
        Ok(count)
    }
}
