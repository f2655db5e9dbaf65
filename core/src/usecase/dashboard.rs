use anyhow::Result;
use chrono::NaiveDate;

use crate::config::Settings;
use crate::forecast::{
    build_short_ai, build_weekly_confirmed, build_weeks, compute_month_rates,
    current_business_pace, find_week, landing_by_current_pace,
};
use crate::model::calendar::YearMonth;
use crate::model::projection::DashboardSnapshot;
use crate::repository::DailySeriesRepository;
use crate::service::series_service::SeriesService;

pub struct DashboardUseCase<'a, R: DailySeriesRepository> {
    series_service: &'a SeriesService<R>,
    pace_window: usize,
    holiday_pace: f64,
}

impl<'a, R: DailySeriesRepository> DashboardUseCase<'a, R> {
    pub fn new(series_service: &'a SeriesService<R>, settings: &Settings) -> Self {
        Self {
            series_service,
            pace_window: settings.pace_window,
            holiday_pace: settings.holiday_pace,
        }
    }

    /// Fetches `month` and runs every calculator once against `today`.
    pub fn snapshot(&self, month: YearMonth, today: NaiveDate) -> Result<DashboardSnapshot> {
        let series = self.series_service.get_month(month)?;
        let point_count = series.len();
        log::debug!("composing {} snapshot over {} points as of {}", month, point_count, today);

        let weeks = build_weeks(month);
        let current = find_week(&weeks, today);

        let rates = compute_month_rates(&series, today);
        let pace = current_business_pace(&series, today, self.pace_window);
        let pace_landing = landing_by_current_pace(&series, today, pace, self.holiday_pace);
        let weekly = build_weekly_confirmed(&series, &weeks, today);
        let short = build_short_ai(&series, current, today);

        let current_week = current.map(|w| w.index);
        Ok(DashboardSnapshot {
            month,
            today,
            weeks,
            current_week,
            point_count,
            rates,
            pace_window: self.pace_window,
            pace,
            pace_landing,
            weekly,
            short,
        })
    }
}
