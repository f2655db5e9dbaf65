#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::demo::generate_month;
    use crate::model::calendar::YearMonth;
    use crate::model::daily_point::DailyPoint;
    use crate::repository::DailySeriesRepository;
    use crate::service::series_service::SeriesService;
    use crate::usecase::dashboard::DashboardUseCase;
    use anyhow::Result;
    use approx::assert_relative_eq;
    use chrono::{Datelike, NaiveDate, Weekday};

    struct MockSeriesRepo {
        points: Vec<DailyPoint>,
    }

    impl DailySeriesRepository for MockSeriesRepo {
        fn month(&self, month: YearMonth) -> Result<Vec<DailyPoint>> {
            Ok(self.points.iter().filter(|p| month.contains(p.date)).cloned().collect())
        }
        fn upsert(&self, _point: DailyPoint) -> Result<()> {
            unimplemented!()
        }
        fn replace_month(&self, _month: YearMonth, _points: Vec<DailyPoint>) -> Result<()> {
            unimplemented!()
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Target 110 every day, actual 100 up to `today`, predicted 120, Sundays off.
    fn flat_september(today: NaiveDate) -> Vec<DailyPoint> {
        YearMonth::new(2025, 9)
            .unwrap()
            .days()
            .map(|d| {
                let mut p = DailyPoint::new(d, 120.0).with_target(110.0);
                if d <= today {
                    p.actual = Some(100.0);
                }
                if d.weekday() == Weekday::Sun {
                    p = p.holiday();
                }
                p
            })
            .collect()
    }

    #[test]
    fn test_snapshot_end_to_end() {
        let today = date("2025-09-20");
        let service = SeriesService::new(MockSeriesRepo { points: flat_september(today) });
        let settings = Settings::default();
        let usecase = DashboardUseCase::new(&service, &settings);

        let snapshot = usecase.snapshot(YearMonth::new(2025, 9).unwrap(), today).unwrap();

        assert_eq!(snapshot.weeks.len(), 5);
        assert_eq!(snapshot.current_week, Some(2));
        assert_eq!(snapshot.point_count, 30);

        assert_eq!(snapshot.rates.m_actual, 2000.0);
        assert_relative_eq!(snapshot.rates.mtd_rate.unwrap(), 2000.0 / 2200.0);
        assert_eq!(snapshot.rates.landing_ai, 2000.0 + 10.0 * 120.0);

        assert_eq!(snapshot.pace, Some(100.0));
        assert_eq!(snapshot.pace_landing.future_biz, 8);
        assert_eq!(snapshot.pace_landing.future_holi, 2);
        assert_eq!(snapshot.pace_landing.landing_pace, 2800.0);
        assert_eq!(snapshot.landing_gap(), 3200.0 - 2800.0);

        let row = snapshot.current_week_row().unwrap();
        assert_eq!(row.actual_sum, 600.0);
        assert_eq!(row.target_sum, 660.0);

        assert_eq!(snapshot.short.today_ai, Some(120.0));
        assert_eq!(snapshot.short.week_ai, Some(600.0));
    }

    #[test]
    fn test_snapshot_on_sunday_and_empty_month() {
        let today = date("2025-09-21");
        let service = SeriesService::new(MockSeriesRepo { points: Vec::new() });
        let settings = Settings::default();
        let usecase = DashboardUseCase::new(&service, &settings);

        let snapshot = usecase.snapshot(YearMonth::new(2025, 9).unwrap(), today).unwrap();
        assert_eq!(snapshot.point_count, 0);
        assert_eq!(snapshot.current_week, None);
        assert!(snapshot.current_week_row().is_none());
        assert_eq!(snapshot.rates.mtd_rate, None);
        assert_eq!(snapshot.rates.month_rate_proj, None);
        assert_eq!(snapshot.pace, None);
        assert_eq!(snapshot.pace_landing.landing_pace, 0.0);
        assert_eq!(snapshot.pace_rate_proj(), None);
        assert_eq!(snapshot.short.today_ai, None);
        assert_eq!(snapshot.short.week_ai, None);
        assert!(snapshot.weekly.iter().all(|r| r.rate_confirmed.is_none()));
    }

    #[test]
    fn test_settings_flow_into_pace() {
        let today = date("2025-09-10");
        let mut points = generate_month(YearMonth::new(2025, 9).unwrap(), today, 100.0);
        for p in points.iter_mut().filter(|p| p.date < today && p.is_business_day()) {
            p.actual = Some(if p.date >= date("2025-09-08") { 50.0 } else { 10.0 });
        }
        let service = SeriesService::new(MockSeriesRepo { points });
        let settings = Settings { pace_window: 2, holiday_pace: 1.0, ..Default::default() };
        let usecase = DashboardUseCase::new(&service, &settings);

        let snapshot = usecase.snapshot(YearMonth::new(2025, 9).unwrap(), today).unwrap();
        assert_eq!(snapshot.pace_window, 2);
        assert_eq!(snapshot.pace, Some(50.0));

        // 11..=30: 3 Sundays (14, 21, 28), 17 business days
        assert_eq!(snapshot.pace_landing.future_holi, 3);
        assert_eq!(snapshot.pace_landing.future_biz, 17);
        assert_relative_eq!(
            snapshot.pace_landing.landing_pace,
            snapshot.rates.m_actual + 50.0 * 17.0 + 3.0
        );
    }

    #[test]
    fn test_snapshot_serializes_nulls() {
        let today = date("2025-09-21");
        let service = SeriesService::new(MockSeriesRepo { points: Vec::new() });
        let settings = Settings::default();
        let snapshot = DashboardUseCase::new(&service, &settings)
            .snapshot(YearMonth::new(2025, 9).unwrap(), today)
            .unwrap();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["month"], "2025-09");
        assert!(json["rates"]["mtdRate"].is_null());
        assert!(json["short"]["weekAi"].is_null());
        assert_eq!(json["short"]["weekTarget"], 0.0);
        assert_eq!(json["pointCount"], 0);
    }
}
