pub mod config;
pub mod demo;
pub mod forecast;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Settings;
pub use forecast::{
    build_short_ai, build_weekly_confirmed, build_weeks, compute_month_rates,
    current_business_pace, find_week, landing_by_current_pace,
};
pub use input::{expand_key, parse_args, parse_patch, ParsedInput};
pub use model::calendar::{Week, YearMonth};
pub use model::daily_point::DailyPoint;
pub use model::projection::{
    DashboardSnapshot, MonthRates, PaceLanding, ShortHorizon, WeeklyConfirmedRow,
};
pub use repository::{DailySeriesRepository, FileSeriesRepository};
pub use service::series_service::{PointPatch, SeriesService};
pub use time::{local_today, parse_reference_date, parse_year_month};
pub use usecase::dashboard::DashboardUseCase;
