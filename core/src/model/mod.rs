pub mod calendar;
pub mod daily_point;
pub mod projection;
