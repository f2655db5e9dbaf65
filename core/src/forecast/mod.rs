//! Inbound volume forecast and pace projection.
//!
//! Every calculator here is a pure function of the month's series and a
//! reference date. A sum over absent values is `0.0`; a ratio or average
//! with nothing to divide by is `None`. Callers must keep the two apart.

pub mod aggregate;
pub mod month;
pub mod pace;
pub mod short_horizon;
pub mod weekly;
pub mod weeks;

pub use month::compute_month_rates;
pub use pace::{current_business_pace, landing_by_current_pace, DEFAULT_PACE_WINDOW};
pub use short_horizon::build_short_ai;
pub use weekly::build_weekly_confirmed;
pub use weeks::{build_weeks, find_week};
