use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the inbound series.
///
/// `actual` is only known for days up to the reference date. A missing
/// `is_business_day` flag means the site operated that day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_business_day: Option<bool>,
}

impl DailyPoint {
    pub fn new(date: NaiveDate, predicted: f64) -> Self {
        Self {
            date,
            predicted,
            actual: None,
            target: None,
            is_business_day: None,
        }
    }

    pub fn with_actual(mut self, actual: f64) -> Self {
        self.actual = Some(actual);
        self
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn holiday(mut self) -> Self {
        self.is_business_day = Some(false);
        self
    }

    pub fn is_business_day(&self) -> bool {
        self.is_business_day != Some(false)
    }

    /// Known on or before `today`.
    pub fn is_confirmed(&self, today: NaiveDate) -> bool {
        self.date <= today
    }
}
