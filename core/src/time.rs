use anyhow::{anyhow, Result};
use chrono::{Days, Local, NaiveDate};

use crate::model::calendar::YearMonth;

/// Today on the local calendar. Only the CLI boundary reads the clock;
/// the calculators always receive the reference date explicitly.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolves a reference date relative to `now`.
///
/// Accepts `today`/`tod`, `yesterday`/`yes`, `eom`, `+Nd`/`-Nd` and ISO `YYYY-MM-DD`.
pub fn parse_reference_date(input: &str, now: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(now),
        "yesterday" | "yes" => {
            return now
                .pred_opt()
                .ok_or_else(|| anyhow!("Date out of range: {}", input));
        }
        "eom" => return Ok(YearMonth::of(now)?.last_day()),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('+').or_else(|| input.strip_prefix('-')) {
        let count = rest
            .strip_suffix('d')
            .ok_or_else(|| anyhow!("Relative dates take a day count, e.g. +3d: {}", input))?;
        let count: u64 = count
            .parse()
            .ok()
            .filter(|_| count.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let shifted = if input.starts_with('-') {
            now.checked_sub_days(Days::new(count))
        } else {
            now.checked_add_days(Days::new(count))
        };
        return shifted.ok_or_else(|| anyhow!("Date out of range: {}", input));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

pub fn parse_year_month(input: &str) -> Result<YearMonth> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_reference_date("today", anchor()).unwrap(), anchor());
        assert_eq!(parse_reference_date("TOD", anchor()).unwrap(), anchor());
        assert_eq!(
            parse_reference_date("yesterday", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 19).unwrap()
        );
        assert_eq!(
            parse_reference_date("eom", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
        );
    }

    #[test]
    fn test_relative() {
        assert_eq!(
            parse_reference_date("+3d", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 23).unwrap()
        );
        assert_eq!(
            parse_reference_date("-20d", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()
        );
        assert!(parse_reference_date("+3w", anchor()).is_err());
        assert!(parse_reference_date("+xd", anchor()).is_err());
        assert!(parse_reference_date("--3d", anchor()).is_err());
        assert!(parse_reference_date("++3d", anchor()).is_err());
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        assert!(parse_reference_date("+99999999999d", anchor()).is_err());
        assert!(parse_reference_date("-99999999999d", anchor()).is_err());
        assert!(parse_reference_date("+18446744073709551615d", anchor()).is_err());
        assert!(parse_reference_date("+1d", NaiveDate::MAX).is_err());
        assert!(parse_reference_date("yesterday", NaiveDate::MIN).is_err());
        assert!(parse_reference_date("eom", NaiveDate::MAX).is_err());
    }

    #[test]
    fn test_iso_and_garbage() {
        assert_eq!(
            parse_reference_date("2025-10-01", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
        );
        assert!(parse_reference_date("2025-02-30", anchor()).is_err());
        assert!(parse_reference_date("someday", anchor()).is_err());
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2025-09").unwrap(), YearMonth::new(2025, 9).unwrap());
        assert!(parse_year_month("09-2025").is_err());
    }
}
