//! Date helpers for registration checks
//!
//! Dates of birth are stored as `NaiveDate`; age is computed in whole
//! calendar years, so a player turns 16 on the day of their birthday,
//! not after 16 * 365.25 days.

use chrono::{Datelike, NaiveDate, Utc};

use super::AppError;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Whole calendar years between `date_of_birth` and `on`
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Whole calendar years between `date_of_birth` and today (UTC)
pub fn age_years(date_of_birth: NaiveDate) -> i32 {
    age_on(date_of_birth, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_counts_whole_years() {
        let dob = d(2008, 6, 15);
        assert_eq!(age_on(dob, d(2024, 6, 14)), 15);
        assert_eq!(age_on(dob, d(2024, 6, 15)), 16); // birthday itself counts
        assert_eq!(age_on(dob, d(2024, 6, 16)), 16);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1990-01-31").unwrap(), d(1990, 1, 31));
        assert!(parse_date("31/01/1990").is_err());
        assert!(parse_date("1990-02-30").is_err());
    }
}
