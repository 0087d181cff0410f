use crate::constants::TWO_DIGIT_YEAR_PIVOT;
use chrono::{Datelike, NaiveDate};

/// Builds an option expiry date from its month, day and optional year text.
///
/// Two-digit years above `TWO_DIGIT_YEAR_PIVOT` expand to `19xx`, the rest to `20xx`.
/// Without a year, the year of `today` is used; if `roll_past_expiries` is set and that
/// date has already passed, the following year is used instead.
///
/// Returns `None` if the parts do not form a calendar date.
pub fn resolve_expiry(
    month: u32,
    day: u32,
    year: Option<&str>,
    today: NaiveDate,
    roll_past_expiries: bool,
) -> Option<NaiveDate> {
    match year {
        Some(year) => {
            let parsed_year: i32 = year.parse().ok()?;

            let full_year = if year.len() == 2 {
                if parsed_year > TWO_DIGIT_YEAR_PIVOT {
                    1900 + parsed_year
                } else {
                    2000 + parsed_year
                }
            } else {
                parsed_year
            };

            NaiveDate::from_ymd_opt(full_year, month, day)
        }
        None => {
            let expiry = NaiveDate::from_ymd_opt(today.year(), month, day)?;

            if roll_past_expiries && expiry < today {
                // Feb 29 may not exist in the following year; keep the unrolled date then
                Some(NaiveDate::from_ymd_opt(today.year() + 1, month, day).unwrap_or(expiry))
            } else {
                Some(expiry)
            }
        }
    }
}
