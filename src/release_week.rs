//! Release date resolution
//!
//! Translates the voice platform's date slot into the catalog release date.
//! New comics hit shops on Wednesday, so week tokens and the no-date default
//! both resolve to a Wednesday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

/// A date slot value the catalog cannot be searched with (month or year
/// tokens, unparseable input, out-of-range weeks).
#[derive(Error, Debug, PartialEq)]
#[error("not a searchable release date: {0}")]
pub struct InvalidDateError(pub String);

/// Resolve the date slot into the release date to query.
///
/// - no slot: Wednesday of the current week
/// - a week token (`W25` or `2026-W25`): Wednesday of that ISO week
/// - anything else must already be a `YYYY-MM-DD` calendar date
pub fn resolve_release_date(
    slot: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, InvalidDateError> {
    match slot {
        None => Ok(wednesday_of(today)),
        Some(value) if value.contains('W') => week_token_to_wednesday(value, today),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| InvalidDateError(value.to_string())),
    }
}

/// Wednesday of the ISO week containing `date`.
pub fn wednesday_of(date: NaiveDate) -> NaiveDate {
    let offset = Weekday::Wed.num_days_from_monday() as i64
        - date.weekday().num_days_from_monday() as i64;
    date + Duration::days(offset)
}

/// Translate a week token into that week's Wednesday.
///
/// Accepts the platform's `2026-W25` form and a bare `W25`; a token without
/// a year falls back to the current ISO year.
fn week_token_to_wednesday(token: &str, today: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    let invalid = || InvalidDateError(token.to_string());

    let w = token.find('W').ok_or_else(invalid)?;

    let week: u32 = token[w + 1..].parse().map_err(|_| invalid())?;

    let year: i32 = match token[..w].strip_suffix('-') {
        Some(prefix) if !prefix.is_empty() => prefix.parse().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
        None if token[..w].is_empty() => today.iso_week().year(),
        None => return Err(invalid()),
    };

    NaiveDate::from_isoywd_opt(year, week, Weekday::Wed).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wednesday_of_surrounding_days() {
        let wednesday = date(2017, 6, 14);
        assert_eq!(wednesday_of(date(2017, 6, 12)), wednesday); // Monday
        assert_eq!(wednesday_of(date(2017, 6, 14)), wednesday); // Wednesday itself
        assert_eq!(wednesday_of(date(2017, 6, 15)), wednesday); // Thursday
        assert_eq!(wednesday_of(date(2017, 6, 18)), wednesday); // Sunday
    }

    #[test]
    fn test_no_slot_defaults_to_this_week() {
        let today = date(2017, 6, 16);
        assert_eq!(resolve_release_date(None, today), Ok(date(2017, 6, 14)));
    }

    #[test]
    fn test_week_token_with_year() {
        let today = date(2017, 6, 16);
        assert_eq!(
            resolve_release_date(Some("2017-W24"), today),
            Ok(date(2017, 6, 14))
        );
    }

    #[test]
    fn test_bare_week_token_uses_current_year() {
        let today = date(2017, 6, 16);
        assert_eq!(
            resolve_release_date(Some("W24"), today),
            Ok(date(2017, 6, 14))
        );
    }

    #[test]
    fn test_calendar_date_passes_through() {
        let today = date(2017, 6, 16);
        assert_eq!(
            resolve_release_date(Some("2017-06-21"), today),
            Ok(date(2017, 6, 21))
        );
    }

    #[test]
    fn test_month_and_year_tokens_are_invalid() {
        let today = date(2017, 6, 16);
        assert!(resolve_release_date(Some("2017-06"), today).is_err());
        assert!(resolve_release_date(Some("2017"), today).is_err());
    }

    #[test]
    fn test_out_of_range_week_is_invalid() {
        let today = date(2017, 6, 16);
        assert!(resolve_release_date(Some("W60"), today).is_err());
        assert!(resolve_release_date(Some("2017-W0"), today).is_err());
    }

    #[test]
    fn test_garbage_is_invalid() {
        let today = date(2017, 6, 16);
        assert!(resolve_release_date(Some("next Wednesday"), today).is_err());
        assert!(resolve_release_date(Some("Wfoo"), today).is_err());
    }
}
