//! Validators for raw prompt input.
//!
//! Each function turns the text a user typed into a value, or explains why
//! it was rejected. None of them read from or write to the terminal, so the
//! prompt loop can stay a thin retry wrapper around them.

use chrono::Weekday;
use thiserror::Error;

use crate::event::WORK_HOURS;
use crate::weekday::{self, WeekStart};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a day of the week (e.g. Monday)")]
    UnknownDay(String),

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("hour must be between {} and {}", WORK_HOURS.start, WORK_HOURS.end - 1)]
    HourOutOfRange,

    #[error("choose a number between 1 and {0}")]
    SelectionOutOfRange(usize),

    #[error("choose 1 for Monday or 2 for Sunday")]
    UnknownWeekStart,
}

/// Digits only: no sign, no whitespace, no empty string.
fn parse_digits(input: &str) -> Result<u64, InputError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// A full, case-sensitive day label such as `Monday`.
pub fn parse_day(input: &str) -> Result<Weekday, InputError> {
    weekday::from_label(input).ok_or_else(|| InputError::UnknownDay(input.to_string()))
}

/// An hour inside working hours.
pub fn parse_hour(input: &str) -> Result<u32, InputError> {
    let hour = parse_digits(input)?;
    u32::try_from(hour)
        .ok()
        .filter(|h| WORK_HOURS.contains(h))
        .ok_or(InputError::HourOutOfRange)
}

/// A 1-based index into a list of `count` items.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, InputError> {
    let selection = parse_digits(input)?;
    usize::try_from(selection)
        .ok()
        .filter(|s| (1..=count).contains(s))
        .ok_or(InputError::SelectionOutOfRange(count))
}

/// `1` starts the week on Monday, `2` on Sunday.
pub fn parse_week_start(input: &str) -> Result<WeekStart, InputError> {
    match input {
        "1" => Ok(WeekStart::Monday),
        "2" => Ok(WeekStart::Sunday),
        _ => Err(InputError::UnknownWeekStart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels() {
        assert_eq!(parse_day("Monday"), Ok(Weekday::Mon));
        assert_eq!(parse_day("Sunday"), Ok(Weekday::Sun));
        assert_eq!(
            parse_day("monday"),
            Err(InputError::UnknownDay("monday".into()))
        );
        assert!(parse_day("").is_err());
    }

    #[test]
    fn hours_in_range() {
        assert_eq!(parse_hour("9"), Ok(9));
        assert_eq!(parse_hour("16"), Ok(16));
        assert_eq!(parse_hour("09"), Ok(9));
    }

    #[test]
    fn hours_out_of_range() {
        assert_eq!(parse_hour("8"), Err(InputError::HourOutOfRange));
        assert_eq!(parse_hour("17"), Err(InputError::HourOutOfRange));
        let huge = "99999999999999999999";
        assert_eq!(parse_hour(huge), Err(InputError::NotANumber(huge.into())));
    }

    #[test]
    fn hours_must_be_digits() {
        for input in ["", " 9", "9 ", "-9", "+9", "9.0", "nine"] {
            assert!(
                matches!(parse_hour(input), Err(InputError::NotANumber(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn selection_bounds() {
        assert_eq!(parse_selection("1", 3), Ok(1));
        assert_eq!(parse_selection("3", 3), Ok(3));
        assert_eq!(parse_selection("0", 3), Err(InputError::SelectionOutOfRange(3)));
        assert_eq!(parse_selection("4", 3), Err(InputError::SelectionOutOfRange(3)));
        assert!(matches!(parse_selection("x", 3), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn week_start_choices() {
        assert_eq!(parse_week_start("1"), Ok(WeekStart::Monday));
        assert_eq!(parse_week_start("2"), Ok(WeekStart::Sunday));
        assert_eq!(parse_week_start("3"), Err(InputError::UnknownWeekStart));
        assert_eq!(parse_week_start(""), Err(InputError::UnknownWeekStart));
    }
}
