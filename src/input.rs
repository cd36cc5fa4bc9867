use crate::DAY_FORMAT;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use std::{convert::TryFrom, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("'{0}' is not a date in the format YYYY-MM-DD")]
    InvalidDate(String),
    #[error("there is no menu option {0}")]
    UnknownChoice(i64),
    #[error("no more input")]
    EndOfInput,
}

/// The options offered by the interactive menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Add,     // 1
    Total,   // 2
    ByDay,   // 3
    ByMonth, // 4
    ByYear,  // 5
    Exit,    // 6
}

impl TryFrom<i64> for MenuChoice {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Total),
            3 => Ok(MenuChoice::ByDay),
            4 => Ok(MenuChoice::ByMonth),
            5 => Ok(MenuChoice::ByYear),
            6 => Ok(MenuChoice::Exit),
            n => Err(InputError::UnknownChoice(n)),
        }
    }
}

/// Parse a monetary amount. Negative amounts are allowed.
pub fn parse_amount(input: &str) -> Result<Decimal, InputError> {
    let input = input.trim();
    Decimal::from_str(input).map_err(|_| InputError::InvalidNumber(input.to_owned()))
}

pub fn parse_integer(input: &str) -> Result<i64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::InvalidNumber(input.to_owned()))
}

/// Parse a "YYYY-MM-DD" date to midnight of that day in local time.
///
/// Where a time zone transition makes local midnight ambiguous, the earlier instant is
/// used. If local midnight doesn't exist on that day at all, the date is rejected.
pub fn parse_date(input: &str) -> Result<DateTime<Local>, InputError> {
    let input = input.trim();
    let invalid = || InputError::InvalidDate(input.to_owned());

    let midnight = NaiveDate::parse_from_str(input, DAY_FORMAT)
        .map_err(|_| invalid())?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_valid() {
        assert_eq!(parse_amount("100"), Ok(dec!(100)));
        assert_eq!(parse_amount(" 12.50\n"), Ok(dec!(12.50)));
        assert_eq!(parse_amount("-3.5"), Ok(dec!(-3.5)));
    }

    #[test]
    fn parse_amount_invalid() {
        assert_eq!(
            parse_amount("ten"),
            Err(InputError::InvalidNumber("ten".into()))
        );
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn parse_integer_valid_and_invalid() {
        assert_eq!(parse_integer("2024\n"), Ok(2024));
        assert_eq!(parse_integer("-1"), Ok(-1));
        assert_eq!(
            parse_integer("3.0"),
            Err(InputError::InvalidNumber("3.0".into()))
        );
    }

    #[test]
    fn parse_date_valid() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 15));
        assert_eq!(date.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn parse_date_invalid() {
        assert_eq!(
            parse_date("15/03/2024"),
            Err(InputError::InvalidDate("15/03/2024".into()))
        );
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn menu_choice_from_number() {
        assert_eq!(MenuChoice::try_from(1_i64), Ok(MenuChoice::Add));
        assert_eq!(MenuChoice::try_from(4_i64), Ok(MenuChoice::ByMonth));
        assert_eq!(MenuChoice::try_from(6_i64), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::try_from(0_i64), Err(InputError::UnknownChoice(0)));
        assert_eq!(MenuChoice::try_from(7_i64), Err(InputError::UnknownChoice(7)));
    }
}
