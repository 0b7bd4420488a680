use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_MONTH};
use crate::span::Unit;

/// Error type for guessing and parsing a date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing left after trimming.
    #[error("empty date string")]
    EmptyInput,

    /// The first character is neither a digit nor a letter.
    #[error("unexpected date start char '{0}'")]
    StartCharacterInvalid(char),

    /// A character the current layout cannot continue with.
    #[error("unexpected char at {0} position")]
    UnexpectedCharacterAt(usize),

    /// A located field has a length its unit never takes.
    #[error("unexpected {unit} unit length: got {got}")]
    UnitLengthInvalid { unit: Unit, got: usize },

    /// The layout never located a required field.
    #[error("missing unit {unit} in '{input}'")]
    MissingUnit { unit: Unit, input: String },

    #[error("overflow of the month: max {max}, got {0}", max = MAX_MONTH)]
    MonthOutOfRange(u16),

    #[error("underflow of the month: min {min}, got {0}", min = MIN_MONTH)]
    MonthUnderflow(u16),

    #[error("year is not numeric: '{0}'")]
    YearNotNumeric(String),

    #[error("unrecognized month name: '{0}'")]
    MonthNameUnrecognized(String),

    /// The fields are well formed but name no real day.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(#[from] CalendarError),
}

/// Error type for building the validated calendar types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_value() {
        assert_eq!(
            ParseError::MonthOutOfRange(31).to_string(),
            "overflow of the month: max 12, got 31"
        );
        assert_eq!(
            ParseError::MonthUnderflow(0).to_string(),
            "underflow of the month: min 1, got 0"
        );
        assert_eq!(
            ParseError::UnitLengthInvalid {
                unit: Unit::Year,
                got: 3,
            }
            .to_string(),
            "unexpected year unit length: got 3"
        );
        assert_eq!(
            ParseError::MissingUnit {
                unit: Unit::Month,
                input: "2014".to_owned(),
            }
            .to_string(),
            "missing unit month in '2014'"
        );
    }

    #[test]
    fn test_calendar_error_converts() {
        let err: ParseError = CalendarError::InvalidDay {
            month: 2,
            day: 30,
            year: 2014,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid calendar date: invalid day 30 for month 2014-02"
        );
    }
}
