//! Turns located field text into a validated [`Date`].

use tracing::trace;

use crate::Date;
use crate::buffer::CharBuffer;
use crate::consts::{CENTURY_BASE, MAX_MONTH, MIN_DAY, MIN_MONTH, SHORT_YEAR_LEN};
use crate::error::ParseError;
use crate::lexicon;
use crate::span::FieldSpans;

pub(crate) fn assemble(buffer: &CharBuffer, spans: &FieldSpans) -> Result<Date, ParseError> {
    let day = spans
        .day
        .clone()
        .map_or(MIN_DAY, |range| day_value(&buffer.text(range)));
    let month = month_value(&buffer.text(spans.month.clone()))?;
    let year = year_value(&buffer.text(spans.year.clone()))?;

    trace!(year, month, day, "assembled date fields");
    Ok(Date::from_ymd(year, month, day)?)
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Non-numeric day text falls back to the first of the month.
fn day_value(text: &str) -> u8 {
    if is_numeric(text) {
        text.parse().unwrap_or(MIN_DAY)
    } else {
        MIN_DAY
    }
}

fn month_value(text: &str) -> Result<u8, ParseError> {
    if !is_numeric(text) {
        return lexicon::month_number(text)
            .ok_or_else(|| ParseError::MonthNameUnrecognized(text.to_owned()));
    }

    // Digits too long for u16 are far past December anyway.
    let value: u16 = text.parse().unwrap_or(u16::MAX);
    match u8::try_from(value) {
        Ok(month) if month < MIN_MONTH => Err(ParseError::MonthUnderflow(value)),
        Ok(month) if month <= MAX_MONTH => Ok(month),
        _ => Err(ParseError::MonthOutOfRange(value)),
    }
}

fn year_value(text: &str) -> Result<u16, ParseError> {
    let not_numeric = || ParseError::YearNotNumeric(text.to_owned());
    if !is_numeric(text) {
        return Err(not_numeric());
    }
    let value: u16 = text.parse().map_err(|_| not_numeric())?;
    if text.len() == SHORT_YEAR_LEN {
        Ok(value + CENTURY_BASE)
    } else {
        Ok(value)
    }
}
