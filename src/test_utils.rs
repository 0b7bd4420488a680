use crate::Date;

/// Parses `input`, panicking with the input and error on failure.
pub(crate) fn ymd(input: &str) -> (u16, u8, u8) {
    crate::parse(input)
        .unwrap_or_else(|err| panic!("{input:?} should parse: {err}"))
        .ymd()
}

pub(crate) fn date(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}
