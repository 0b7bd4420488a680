//! Layout-guessing state machine.
//!
//! A pass feeds the buffer to [`State`] transitions one character at a time,
//! recording where the year, month and day sit. A transition may ask for a
//! buffer edit (drop an ordinal suffix, a weekday, a stray period); the pass
//! then stops, the edit is applied and a fresh pass starts from
//! [`State::Start`] over the shorter buffer. Once a pass reaches the end, open
//! spans are closed and validated.
//!
//! Slash and dot layouts are always read month-first unless they start with a
//! four-digit year.

use tracing::{debug, trace};

use crate::buffer::{CharBuffer, Edit};
use crate::consts::{
    ABBREVIATION_LEN, LONG_MONTH_TAIL_LEN, ORDINAL_LEADS, ORDINAL_SUFFIXES, SHORT_REMAINDER_LEN,
    SPACED_ABBREVIATION_LEN, YEAR_PREFIX_LEN,
};
use crate::error::ParseError;
use crate::lexicon;
use crate::span::{FieldSpans, Fields, Span, Unit};

/// Scanner states, named after the input shape consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Start,
    Alpha,
    Digit,
    YearDash,
    DigitDash,
    DigitSlash,
    DigitColon,
    DigitDot,
    DigitWs,
    YearDashDash,
    DigitDashAlpha,
    YearDashAlphaDash,
    DigitDashAlphaDash,
    YearDashDashWs,
    DigitDotDot,
    AlphaWs,
    AlphaWsMonth,
    AlphaWsMore,
    WeekdayAbbrComma,
    WeekdayComma,
    AlphaPeriodWsDigit,
    AlphaWsAlpha,
    AlphaWsDigit,
    AlphaWsDigitMore,
    AlphaWsDigitYearPossible,
    AlphaWsMonthSuffix,
    AlphaWsDigitMoreWs,
    AlphaWsDigitMoreWsYear,
    AlphaWsMonthMore,
    DigitWsMonthLong,
    DigitWsMonthYear,
}

/// What the driver does after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    /// Also step over the following character.
    SkipNext,
    /// Feed the same character to the new state.
    Redo,
    Restart(Edit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Finished,
    Edited(Edit),
}

/// Locates the year, month and day in `buffer`, editing it in place when a
/// pass asks for a restart.
pub(crate) fn scan(buffer: &mut CharBuffer) -> Result<FieldSpans, ParseError> {
    loop {
        let mut pass = Scan::new(buffer);
        match pass.run()? {
            Pass::Finished => return pass.finish(),
            Pass::Edited(edit) => {
                buffer.apply(edit);
                debug!(?edit, buffer = %buffer, "restarting date scan");
            }
        }
    }
}

/// Everything one pass owns. Dropped on restart.
#[derive(Debug)]
struct Scan<'a> {
    buffer: &'a CharBuffer,
    state: State,
    fields: Fields,
    /// Length of the leading digits or letters.
    first_part_len: usize,
    /// Full month name that opened the input; its span is sized at the end.
    full_month: Option<String>,
    /// First index worth looking at after a `Weekday,` prefix.
    skip_pos: usize,
    weekday_prefix: bool,
}

impl<'a> Scan<'a> {
    fn new(buffer: &'a CharBuffer) -> Self {
        Self {
            buffer,
            state: State::Start,
            fields: Fields::default(),
            first_part_len: 0,
            full_month: None,
            skip_pos: 0,
            weekday_prefix: false,
        }
    }

    fn run(&mut self) -> Result<Pass, ParseError> {
        let mut i = 0;
        while let Some(c) = self.buffer.get(i) {
            match self.step(i, c)? {
                Step::Next => i += 1,
                Step::SkipNext => i += 2,
                Step::Redo => {}
                Step::Restart(edit) => return Ok(Pass::Edited(edit)),
            }
        }
        Ok(Pass::Finished)
    }

    fn step(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match self.state {
            State::Start => self.start(c),
            State::Digit => self.digit(i, c),
            State::DigitWs => self.digit_ws(i, c),
            State::DigitWsMonthYear => self.digit_ws_month_year(i, c),
            State::YearDash => self.year_dash(i, c),
            State::YearDashDash => self.year_dash_dash(i, c),
            State::YearDashAlphaDash => self.year_dash_alpha_dash(i, c),
            State::DigitDash => self.digit_dash(i, c),
            State::DigitDashAlpha => self.digit_dash_alpha(i, c),
            State::DigitDashAlphaDash => self.close_year_at(i, c, &[' ']),
            State::DigitSlash => self.digit_slash(i, c),
            State::DigitDot => self.digit_dot(i, c),
            State::Alpha => self.alpha(i, c),
            State::WeekdayAbbrComma | State::WeekdayComma => Ok(self.weekday_comma(i, c)),
            State::AlphaWs => self.alpha_ws(i, c),
            State::AlphaWsDigit => self.alpha_ws_digit(i, c),
            State::AlphaWsDigitMore => Ok(self.alpha_ws_digit_more(i, c)),
            State::AlphaWsDigitMoreWs => self.alpha_ws_digit_more_ws(i, c),
            State::AlphaWsDigitYearPossible | State::AlphaWsMonthMore => {
                self.close_year_at(i, c, &[' ', ','])
            }
            State::AlphaWsMonth => self.alpha_ws_month(i, c),
            State::AlphaWsMore => self.alpha_ws_more(i, c),
            State::AlphaPeriodWsDigit => Ok(self.alpha_period_ws_digit(i, c)),
            State::AlphaWsMonthSuffix => Ok(self.ordinal_suffix(i, c)),
            // Nothing after these changes the fields.
            State::DigitColon
            | State::DigitDotDot
            | State::DigitWsMonthLong
            | State::YearDashDashWs
            | State::AlphaWsAlpha
            | State::AlphaWsDigitMoreWsYear => Ok(Step::Next),
        }
    }

    fn start(&mut self, c: char) -> Result<Step, ParseError> {
        self.state = if c.is_ascii_digit() {
            State::Digit
        } else if c.is_ascii_alphabetic() {
            State::Alpha
        } else {
            return Err(ParseError::StartCharacterInvalid(c));
        };
        Ok(Step::Next)
    }

    // 2006-01-02, 13-Feb-03, 03/31/2005, 2014/02/24, 3.31.2014, 2014.05, 8 jan 2018
    fn digit(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        let after_year = i == YEAR_PREFIX_LEN;
        self.state = match c {
            '-' if after_year => {
                self.year_prefix(i)?;
                State::YearDash
            }
            '-' => {
                self.fields.close(Unit::Day, 0, i)?;
                State::DigitDash
            }
            '/' => {
                self.numeric_prefix(i, after_year)?;
                State::DigitSlash
            }
            ':' => {
                self.numeric_prefix(i, after_year)?;
                State::DigitColon
            }
            '.' => {
                self.numeric_prefix(i, after_year)?;
                State::DigitDot
            }
            ' ' => {
                self.fields.close(Unit::Day, 0, i)?;
                State::DigitWs
            }
            _ => return Ok(Step::Next),
        };
        self.first_part_len = i;
        Ok(Step::Next)
    }

    /// The digits before `i` are a four-digit year; the month starts after `i`.
    fn year_prefix(&mut self, i: usize) -> Result<(), ParseError> {
        self.fields.close(Unit::Year, 0, i)?;
        self.fields.open(Unit::Month, i + 1);
        Ok(())
    }

    /// The digits before `i` are the year when there are four of them,
    /// otherwise the month.
    fn numeric_prefix(&mut self, i: usize, after_year: bool) -> Result<(), ParseError> {
        if after_year {
            return self.year_prefix(i);
        }
        self.fields.close(Unit::Month, 0, i)?;
        self.fields.open(Unit::Day, i + 1);
        Ok(())
    }

    // 8 jan 2018, 18 January 2018
    fn digit_ws(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c != ' ' {
            return Ok(Step::Next);
        }
        let day_len = self.first_part_len;
        self.fields.open(Unit::Year, i + 1);
        if i > day_len + SPACED_ABBREVIATION_LEN {
            self.state = State::DigitWsMonthLong;
        } else {
            let month_pos = day_len + 1;
            self.fields.close(Unit::Month, month_pos, i - month_pos)?;
            self.state = State::DigitWsMonthYear;
        }
        Ok(Step::Next)
    }

    // 02 Jan 2018 23:59, 12 Feb 2006, 19:17
    fn digit_ws_month_year(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            ',' => {
                self.fields.close_open_at(Unit::Year, i)?;
                Ok(Step::SkipNext)
            }
            ' ' => {
                self.fields.close_open_at(Unit::Year, i)?;
                Ok(Step::Next)
            }
            _ => Ok(Step::Next),
        }
    }

    // 2006-01-02T15:04:05Z, 2013-Feb-03
    fn year_dash(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c == '-' {
            self.fields.close_open_at(Unit::Month, i)?;
            self.fields.open(Unit::Day, i + 1);
            self.state = State::YearDashDash;
        } else if c.is_ascii_alphabetic() {
            self.state = State::YearDashAlphaDash;
        }
        Ok(Step::Next)
    }

    // 2006-01-02T15:04:05Z, 2013-04-01 22:43:22
    fn year_dash_dash(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if matches!(c, 'T' | 't' | ' ') {
            self.fields.close_open_at(Unit::Day, i)?;
            self.state = State::YearDashDashWs;
        }
        Ok(Step::Next)
    }

    fn year_dash_alpha_dash(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c == '-' && self.fields.is_open(Unit::Month) {
            self.fields.close_open_at(Unit::Month, i)?;
            self.fields.open(Unit::Day, i + 1);
        }
        Ok(Step::Next)
    }

    // 13-Feb-03, 29-Jun-2016
    fn digit_dash(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if !c.is_ascii_alphabetic() {
            return Err(ParseError::UnexpectedCharacterAt(i));
        }
        self.fields.open(Unit::Month, i);
        self.state = State::DigitDashAlpha;
        Ok(Step::Next)
    }

    fn digit_dash_alpha(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c == '-' {
            self.fields.close_open_at(Unit::Month, i)?;
            self.fields.open(Unit::Year, i + 1);
            self.state = State::DigitDashAlphaDash;
        }
        Ok(Step::Next)
    }

    fn close_year_at(&mut self, i: usize, c: char, separators: &[char]) -> Result<Step, ParseError> {
        if separators.contains(&c) {
            self.fields.close_open_at(Unit::Year, i)?;
        }
        Ok(Step::Next)
    }

    // 3/1/2014, 10/13/2014, 1/2/06, 2014/07/10
    fn digit_slash(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c != '/' {
            return Ok(Step::Next);
        }
        if self.fields.is_closed(Unit::Year) {
            if self.fields.is_open(Unit::Month) {
                self.fields.close_open_at(Unit::Month, i)?;
                self.fields.open(Unit::Day, i + 1);
            }
        } else if self.fields.is_open(Unit::Day) {
            self.fields.close_open_at(Unit::Day, i)?;
            self.fields.open(Unit::Year, i + 1);
        }
        Ok(Step::Next)
    }

    // Second period of 3.31.2014, 08.21.71, 2018.09.30
    fn digit_dot(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c != '.' {
            return Ok(Step::Next);
        }
        if self.fields.is_closed(Unit::Year) {
            self.fields.close_open_at(Unit::Month, i)?;
            self.fields.open(Unit::Day, i + 1);
        } else {
            self.fields.close_open_at(Unit::Day, i)?;
            self.fields.open(Unit::Year, i + 1);
        }
        self.state = State::DigitDotDot;
        Ok(Step::Next)
    }

    fn alpha(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            ' ' => Ok(self.alpha_space(i)),
            ',' => self.alpha_comma(i),
            '.' => self.alpha_period(i),
            _ => Ok(Step::Next),
        }
    }

    // April 8, 2009 / January 02, 2006, 15:04:05 / oct 1, 1970 / Tue 05 May 2020
    fn alpha_space(&mut self, i: usize) -> Step {
        let token = self.buffer.text(0..i);

        if i > ABBREVIATION_LEN && lexicon::is_full_month(&token) {
            self.fields.open(Unit::Month, 0);
            self.fields.open(Unit::Day, i + 1);
            self.state = if self.buffer.len() - i < SHORT_REMAINDER_LEN {
                State::AlphaWsMonth
            } else {
                State::AlphaWsMore
            };
            self.full_month = Some(token);
            return Step::Next;
        }

        if lexicon::is_weekday_name(&token) {
            return Step::Restart(Edit::TruncatePrefix(self.buffer.skip_spaces(i + 1)));
        }

        if i <= ABBREVIATION_LEN || lexicon::is_abbreviated_month(&token) {
            self.first_part_len = i;
            self.state = State::AlphaWs;
        }
        Step::Next
    }

    // Mon, 02 Jan 2006 / Monday, 02 Jan 2006
    fn alpha_comma(&mut self, i: usize) -> Result<Step, ParseError> {
        self.weekday_prefix = lexicon::is_weekday_name(&self.buffer.text(0..i));
        if i == ABBREVIATION_LEN {
            self.fields.close(Unit::Month, 0, i)?;
            self.skip_pos = i + 1;
            self.state = State::WeekdayAbbrComma;
            Ok(Step::Next)
        } else {
            self.state = State::WeekdayComma;
            if self.buffer.next_is(i, ' ') {
                self.skip_pos = i + 2;
                Ok(Step::SkipNext)
            } else {
                self.skip_pos = i + 1;
                Ok(Step::Next)
            }
        }
    }

    // oct. 7, 1970 / sept. 28, 2017
    fn alpha_period(&mut self, i: usize) -> Result<Step, ParseError> {
        if i == ABBREVIATION_LEN {
            self.fields.close(Unit::Month, 0, i)?;
            self.state = State::AlphaPeriodWsDigit;
            Ok(Step::Next)
        } else if i == ABBREVIATION_LEN + 1 {
            Ok(Step::Restart(Edit::Delete { pos: i, count: 1 }))
        } else {
            Err(ParseError::UnexpectedCharacterAt(i))
        }
    }

    fn weekday_comma(&self, i: usize, c: char) -> Step {
        if self.weekday_prefix && i >= self.skip_pos && c != ' ' {
            Step::Restart(Edit::TruncatePrefix(i))
        } else {
            Step::Next
        }
    }

    // May 8, 2009 5:57:51 PM / May 8 2009 / oct 7, '70
    fn alpha_ws(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        if c.is_ascii_alphabetic() {
            // Weekday then month, both three letters.
            self.fields.close(Unit::Month, i, ABBREVIATION_LEN)?;
            self.fields.close(Unit::Day, 0, ABBREVIATION_LEN)?;
            self.state = State::AlphaWsAlpha;
        } else if c.is_ascii_digit() {
            self.fields.close(Unit::Month, 0, self.first_part_len)?;
            self.fields.open(Unit::Day, i);
            self.state = State::AlphaWsDigit;
        }
        Ok(Step::Next)
    }

    fn alpha_ws_digit(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            ',' => {
                self.fields.close_open_at(Unit::Day, i)?;
                self.state = State::AlphaWsDigitMore;
            }
            ' ' => {
                self.fields.close_open_at(Unit::Day, i)?;
                self.fields.open(Unit::Year, i + 1);
                self.state = State::AlphaWsDigitYearPossible;
            }
            c if c.is_ascii_alphabetic() => {
                self.state = State::AlphaWsMonthSuffix;
                return Ok(Step::Redo);
            }
            _ => {}
        }
        Ok(Step::Next)
    }

    fn alpha_ws_digit_more(&mut self, i: usize, c: char) -> Step {
        if c == ' ' {
            self.fields.open(Unit::Year, i + 1);
            self.state = State::AlphaWsDigitMoreWs;
        }
        Step::Next
    }

    fn alpha_ws_digit_more_ws(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            '\'' => self.fields.open(Unit::Year, i + 1),
            ' ' | ',' => {
                self.fields.close_open_at(Unit::Year, i)?;
                self.state = State::AlphaWsDigitMoreWsYear;
            }
            _ => {}
        }
        Ok(Step::Next)
    }

    // April 8, 2009 / April 8 2009 / April 8th, 2009
    fn alpha_ws_month(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            ' ' | ',' => self.fields.close_open_at(Unit::Day, i)?,
            c if ORDINAL_LEADS.contains(&c.to_ascii_lowercase()) => {
                self.state = State::AlphaWsMonthSuffix;
                return Ok(Step::Redo);
            }
            _ => {
                if self.fields.is_closed(Unit::Day) && self.fields.is_unset(Unit::Year) {
                    self.fields.open(Unit::Year, i);
                }
            }
        }
        Ok(Step::Next)
    }

    // January 02, 2006, 15:04:05 / January 2nd 2006 / September 17, 2012 at 5:00pm
    fn alpha_ws_more(&mut self, i: usize, c: char) -> Result<Step, ParseError> {
        match c {
            ',' if self.buffer.next_is(i, ' ') => {
                self.fields.close_open_at(Unit::Day, i)?;
                self.fields.open(Unit::Year, i + 2);
                self.state = State::AlphaWsMonthMore;
                Ok(Step::SkipNext)
            }
            ' ' => {
                self.fields.close_open_at(Unit::Day, i)?;
                self.fields.open(Unit::Year, i + 1);
                self.state = State::AlphaWsMonthMore;
                Ok(Step::Next)
            }
            c if c.is_ascii_alphabetic() => {
                self.state = State::AlphaWsMonthSuffix;
                Ok(Step::Redo)
            }
            _ => Ok(Step::Next),
        }
    }

    fn alpha_period_ws_digit(&mut self, i: usize, c: char) -> Step {
        if c.is_ascii_digit() {
            self.fields.open(Unit::Day, i);
            self.state = State::AlphaWsDigit;
        }
        Step::Next
    }

    /// Drops `th`/`nd`/`rd`/`st` after a day number, provided something
    /// follows it.
    fn ordinal_suffix(&self, i: usize, c: char) -> Step {
        let buffer = self.buffer;
        let matched = ORDINAL_SUFFIXES.iter().any(|suffix| {
            let mut letters = suffix.chars();
            letters.next().is_some_and(|lead| lead.eq_ignore_ascii_case(&c))
                && letters.next().is_some_and(|tail| buffer.next_is(i, tail))
        });
        if matched && buffer.len() > i + 2 {
            Step::Restart(Edit::Delete { pos: i, count: 2 })
        } else {
            Step::Next
        }
    }

    /// Closes whatever is still open at the end of the buffer and hands back
    /// the validated spans.
    fn finish(mut self) -> Result<FieldSpans, ParseError> {
        let end = self.buffer.len();

        if self.state == State::YearDashAlphaDash {
            self.fields.close_open_at(Unit::Day, end)?;
        }

        if let Some(name) = &self.full_month {
            if let Some(Span::Open { pos }) = self.fields.get(Unit::Month) {
                self.fields.close_full_month(pos, name.chars().count());
            }
        }

        for unit in [Unit::Year, Unit::Month, Unit::Day] {
            self.fields.close_open_at(unit, end)?;
        }

        if self.state == State::DigitWsMonthLong {
            // `18 January 2018`: whatever sits between the day and a
            // ` YYYY` tail is the month.
            let day_len = self.first_part_len;
            let len = end
                .checked_sub(LONG_MONTH_TAIL_LEN + day_len)
                .filter(|&len| len > 0)
                .ok_or(ParseError::UnitLengthInvalid {
                    unit: Unit::Month,
                    got: 0,
                })?;
            self.fields.close_full_month(day_len + 1, len);
        }

        trace!(state = ?self.state, fields = ?self.fields, "finalized date spans");
        self.fields.resolve(&self.buffer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Year, month and day text as located in the (possibly edited) buffer.
    fn located(input: &str) -> Result<(String, String, Option<String>), ParseError> {
        let mut buffer = CharBuffer::decompose(input);
        let spans = scan(&mut buffer)?;
        Ok((
            buffer.text(spans.year),
            buffer.text(spans.month),
            spans.day.map(|day| buffer.text(day)),
        ))
    }

    fn fields(year: &str, month: &str, day: Option<&str>) -> (String, String, Option<String>) {
        (year.to_owned(), month.to_owned(), day.map(str::to_owned))
    }

    /// Outcome of a single pass, without applying any edit.
    fn first_pass(input: &str) -> Result<Pass, ParseError> {
        let buffer = CharBuffer::decompose(input);
        Scan::new(&buffer).run()
    }

    #[test]
    fn test_locates_fields() {
        struct TestCase {
            input: &'static str,
            year: &'static str,
            month: &'static str,
            day: Option<&'static str>,
        }

        let cases = [
            TestCase { input: "3/31/2014", year: "2014", month: "3", day: Some("31") },
            TestCase { input: "08/21/71", year: "71", month: "08", day: Some("21") },
            TestCase { input: "2014/03/31", year: "2014", month: "03", day: Some("31") },
            TestCase { input: "3.31.2014", year: "2014", month: "3", day: Some("31") },
            TestCase { input: "2014.03.30", year: "2014", month: "03", day: Some("30") },
            TestCase { input: "2014.03", year: "2014", month: "03", day: None },
            TestCase { input: "2014-04-26", year: "2014", month: "04", day: Some("26") },
            TestCase { input: "2013-Feb-03", year: "2013", month: "Feb", day: Some("03") },
            TestCase { input: "13-Feb-03", year: "03", month: "Feb", day: Some("13") },
            TestCase { input: "29-Jun-2016", year: "2016", month: "Jun", day: Some("29") },
            TestCase { input: "oct 7, 1970", year: "1970", month: "oct", day: Some("7") },
            TestCase { input: "oct 7, '70", year: "70", month: "oct", day: Some("7") },
            TestCase { input: "oct. 7, 1970", year: "1970", month: "oct", day: Some("7") },
            TestCase { input: "October 7, 1970", year: "1970", month: "October", day: Some("7") },
            TestCase { input: "7 oct 1970", year: "1970", month: "oct", day: Some("7") },
            TestCase { input: "03 February 2013", year: "2013", month: "February", day: Some("03") },
            TestCase { input: "1 July 2013", year: "2013", month: "July", day: Some("1") },
        ];

        for case in &cases {
            assert_eq!(
                located(case.input).unwrap(),
                fields(case.year, case.month, case.day),
                "{}",
                case.input
            );
        }
    }

    #[test]
    fn test_trailing_time_is_ignored() {
        assert_eq!(
            located("2006-01-02T15:04:05Z").unwrap(),
            fields("2006", "01", Some("02"))
        );
        assert_eq!(
            located("2013-04-01 22:43:22").unwrap(),
            fields("2013", "04", Some("01"))
        );
        assert_eq!(
            located("02 Jan 2018 23:59:34").unwrap(),
            fields("2018", "Jan", Some("02"))
        );
        assert_eq!(
            located("12 Feb 2006, 19:17").unwrap(),
            fields("2006", "Feb", Some("12"))
        );
        assert_eq!(
            located("02-Jan-06 15:04:05").unwrap(),
            fields("06", "Jan", Some("02"))
        );
        assert_eq!(
            located("May 8, 2009 5:57:51 PM").unwrap(),
            fields("2009", "May", Some("8"))
        );
        assert_eq!(
            located("May 8 2009 5:57:51 PM").unwrap(),
            fields("2009", "May", Some("8"))
        );
        assert_eq!(
            located("January 02, 2006, 15:04:05").unwrap(),
            fields("2006", "January", Some("02"))
        );
        assert_eq!(
            located("September 17, 2012 at 5:00pm UTC-05").unwrap(),
            fields("2012", "September", Some("17"))
        );
    }

    #[test]
    fn test_ordinal_suffix_restarts_without_it() {
        assert_eq!(
            first_pass("April 8th, 2009").unwrap(),
            Pass::Edited(Edit::Delete { pos: 7, count: 2 })
        );
        assert_eq!(
            located("October 7th, 1970").unwrap(),
            fields("1970", "October", Some("7"))
        );
        assert_eq!(
            located("September 23rd, 2009").unwrap(),
            fields("2009", "September", Some("23"))
        );
        assert_eq!(
            located("May 1st, 2009").unwrap(),
            fields("2009", "May", Some("1"))
        );
        assert_eq!(
            located("January 2ND 2006").unwrap(),
            fields("2006", "January", Some("2"))
        );
    }

    #[test]
    fn test_ordinal_suffix_needs_trailing_text() {
        assert_eq!(
            located("April 8th"),
            Err(ParseError::UnitLengthInvalid {
                unit: Unit::Day,
                got: 3
            })
        );
    }

    #[test]
    fn test_weekday_prefix_restarts_without_it() {
        assert_eq!(
            first_pass("Tue 05 May 2020").unwrap(),
            Pass::Edited(Edit::TruncatePrefix(4))
        );
        assert_eq!(
            first_pass("Monday, 02 Jan 2006").unwrap(),
            Pass::Edited(Edit::TruncatePrefix(8))
        );
        assert_eq!(
            first_pass("Mon, 02 Jan 2006").unwrap(),
            Pass::Edited(Edit::TruncatePrefix(5))
        );
        assert_eq!(
            located("Tuesday 05 May 2020").unwrap(),
            fields("2020", "May", Some("05"))
        );
        assert_eq!(
            located("Mon, 02 Jan 2006 15:04:05 MST").unwrap(),
            fields("2006", "Jan", Some("02"))
        );
        assert_eq!(
            located("Tue Oct 7 1970").unwrap(),
            fields("1970", "Oct", Some("7"))
        );
    }

    #[test]
    fn test_weekday_prefix_without_single_space() {
        assert_eq!(
            first_pass("Monday,12 Jan 2006").unwrap(),
            Pass::Edited(Edit::TruncatePrefix(7))
        );
        assert_eq!(
            located("Monday,12 Jan 2006").unwrap(),
            fields("2006", "Jan", Some("12"))
        );
        assert_eq!(
            located("Wednesday,12 Feb 2015").unwrap(),
            fields("2015", "Feb", Some("12"))
        );
        assert_eq!(
            located("Mon,12 Jan 2006").unwrap(),
            located("Monday,12 Jan 2006").unwrap()
        );

        assert_eq!(
            first_pass("Tue  05 May 2020").unwrap(),
            Pass::Edited(Edit::TruncatePrefix(5))
        );
        assert_eq!(
            located("Tue  05 May 2020").unwrap(),
            fields("2020", "May", Some("05"))
        );
        assert_eq!(
            located("Tuesday   05 May 2020").unwrap(),
            fields("2020", "May", Some("05"))
        );
    }

    #[test]
    fn test_repeated_restarts_terminate() {
        assert_eq!(
            located("Mon Tue Wed 7 oct 1970").unwrap(),
            fields("1970", "oct", Some("7"))
        );
    }

    #[test]
    fn test_period_after_four_letters_is_dropped() {
        assert_eq!(
            first_pass("sept. 28, 2017").unwrap(),
            Pass::Edited(Edit::Delete { pos: 4, count: 1 })
        );
        assert_eq!(
            located("sept. 28, 2017").unwrap(),
            fields("2017", "sept", Some("28"))
        );
        assert_eq!(
            located("June. 5, 2014").unwrap(),
            fields("2014", "June", Some("5"))
        );
    }

    #[test]
    fn test_hard_failures() {
        assert_eq!(
            located("#2014"),
            Err(ParseError::StartCharacterInvalid('#'))
        );
        assert_eq!(
            located("12-05-2014"),
            Err(ParseError::UnexpectedCharacterAt(3))
        );
        assert_eq!(
            located("abcde. 5"),
            Err(ParseError::UnexpectedCharacterAt(5))
        );
    }

    #[test]
    fn test_length_failures() {
        struct TestCase {
            input: &'static str,
            unit: Unit,
            got: usize,
        }

        let cases = [
            TestCase { input: "20145/01/01", unit: Unit::Month, got: 5 },
            TestCase { input: "1/1/123", unit: Unit::Year, got: 3 },
            TestCase { input: "1/123/2014", unit: Unit::Day, got: 3 },
            TestCase { input: "2014-04-", unit: Unit::Day, got: 0 },
            TestCase { input: "xyz Jan 5 2014", unit: Unit::Day, got: 3 },
            TestCase { input: "123 oct 1970", unit: Unit::Day, got: 3 },
        ];

        for case in &cases {
            assert_eq!(
                located(case.input),
                Err(ParseError::UnitLengthInvalid {
                    unit: case.unit,
                    got: case.got
                }),
                "{}",
                case.input
            );
        }
    }

    #[test]
    fn test_unknown_word_leaves_year_missing() {
        assert_eq!(
            located("Frostbloom 8th, 2009"),
            Err(ParseError::MissingUnit {
                unit: Unit::Year,
                input: "Frostbloom 8th, 2009".to_owned()
            })
        );
    }

    #[test]
    fn test_colon_layout_stops_after_first_field() {
        // Only the month is fixed; the rest runs to the end as the day.
        assert_eq!(
            located("12:30"),
            Err(ParseError::MissingUnit {
                unit: Unit::Year,
                input: "12:30".to_owned()
            })
        );
    }

    #[test]
    fn test_states_follow_input_shape() {
        struct TestCase {
            input: &'static str,
            state: State,
        }

        let cases = [
            TestCase { input: "2014-04-26", state: State::YearDashDash },
            TestCase { input: "2013-Feb-03", state: State::YearDashAlphaDash },
            TestCase { input: "13-Feb-03", state: State::DigitDashAlphaDash },
            TestCase { input: "3/31/2014", state: State::DigitSlash },
            TestCase { input: "3.31.2014", state: State::DigitDotDot },
            TestCase { input: "2014.03", state: State::DigitDot },
            TestCase { input: "7 oct 1970", state: State::DigitWsMonthYear },
            TestCase { input: "03 February 2013", state: State::DigitWsMonthLong },
            TestCase { input: "oct 7, 1970", state: State::AlphaWsDigitMoreWs },
            TestCase { input: "oct 7 1970", state: State::AlphaWsDigitYearPossible },
            TestCase { input: "April 8, 2009", state: State::AlphaWsMonth },
            TestCase { input: "January 02, 2006, 15:04:05", state: State::AlphaWsMonthMore },
        ];

        for case in &cases {
            let buffer = CharBuffer::decompose(case.input);
            let mut pass = Scan::new(&buffer);
            assert_eq!(pass.run().unwrap(), Pass::Finished, "{}", case.input);
            assert_eq!(pass.state, case.state, "{}", case.input);
        }
    }
}
