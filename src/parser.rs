use tracing::{debug, trace};

use crate::Date;
use crate::assemble::assemble;
use crate::buffer::CharBuffer;
use crate::error::ParseError;
use crate::scanner::scan;

/// Guesses the layout of one date string and reads it.
///
/// Leading and trailing whitespace is ignored. Numeric slash and dot layouts
/// are read month first (`3/31/2014`), two-digit years land in the 1900s and
/// a missing day means the first of the month. Anything after the date
/// itself, such as a time of day, is ignored.
///
/// ```
/// use guess_date::DateParser;
///
/// let date = DateParser::new("  Mon, 02 Jan 2006 15:04:05 MST ").parse()?;
/// assert_eq!(date.ymd(), (2006, 1, 2));
/// # Ok::<(), guess_date::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DateParser {
    input: String,
    buffer: CharBuffer,
}

impl DateParser {
    /// Trims `input` and prepares it for a single parse.
    pub fn new(input: &str) -> Self {
        let input = input.trim().to_owned();
        let buffer = CharBuffer::decompose(&input);
        Self { input, buffer }
    }

    /// The trimmed input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consumes the parser and reads the date.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the input is empty, no layout fits it,
    /// or the fields it names are not a real calendar day.
    pub fn parse(mut self) -> Result<Date, ParseError> {
        trace!(input = %self.input, "guessing date layout");
        if self.buffer.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let result = scan(&mut self.buffer).and_then(|spans| assemble(&self.buffer, &spans));
        if let Err(err) = &result {
            debug!(input = %self.input, %err, "could not parse date");
        }
        result
    }

    /// Like [`parse`](Self::parse), discarding the error.
    pub fn try_parse(self) -> Option<Date> {
        self.parse().ok()
    }
}
