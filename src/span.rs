use std::ops::Range;

use crate::consts::{DAY_LEN_MAX, DAY_LEN_MIN, MONTH_LEN_MAX, MONTH_LEN_MIN, YEAR_LENS};
use crate::error::ParseError;
use crate::prelude::*;

/// A date field the scanner locates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl Unit {
    /// Lengths a closed span of this unit may take. Full month names are the
    /// one exception and are closed through [`Fields::close_full_month`].
    pub const fn accepts_len(self, len: usize) -> bool {
        match self {
            Self::Year => len == YEAR_LENS[0] || len == YEAR_LENS[1],
            Self::Month => len >= MONTH_LEN_MIN && len <= MONTH_LEN_MAX,
            Self::Day => len >= DAY_LEN_MIN && len <= DAY_LEN_MAX,
        }
    }
}

/// Where a field sits in the character buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Span {
    /// Start known, end not reached yet.
    Open { pos: usize },
    Closed { pos: usize, len: usize },
}

/// Year, month and day spans of one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Fields {
    year: Option<Span>,
    month: Option<Span>,
    day: Option<Span>,
}

/// Closed spans handed to the assembler. The day may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldSpans {
    pub year: Range<usize>,
    pub month: Range<usize>,
    pub day: Option<Range<usize>>,
}

impl Fields {
    fn slot(&mut self, unit: Unit) -> &mut Option<Span> {
        match unit {
            Unit::Year => &mut self.year,
            Unit::Month => &mut self.month,
            Unit::Day => &mut self.day,
        }
    }

    pub const fn get(&self, unit: Unit) -> Option<Span> {
        match unit {
            Unit::Year => self.year,
            Unit::Month => self.month,
            Unit::Day => self.day,
        }
    }

    pub fn is_open(&self, unit: Unit) -> bool {
        matches!(self.get(unit), Some(Span::Open { .. }))
    }

    pub fn is_closed(&self, unit: Unit) -> bool {
        matches!(self.get(unit), Some(Span::Closed { .. }))
    }

    pub fn is_unset(&self, unit: Unit) -> bool {
        self.get(unit).is_none()
    }

    /// Starts (or restarts) a field at `pos`.
    pub fn open(&mut self, unit: Unit, pos: usize) {
        *self.slot(unit) = Some(Span::Open { pos });
    }

    /// Fixes a field, rejecting lengths the unit never takes.
    pub fn close(&mut self, unit: Unit, pos: usize, len: usize) -> Result<(), ParseError> {
        if !unit.accepts_len(len) {
            return Err(ParseError::UnitLengthInvalid { unit, got: len });
        }
        *self.slot(unit) = Some(Span::Closed { pos, len });
        Ok(())
    }

    /// Closes an open field so it ends right before `end`. Closed and unset
    /// fields are left alone.
    pub fn close_open_at(&mut self, unit: Unit, end: usize) -> Result<(), ParseError> {
        match self.get(unit) {
            Some(Span::Open { pos }) => self.close(unit, pos, end.saturating_sub(pos)),
            Some(Span::Closed { .. }) | None => Ok(()),
        }
    }

    /// Closes the month over a full month name, whose length is checked
    /// against the dictionary later instead of the abbreviation bounds.
    pub fn close_full_month(&mut self, pos: usize, len: usize) {
        self.month = Some(Span::Closed { pos, len });
    }

    /// Requires closed year and month spans.
    pub fn resolve(&self, input: &str) -> Result<FieldSpans, ParseError> {
        let closed = |unit: Unit| match self.get(unit) {
            Some(Span::Closed { pos, len }) => Some(pos..pos + len),
            Some(Span::Open { .. }) | None => None,
        };
        let missing = |unit: Unit| ParseError::MissingUnit {
            unit,
            input: input.to_owned(),
        };

        Ok(FieldSpans {
            year: closed(Unit::Year).ok_or_else(|| missing(Unit::Year))?,
            month: closed(Unit::Month).ok_or_else(|| missing(Unit::Month))?,
            day: closed(Unit::Day),
        })
    }
}
