use std::fmt;
use std::ops::Range;

use crate::consts::MINUS_SIGN;

/// A structural edit applied between scan passes. Every edit removes at least
/// one character, so repeated restarts always terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    /// Remove `count` characters starting at `pos`.
    Delete { pos: usize, count: usize },
    /// Drop everything before `pos`.
    TruncatePrefix(usize),
}

/// The trimmed input as Unicode scalar values. Offsets are character
/// offsets, never byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    /// Splits already-trimmed input into characters, reading U+2212 as `-`.
    pub fn decompose(trimmed: &str) -> Self {
        let chars = trimmed
            .chars()
            .map(|c| if c == MINUS_SIGN { '-' } else { c })
            .collect();
        Self { chars }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Whether the character right after `pos` equals `want`, ignoring ASCII case.
    pub fn next_is(&self, pos: usize, want: char) -> bool {
        self.get(pos + 1)
            .is_some_and(|c| c.eq_ignore_ascii_case(&want))
    }

    /// First index at or after `pos` that is not a space, capped at the length.
    pub fn skip_spaces(&self, pos: usize) -> usize {
        (pos..self.len())
            .find(|&i| self.chars[i] != ' ')
            .unwrap_or_else(|| self.len().max(pos))
    }

    /// The characters in `range`, clamped to the buffer.
    pub fn text(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn delete_range(&mut self, pos: usize, count: usize) {
        let start = pos.min(self.len());
        let end = pos.saturating_add(count).min(self.len());
        self.chars.drain(start..end);
    }

    pub fn truncate_prefix(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        self.chars.drain(..pos);
    }

    pub fn apply(&mut self, edit: Edit) {
        let before = self.len();
        match edit {
            Edit::Delete { pos, count } => self.delete_range(pos, count),
            Edit::TruncatePrefix(pos) => self.truncate_prefix(pos),
        }
        debug_assert!(self.len() < before, "{edit:?} did not shrink the buffer");
    }
}

impl fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
