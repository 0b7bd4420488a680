/// Largest year a `Date` can hold
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// First day of month, used when the input carries no day
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// February length in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month in a common year, indexed by month number (index 0 unused).
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Century added to two-digit years (`71` -> `1971`). There is no pivot year.
pub const CENTURY_BASE: u16 = 1900;

/// A separator found at this index follows a 4-digit year (`2014-`, `2014/`).
pub(crate) const YEAR_PREFIX_LEN: usize = 4;

/// Length of a short textual unit (`oct`, `tue`).
pub(crate) const ABBREVIATION_LEN: usize = 3;

/// A space plus a 3-letter month abbreviation (` Sep`). A `DD Month` prefix
/// longer than this holds a full month name.
pub(crate) const SPACED_ABBREVIATION_LEN: usize = 4;

/// Width of the `" YYYY"`-shaped tail the long-month layout assumes
/// (`18 January 2018`): both spaces plus a 4-digit year.
pub(crate) const LONG_MONTH_TAIL_LEN: usize = 6;

/// A full month followed by fewer characters than this (` 31, 2018` is 9)
/// is a plain `Month D, YYYY` layout; anything longer may carry more.
pub(crate) const SHORT_REMAINDER_LEN: usize = 10;

/// Length of a year that gets [`CENTURY_BASE`] added.
pub(crate) const SHORT_YEAR_LEN: usize = 2;

/// Accepted lengths of a year field.
pub(crate) const YEAR_LENS: [usize; 2] = [SHORT_YEAR_LEN, YEAR_PREFIX_LEN];
/// Accepted length bounds of a numeric or abbreviated month field.
pub(crate) const MONTH_LEN_MIN: usize = 1;
pub(crate) const MONTH_LEN_MAX: usize = 4;
/// Accepted length bounds of a day field.
pub(crate) const DAY_LEN_MIN: usize = 1;
pub(crate) const DAY_LEN_MAX: usize = 2;

/// Ordinal suffixes stripped from day numbers (`8th`, `22nd`).
pub(crate) const ORDINAL_SUFFIXES: [&str; 4] = ["th", "nd", "rd", "st"];

/// Letters that may start an ordinal suffix.
pub(crate) const ORDINAL_LEADS: [char; 4] = ['t', 'n', 'r', 's'];

/// U+2212, read as an ASCII hyphen.
pub(crate) const MINUS_SIGN: char = '\u{2212}';
