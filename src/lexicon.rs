//! English month and weekday names.
//!
//! Every lookup is case-insensitive over ASCII letters; anything else never
//! matches. Months number 1-12, weekdays 1-7 starting on Monday.

const FULL_MONTHS: [(&str, u8); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

const SHORT_MONTHS: [(&str, u8); 13] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("sept", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

const FULL_WEEKDAYS: [(&str, u8); 7] = [
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
    ("sunday", 7),
];

const SHORT_WEEKDAYS: [(&str, u8); 10] = [
    ("mon", 1),
    ("tue", 2),
    ("tues", 2),
    ("wed", 3),
    ("thu", 4),
    ("thur", 4),
    ("thurs", 4),
    ("fri", 5),
    ("sat", 6),
    ("sun", 7),
];

fn lookup(table: &[(&str, u8)], name: &str) -> Option<u8> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(_, number)| number)
}

pub fn is_full_month(name: &str) -> bool {
    lookup(&FULL_MONTHS, name).is_some()
}

pub fn is_abbreviated_month(name: &str) -> bool {
    lookup(&SHORT_MONTHS, name).is_some()
}

pub fn is_textual_month(name: &str) -> bool {
    is_full_month(name) || is_abbreviated_month(name)
}

/// Month number for a full or abbreviated name.
pub fn month_number(name: &str) -> Option<u8> {
    lookup(&FULL_MONTHS, name).or_else(|| lookup(&SHORT_MONTHS, name))
}

pub fn is_weekday_name(name: &str) -> bool {
    weekday_number(name).is_some()
}

/// Weekday number (Monday = 1) for a full or abbreviated name.
pub fn weekday_number(name: &str) -> Option<u8> {
    lookup(&FULL_WEEKDAYS, name).or_else(|| lookup(&SHORT_WEEKDAYS, name))
}
