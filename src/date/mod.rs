//! Dates: the known pattern table, a strict template parser, pattern auto-detection,
//! and Gregorian calendar helpers.

pub mod calendar;
pub mod parse;
pub mod pattern;
pub mod resolve;

pub use calendar::{calculate_age, is_birthday, is_leap_year, BirthdayRule, Month, Quarter, Week};
pub use parse::{parse_template, parse_with, ParsedDate};
pub use pattern::DateFormatPattern;
pub use resolve::{is_birthday_str, is_birthday_str_with, parse_auto, resolve_pattern, Candidate};
