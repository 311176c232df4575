//! Strict single-template date parsing.
//!
//! Semantics follow a non-lenient `SimpleDateFormat`:
//! - the whole input must be consumed;
//! - out-of-range fields (month 13, Feb 30, minute 60) fail instead of rolling over;
//! - numeric fields abutting another numeric field take exactly `count` digits,
//!   otherwise one or more digits greedily;
//! - a two-digit `yy` year lands in `[this_year - 80, this_year + 20)`;
//! - missing fields default to 1970-01-01 00:00:00, UTC unless `Z` says otherwise.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::calendar::current_year;
use super::pattern::DateFormatPattern;
use crate::error::{Error, Result};
use crate::util::leading_digits;

// Longer numbers than this are never a date field and would overflow u32.
const MAX_FIELD_DIGITS: usize = 9;

const MONTH_NAMES: [(&str, u32); 24] = [
  ("January", 1), ("February", 2), ("March", 3), ("April", 4),
  ("May", 5), ("June", 6), ("July", 7), ("August", 8),
  ("September", 9), ("October", 10), ("November", 11), ("December", 12),
  ("Jan", 1), ("Feb", 2), ("Mar", 3), ("Apr", 4), ("May", 5), ("Jun", 6),
  ("Jul", 7), ("Aug", 8), ("Sep", 9), ("Oct", 10), ("Nov", 11), ("Dec", 12),
];

const WEEKDAY_NAMES: [(&str, Weekday); 14] = [
  ("Sunday", Weekday::Sun), ("Monday", Weekday::Mon), ("Tuesday", Weekday::Tue),
  ("Wednesday", Weekday::Wed), ("Thursday", Weekday::Thu), ("Friday", Weekday::Fri),
  ("Saturday", Weekday::Sat),
  ("Sun", Weekday::Sun), ("Mon", Weekday::Mon), ("Tue", Weekday::Tue), ("Wed", Weekday::Wed),
  ("Thu", Weekday::Thu), ("Fri", Weekday::Fri), ("Sat", Weekday::Sat),
];

/// A successfully parsed date. `datetime` is wall-clock time in `offset` (UTC when absent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedDate {
  pub datetime: NaiveDateTime,
  pub offset: Option<FixedOffset>,
}

impl ParsedDate {
  /// Milliseconds since the Unix epoch.
  pub fn timestamp_millis(&self) -> i64 {
    let offset_ms = self.offset.map_or(0, |o| o.local_minus_utc() as i64 * 1000);
    self.datetime.and_utc().timestamp_millis() - offset_ms
  }

  pub fn date(&self) -> NaiveDate {
    self.datetime.date()
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
  Field { letter: char, count: usize },
  Literal(char),
}

impl Token {
  fn is_numeric_field(self) -> bool {
    match self {
      Token::Field { letter: 'M', count } => count <= 2,
      Token::Field { letter, .. } => matches!(letter, 'y' | 'd' | 'H' | 'h' | 'm' | 's'),
      Token::Literal(_) => false,
    }
  }
}

fn compile(template: &str) -> Vec<Token> {
  let mut tokens: Vec<Token> = Vec::new();
  for ch in template.chars() {
    if ch.is_ascii_alphabetic() {
      if let Some(Token::Field { letter, count }) = tokens.last_mut() {
        if *letter == ch {
          *count += 1;
          continue;
        }
      }
      tokens.push(Token::Field { letter: ch, count: 1 });
    } else {
      tokens.push(Token::Literal(ch));
    }
  }
  tokens
}

#[derive(Default)]
struct Fields {
  year: Option<i32>,
  month: Option<u32>,
  day: Option<u32>,
  hour_of_day: Option<u32>,
  hour_of_half_day: Option<u32>,
  minute: Option<u32>,
  second: Option<u32>,
  weekday: Option<Weekday>,
  offset: Option<FixedOffset>,
}

/// Parse `raw` against one of the known patterns.
pub fn parse_with(raw: &str, pattern: DateFormatPattern) -> Result<ParsedDate> {
  parse_template(raw, pattern.template())
}

/// Parse `raw` against an arbitrary template using the current year for `yy` pivoting.
pub fn parse_template(raw: &str, template: &'static str) -> Result<ParsedDate> {
  parse_template_at(raw, template, current_year())
}

/// Same as [`parse_template`] with an explicit reference year.
pub fn parse_template_at(raw: &str, template: &'static str, this_year: i32) -> Result<ParsedDate> {
  parse_tokens(raw, &compile(template), this_year).map_err(|reason| Error::InvalidDate {
    input: raw.to_string(),
    template,
    reason,
  })
}

fn parse_tokens(raw: &str, tokens: &[Token], this_year: i32) -> std::result::Result<ParsedDate, String> {
  let mut rest = raw;
  let mut fields = Fields::default();

  for (i, token) in tokens.iter().enumerate() {
    match *token {
      Token::Literal(c) => {
        rest = rest
          .strip_prefix(c)
          .ok_or_else(|| format!("expected '{c}' at byte {}", raw.len() - rest.len()))?;
      }
      Token::Field { letter: 'M', count } if count >= 3 => {
        let (month, len) = match_name(rest, &MONTH_NAMES).ok_or("expected a month name")?;
        fields.month = Some(month);
        rest = &rest[len..];
      }
      Token::Field { letter: 'E', .. } => {
        let (weekday, len) = match_name(rest, &WEEKDAY_NAMES).ok_or("expected a weekday name")?;
        fields.weekday = Some(weekday);
        rest = &rest[len..];
      }
      Token::Field { letter: 'Z', .. } | Token::Field { letter: 'z', .. } => {
        let (offset, len) = parse_zone(rest).ok_or("expected a time zone")?;
        fields.offset = Some(offset);
        rest = &rest[len..];
      }
      Token::Field { letter, count } if token.is_numeric_field() => {
        let abutting = tokens.get(i + 1).map_or(false, |t| t.is_numeric_field());
        let available = leading_digits(rest);
        let take = if abutting { count } else { available };
        if available == 0 || available < take {
          return Err(format!("expected {} digit(s) for '{letter}'", take.max(1)));
        }
        if take > MAX_FIELD_DIGITS {
          return Err(format!("too many digits for '{letter}'"));
        }
        let value: u32 = rest[..take].parse().map_err(|_| format!("bad number for '{letter}'"))?;
        rest = &rest[take..];
        match letter {
          'y' => fields.year = Some(resolve_year(value, count, take, this_year)?),
          'M' => fields.month = Some(value),
          'd' => fields.day = Some(value),
          'H' => fields.hour_of_day = Some(value),
          'h' => fields.hour_of_half_day = Some(value),
          'm' => fields.minute = Some(value),
          's' => fields.second = Some(value),
          _ => unreachable!("is_numeric_field covers these letters"),
        }
      }
      Token::Field { letter, .. } => return Err(format!("unsupported pattern letter '{letter}'")),
    }
  }

  if !rest.is_empty() {
    return Err(format!("unparsed trailing text '{rest}'"));
  }
  build(fields)
}

fn resolve_year(value: u32, count: usize, digits: usize, this_year: i32) -> std::result::Result<i32, String> {
  let value = value as i32;
  if count <= 2 && digits == 2 {
    let start = this_year - 80;
    let century = start - start.rem_euclid(100);
    let year = century + value;
    return Ok(if year < start { year + 100 } else { year });
  }
  if value < 1 {
    return Err("year must be positive".into());
  }
  Ok(value)
}

fn build(f: Fields) -> std::result::Result<ParsedDate, String> {
  let year = f.year.unwrap_or(1970);
  let month = f.month.unwrap_or(1);
  let day = f.day.unwrap_or(1);
  if !(1..=12).contains(&month) {
    return Err(format!("month {month} out of range"));
  }
  let date = NaiveDate::from_ymd_opt(year, month, day)
    .ok_or_else(|| format!("day {day} out of range for {year}-{month:02}"))?;

  let hour = match (f.hour_of_day, f.hour_of_half_day) {
    (Some(h), _) if h > 23 => return Err(format!("hour {h} out of range")),
    (Some(h), _) => h,
    (None, Some(h)) if !(1..=12).contains(&h) => return Err(format!("hour {h} out of range")),
    // no am/pm marker in the table, so a 12-hour clock reads as AM
    (None, Some(h)) => h % 12,
    (None, None) => 0,
  };
  let minute = f.minute.unwrap_or(0);
  let second = f.second.unwrap_or(0);
  let time = NaiveTime::from_hms_opt(hour, minute, second)
    .ok_or_else(|| format!("time {hour}:{minute}:{second} out of range"))?;

  if let Some(weekday) = f.weekday {
    if date.weekday() != weekday {
      return Err(format!("{date} is not a {weekday}"));
    }
  }

  Ok(ParsedDate { datetime: NaiveDateTime::new(date, time), offset: f.offset })
}

fn match_name<T: Copy>(rest: &str, names: &[(&str, T)]) -> Option<(T, usize)> {
  names
    .iter()
    .filter(|(name, _)| {
      rest.get(..name.len()).map_or(false, |head| head.eq_ignore_ascii_case(name))
    })
    .max_by_key(|(name, _)| name.len())
    .map(|(name, value)| (*value, name.len()))
}

/// `+0800`, `-0500`, `GMT`, `UTC`, `GMT+8`, `GMT+08:00`.
fn parse_zone(rest: &str) -> Option<(FixedOffset, usize)> {
  if let Some(after) = rest.strip_prefix(['+', '-']) {
    if leading_digits(after) < 4 {
      return None;
    }
    let hours: i32 = after[..2].parse().ok()?;
    let minutes: i32 = after[2..4].parse().ok()?;
    return Some((signed_offset(rest.starts_with('-'), hours, minutes)?, 5));
  }

  let head = rest.get(..3)?;
  if !head.eq_ignore_ascii_case("GMT") && !head.eq_ignore_ascii_case("UTC") {
    return None;
  }
  let after = &rest[3..];
  let Some(body) = after.strip_prefix(['+', '-']) else {
    return Some((FixedOffset::east_opt(0)?, 3));
  };
  let negative = after.starts_with('-');
  let hour_digits = leading_digits(body).min(2);
  if hour_digits == 0 {
    return None;
  }
  let hours: i32 = body[..hour_digits].parse().ok()?;
  let mut len = 4 + hour_digits;
  let mut minutes = 0;
  if let Some(mins) = body[hour_digits..].strip_prefix(':') {
    if leading_digits(mins) < 2 {
      return None;
    }
    minutes = mins[..2].parse().ok()?;
    len += 3;
  }
  Some((signed_offset(negative, hours, minutes)?, len))
}

fn signed_offset(negative: bool, hours: i32, minutes: i32) -> Option<FixedOffset> {
  if hours > 23 || minutes > 59 {
    return None;
  }
  let secs = (hours * 60 + minutes) * 60;
  FixedOffset::east_opt(if negative { -secs } else { secs })
}
