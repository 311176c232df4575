//! Date pattern auto-detection.
//!
//! Every known pattern is tried with the strict parser. One hit wins outright. With
//! several hits, the pair of candidates whose timestamps are closest is taken (first
//! pair in enumeration order on ties) and, of that pair, the timestamp farther from
//! the epoch decides the pattern.

use serde::Serialize;
use tracing::{debug, trace};

use super::calendar::{current_year, BirthdayRule};
use super::parse::{parse_template_at, ParsedDate};
use super::pattern::DateFormatPattern;
use crate::util::trunc_for_log;

/// A pattern that fully parsed the input, with the resulting instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
  pub pattern: DateFormatPattern,
  pub timestamp_millis: i64,
}

/// All patterns that strictly parse `raw`, in table order.
pub fn candidates(raw: &str) -> Vec<Candidate> {
  candidates_at(raw, current_year())
}

pub fn candidates_at(raw: &str, this_year: i32) -> Vec<Candidate> {
  DateFormatPattern::ALL
    .iter()
    .filter_map(|&pattern| {
      parse_template_at(raw, pattern.template(), this_year)
        .map(|parsed| Candidate { pattern, timestamp_millis: parsed.timestamp_millis() })
        .map_err(|e| trace!(target: "commonx::date", %pattern, error = %e, "pattern rejected"))
        .ok()
    })
    .collect()
}

/// Pick one candidate with the closest-pair rule. `None` only for an empty slice.
pub fn pick_accurate(candidates: &[Candidate]) -> Option<&Candidate> {
  match candidates {
    [] => None,
    [only] => Some(only),
    _ => {
      let mut best: Option<(u64, usize, usize)> = None;
      for i in 0..candidates.len() {
        for j in i + 1..candidates.len() {
          let distance = candidates[i].timestamp_millis.abs_diff(candidates[j].timestamp_millis);
          if best.map_or(true, |(d, _, _)| distance < d) {
            best = Some((distance, i, j));
          }
        }
      }
      let (_, i, j) = best?;
      let (a, b) = (&candidates[i], &candidates[j]);
      if a.timestamp_millis.unsigned_abs() > b.timestamp_millis.unsigned_abs() {
        Some(a)
      } else {
        Some(b)
      }
    }
  }
}

/// Infer which known pattern `raw` is written in.
pub fn resolve_pattern(raw: &str) -> Option<DateFormatPattern> {
  resolve_pattern_at(raw, current_year())
}

pub fn resolve_pattern_at(raw: &str, this_year: i32) -> Option<DateFormatPattern> {
  let found = candidates_at(raw, this_year);
  let chosen = pick_accurate(&found).map(|c| c.pattern);
  debug!(
    target: "commonx::date",
    raw = %trunc_for_log(raw, 64),
    candidates = found.len(),
    chosen = ?chosen.map(DateFormatPattern::template),
    "resolved date pattern"
  );
  chosen
}

/// Resolve the pattern, then parse with it.
pub fn parse_auto(raw: &str) -> Option<ParsedDate> {
  let this_year = current_year();
  let pattern = resolve_pattern_at(raw, this_year)?;
  parse_template_at(raw, pattern.template(), this_year).ok()
}

/// True when `raw` is a recognizable date that passes the default birthday rule.
pub fn is_birthday_str(raw: &str) -> bool {
  is_birthday_str_with(raw, &BirthdayRule::default())
}

pub fn is_birthday_str_with(raw: &str, rule: &BirthdayRule) -> bool {
  parse_auto(raw).map_or(false, |p| rule.accepts_date(p.date()))
}
