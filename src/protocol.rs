//! JSON result shapes printed by the command-line tool (serde ready).
//! Keep these small and stable; scripts parse them.

use serde::Serialize;

use commonx::date::{Candidate, DateFormatPattern};

/// One command result. Serialized without a tag: each variant has distinct fields.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
  IdCard(IdCardOut),
  Date(DateOut),
  Money(MoneyOut),
  Birthday(BirthdayOut),
  Age(AgeOut),
  Error(ErrorOut),
}

impl Output {
  pub fn is_error(&self) -> bool {
    matches!(self, Output::Error(_))
  }
}

#[derive(Debug, Serialize)]
pub struct IdCardOut {
  pub id: String,
  pub valid: bool,
  pub length: usize,
  pub province: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DateOut {
  pub raw: String,
  pub pattern: Option<DateFormatPattern>,
  pub template: Option<&'static str>,
  /// ISO-8601 wall-clock time, with offset when the input carried one.
  pub parsed: Option<String>,
  #[serde(rename = "timestampMillis")]
  pub timestamp_millis: Option<i64>,
  pub candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
pub struct MoneyOut {
  pub amount: String,
  pub chinese: String,
}

#[derive(Debug, Serialize)]
pub struct BirthdayOut {
  pub raw: String,
  pub birthday: bool,
}

#[derive(Debug, Serialize)]
pub struct AgeOut {
  pub birth: String,
  pub on: String,
  pub age: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
  pub error: String,
}
