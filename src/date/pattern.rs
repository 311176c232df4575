//! The fixed, ordered table of known date templates.
//!
//! Templates use `SimpleDateFormat`-style letters (`yyyy-MM-dd HH:mm:ss`). Table order
//! matters: the resolver enumerates candidates in this order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateFormatPattern {
  YyyyMm,
  YyyyMmDd,
  Yyyymmdd,
  YyyyMmDdHhMm,
  YyyyMmDdHhMmSs,
  YyyyMmEn,
  YyyyMmDdEn,
  YyyyMmDdHhMmEn,
  YyyyMmDdHhMmSsEn,
  MmDdYyyyHhMmSsEn,
  MmDdYyyyHhMmEn,
  MmDdYyyyHhEn,
  MmDdYyyyEn,
  MmYyyyEn,

  Yyyymmddhhmmss,

  YyyyMmCn,
  YyyyMmDdCn,
  YyyyMmDdHhMmCn,
  YyyyMmDdHhMmSsCn,

  HhMm,
  HhMmSs,

  MmDd,
  MmDdHhMm,
  MmDdHhMmSs,

  MmDdEn,
  MmDdHhMmEn,
  MmDdHhMmSsEn,

  MmDdCn,
  MmDdHhMmCn,
  MmDdHhMmSsCn,

  EMmmDdHhMmSsZYyyy,
}

impl DateFormatPattern {
  /// Every pattern, in resolution order.
  pub const ALL: [DateFormatPattern; 31] = {
    use DateFormatPattern::*;
    [
      YyyyMm,
      YyyyMmDd,
      Yyyymmdd,
      YyyyMmDdHhMm,
      YyyyMmDdHhMmSs,
      YyyyMmEn,
      YyyyMmDdEn,
      YyyyMmDdHhMmEn,
      YyyyMmDdHhMmSsEn,
      MmDdYyyyHhMmSsEn,
      MmDdYyyyHhMmEn,
      MmDdYyyyHhEn,
      MmDdYyyyEn,
      MmYyyyEn,
      Yyyymmddhhmmss,
      YyyyMmCn,
      YyyyMmDdCn,
      YyyyMmDdHhMmCn,
      YyyyMmDdHhMmSsCn,
      HhMm,
      HhMmSs,
      MmDd,
      MmDdHhMm,
      MmDdHhMmSs,
      MmDdEn,
      MmDdHhMmEn,
      MmDdHhMmSsEn,
      MmDdCn,
      MmDdHhMmCn,
      MmDdHhMmSsCn,
      EMmmDdHhMmSsZYyyy,
    ]
  };

  pub fn template(self) -> &'static str {
    use DateFormatPattern::*;
    match self {
      YyyyMm => "yyyy-MM",
      YyyyMmDd => "yyyy-MM-dd",
      Yyyymmdd => "yyyyMMdd",
      YyyyMmDdHhMm => "yyyy-MM-dd HH:mm",
      YyyyMmDdHhMmSs => "yyyy-MM-dd HH:mm:ss",
      YyyyMmEn => "yyyy/MM",
      YyyyMmDdEn => "yyyy/MM/dd",
      YyyyMmDdHhMmEn => "yyyy/MM/dd HH:mm",
      YyyyMmDdHhMmSsEn => "yyyy/MM/dd HH:mm:ss",
      MmDdYyyyHhMmSsEn => "MM/dd/yyyy HH:mm:ss",
      MmDdYyyyHhMmEn => "MM/dd/yyyy HH:mm",
      MmDdYyyyHhEn => "MM/dd/yyyy HH",
      MmDdYyyyEn => "MM/dd/yyyy",
      MmYyyyEn => "MM/yyyy",
      Yyyymmddhhmmss => "yyyyMMddhhmmss",
      YyyyMmCn => "yyyy年MM月",
      YyyyMmDdCn => "yyyy年MM月dd日",
      YyyyMmDdHhMmCn => "yyyy年MM月dd日 HH:mm",
      YyyyMmDdHhMmSsCn => "yyyy年MM月dd日 HH:mm:ss",
      HhMm => "HH:mm",
      HhMmSs => "HH:mm:ss",
      MmDd => "MM-dd",
      MmDdHhMm => "MM-dd HH:mm",
      MmDdHhMmSs => "MM-dd HH:mm:ss",
      MmDdEn => "MM/dd",
      MmDdHhMmEn => "MM/dd HH:mm",
      MmDdHhMmSsEn => "MM/dd HH:mm:ss",
      MmDdCn => "MM月dd日",
      MmDdHhMmCn => "MM月dd日 HH:mm",
      MmDdHhMmSsCn => "MM月dd日 HH:mm:ss",
      EMmmDdHhMmSsZYyyy => "E MMM dd HH:mm:ss Z yyyy",
    }
  }

  /// Look a pattern up by its template string.
  pub fn of(template: &str) -> Result<DateFormatPattern> {
    Self::ALL
      .iter()
      .copied()
      .find(|p| p.template() == template)
      .ok_or_else(|| Error::UnknownPattern(template.to_string()))
  }
}

impl std::fmt::Display for DateFormatPattern {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.template())
  }
}
