//! Chinese resident ID numbers (GB 11643-1999).
//!
//! 18-digit layout: six-digit address code, eight-digit birth date (`yyyyMMdd`),
//! three-digit sequence (odd for men, even for women), one check character.
//!
//! The check character: multiply the first 17 digits by
//! `7 9 10 5 8 4 2 1 6 3 7 9 10 5 8 4 2`, sum, take the remainder mod 11 and map
//! `0..=10` to `1 0 X 9 8 7 6 5 4 3 2`. Remainder 2 gives the Roman ten, written `X`.
//!
//! The legacy 15-digit layout has no check character and a `yyMMdd` birth date at
//! offset 6.
//!
//! Every function here is total: malformed input yields `false`/`None`. Input is not
//! trimmed. ID numbers are never written to the logs.

use chrono::Datelike;
use tracing::debug;

use crate::date::calendar::{current_year, BirthdayRule};
use crate::date::parse::parse_template_at;
use crate::util::is_ascii_digits;

pub const CHINA_ID_MIN_LENGTH: usize = 15;
pub const CHINA_ID_MAX_LENGTH: usize = 18;

/// Weight for each of the first 17 digits.
const POWER: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check character for each `sum % 11`.
const CHECK_CODES: [char; 11] = ['1', '0', 'x', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Province-level region codes.
const PROVINCES: [(&str, &str); 35] = [
  ("11", "北京"),
  ("12", "天津"),
  ("13", "河北"),
  ("14", "山西"),
  ("15", "内蒙古"),
  ("21", "辽宁"),
  ("22", "吉林"),
  ("23", "黑龙江"),
  ("31", "上海"),
  ("32", "江苏"),
  ("33", "浙江"),
  ("34", "安徽"),
  ("35", "福建"),
  ("36", "江西"),
  ("37", "山东"),
  ("41", "河南"),
  ("42", "湖北"),
  ("43", "湖南"),
  ("44", "广东"),
  ("45", "广西"),
  ("46", "海南"),
  ("50", "重庆"),
  ("51", "四川"),
  ("52", "贵州"),
  ("53", "云南"),
  ("54", "西藏"),
  ("61", "陕西"),
  ("62", "甘肃"),
  ("63", "青海"),
  ("64", "宁夏"),
  ("65", "新疆"),
  ("71", "台湾"),
  ("81", "香港"),
  ("82", "澳门"),
  ("91", "国外"),
];

/// Check character for a 17-digit body, lowercase `x` for ten.
/// `None` unless `body` is exactly 17 ASCII digits.
pub fn check_code18(body: &str) -> Option<char> {
  if body.len() != CHINA_ID_MAX_LENGTH - 1 || !is_ascii_digits(body) {
    return None;
  }
  let sum: u32 = body
    .bytes()
    .zip(POWER.iter())
    .map(|(b, w)| u32::from(b - b'0') * w)
    .sum();
  Some(CHECK_CODES[(sum % 11) as usize])
}

/// Validate an 18-digit ID: 17 digits followed by the matching check character
/// (`x` and `X` are both accepted).
pub fn is_id_card18(id: &str) -> bool {
  if id.len() != CHINA_ID_MAX_LENGTH {
    debug!(target: "commonx::idcard", len = id.len(), "rejected: not 18 bytes");
    return false;
  }
  let Some(expected) = id.get(..CHINA_ID_MAX_LENGTH - 1).and_then(check_code18) else {
    debug!(target: "commonx::idcard", "rejected: body is not 17 digits");
    return false;
  };
  let last = &id[CHINA_ID_MAX_LENGTH - 1..];
  let ok = last.chars().map(|c| c.to_ascii_lowercase()).eq(std::iter::once(expected));
  if !ok {
    debug!(target: "commonx::idcard", "rejected: check character mismatch");
  }
  ok
}

/// Validate a legacy 15-digit ID with the default birthday rule.
pub fn is_id_card15(id: &str) -> bool {
  is_id_card15_with(id, &BirthdayRule::default())
}

/// Validate a legacy 15-digit ID: all digits, known province, plausible `yyMMdd` birth date.
pub fn is_id_card15_with(id: &str, rule: &BirthdayRule) -> bool {
  if id.len() != CHINA_ID_MIN_LENGTH || !is_ascii_digits(id) {
    debug!(target: "commonx::idcard", len = id.len(), "rejected: not 15 digits");
    return false;
  }
  if province_of(id).is_none() {
    debug!(target: "commonx::idcard", code = &id[..2], "rejected: unknown province code");
    return false;
  }
  let this_year = current_year();
  match parse_template_at(&id[6..12], "yyMMdd", this_year) {
    Ok(birth) => {
      let date = birth.date();
      let ok = rule.accepts_at(date.year(), date.month(), date.day(), this_year);
      if !ok {
        debug!(target: "commonx::idcard", birth = %birth.date(), "rejected: implausible birth date");
      }
      ok
    }
    Err(e) => {
      debug!(target: "commonx::idcard", error = %e, "rejected: unparseable birth date");
      false
    }
  }
}

/// Validate either layout, chosen by length.
pub fn is_id_card(id: &str) -> bool {
  is_id_card_with(id, &BirthdayRule::default())
}

/// Validate either layout; `rule` applies to the 15-digit birth date.
pub fn is_id_card_with(id: &str, rule: &BirthdayRule) -> bool {
  match id.len() {
    CHINA_ID_MIN_LENGTH => is_id_card15_with(id, rule),
    CHINA_ID_MAX_LENGTH => is_id_card18(id),
    _ => false,
  }
}

/// Province name for the first two digits, if they are a known region code.
pub fn province_of(id: &str) -> Option<&'static str> {
  let code = id.get(..2)?;
  PROVINCES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}
