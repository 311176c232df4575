//! Gregorian calendar helpers: leap years, birthday plausibility, week/month/quarter
//! enums with Chinese names, and age calculation.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::numeral::to_chinese_lower;

/// Earliest birth year accepted by default.
pub const MIN_BIRTH_YEAR: i32 = 1930;

/// Year of the local clock.
pub fn current_year() -> i32 {
  Local::now().year()
}

/// Divisible by 4, not by 100 unless by 400.
pub fn is_leap_year(year: i32) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Bounds for a plausible birth date. `max_year` of `None` means the current year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRule {
  pub min_year: i32,
  pub max_year: Option<i32>,
}

impl Default for BirthdayRule {
  fn default() -> Self {
    Self { min_year: MIN_BIRTH_YEAR, max_year: None }
  }
}

impl BirthdayRule {
  /// Check `(year, month, day)` with a 1-based month.
  pub fn accepts(&self, year: i32, month: u32, day: u32) -> bool {
    self.accepts_at(year, month, day, current_year())
  }

  /// Same as [`accepts`](Self::accepts) with an explicit "current year".
  pub fn accepts_at(&self, year: i32, month: u32, day: u32, this_year: i32) -> bool {
    let max_year = self.max_year.unwrap_or(this_year);
    if year < self.min_year || year > max_year {
      return false;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
      return false;
    }
    match month {
      4 | 6 | 9 | 11 => day <= 30,
      2 => day <= 28 || (day == 29 && is_leap_year(year)),
      _ => true,
    }
  }

  pub fn accepts_date(&self, date: NaiveDate) -> bool {
    self.accepts(date.year(), date.month(), date.day())
  }
}

/// Birthday check with the default rule.
pub fn is_birthday(year: i32, month: u32, day: u32) -> bool {
  BirthdayRule::default().accepts(year, month, day)
}

/// Full years between `birth` and `on`; 0 when `on` is before `birth`.
pub fn calculate_age(birth: NaiveDate, on: NaiveDate) -> u32 {
  if on < birth {
    return 0;
  }
  let mut age = on.year() - birth.year();
  if (on.month(), on.day()) < (birth.month(), birth.day()) {
    age -= 1;
  }
  age.max(0) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Week {
  Sunday,
  Monday,
  Tuesday,
  Wednesday,
  Thursday,
  Friday,
  Saturday,
}

impl Week {
  /// 1 is Sunday, 7 is Saturday.
  pub fn of(value: u32) -> Option<Week> {
    use Week::*;
    match value {
      1 => Some(Sunday),
      2 => Some(Monday),
      3 => Some(Tuesday),
      4 => Some(Wednesday),
      5 => Some(Thursday),
      6 => Some(Friday),
      7 => Some(Saturday),
      _ => None,
    }
  }

  pub fn value(self) -> u32 {
    self as u32 + 1
  }

  /// Chinese day name with a prefix, e.g. "星期" gives "星期一", "周" gives "周一".
  pub fn to_chinese(self, prefix: &str) -> String {
    let day = match self {
      Week::Sunday => "日",
      Week::Monday => "一",
      Week::Tuesday => "二",
      Week::Wednesday => "三",
      Week::Thursday => "四",
      Week::Friday => "五",
      Week::Saturday => "六",
    };
    format!("{prefix}{day}")
  }
}

impl From<Weekday> for Week {
  fn from(w: Weekday) -> Self {
    match w {
      Weekday::Sun => Week::Sunday,
      Weekday::Mon => Week::Monday,
      Weekday::Tue => Week::Tuesday,
      Weekday::Wed => Week::Wednesday,
      Weekday::Thu => Week::Thursday,
      Weekday::Fri => Week::Friday,
      Weekday::Sat => Week::Saturday,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
  January,
  February,
  March,
  April,
  May,
  June,
  July,
  August,
  September,
  October,
  November,
  December,
}

impl Month {
  const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
  ];

  /// 1-based month number.
  pub fn of(value: u32) -> Option<Month> {
    value.checked_sub(1).and_then(|i| Self::ALL.get(i as usize).copied())
  }

  pub fn value(self) -> u32 {
    self as u32 + 1
  }

  /// "一月" .. "十二月".
  pub fn to_chinese(self) -> String {
    format!("{}月", to_chinese_lower(self.value()))
  }

  pub fn quarter(self) -> Quarter {
    // value() is 1..=12 so the quarter always exists
    Quarter::ALL[(self as usize) / 3]
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
  Q1,
  Q2,
  Q3,
  Q4,
}

impl Quarter {
  const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

  pub fn of(value: u32) -> Option<Quarter> {
    value.checked_sub(1).and_then(|i| Self::ALL.get(i as usize).copied())
  }

  pub fn value(self) -> u32 {
    self as u32 + 1
  }

  /// First day of this quarter in `year`.
  pub fn begin(self, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, self.value() * 3 - 2, 1)
  }

  /// Last day of this quarter in `year`.
  pub fn end(self, year: i32) -> Option<NaiveDate> {
    let next = match self {
      Quarter::Q4 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
      q => NaiveDate::from_ymd_opt(year, q.value() * 3 + 1, 1)?,
    };
    next.pred_opt()
  }

  /// "第一季度".
  pub fn to_chinese(self) -> String {
    format!("第{}季度", to_chinese_lower(self.value()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(1600));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
  }

  #[test]
  fn birthday_year_bounds() {
    let rule = BirthdayRule::default();
    assert!(!rule.accepts_at(1929, 6, 1, 2026));
    assert!(rule.accepts_at(1930, 1, 1, 2026));
    assert!(rule.accepts_at(2026, 12, 31, 2026));
    assert!(!rule.accepts_at(2027, 1, 1, 2026));
  }

  #[test]
  fn birthday_february_29() {
    let rule = BirthdayRule { min_year: 1500, max_year: Some(2100) };
    assert!(rule.accepts_at(2000, 2, 29, 2026));
    assert!(rule.accepts_at(1600, 2, 29, 2026));
    assert!(!rule.accepts_at(1900, 2, 29, 2026));
    assert!(!rule.accepts_at(2023, 2, 29, 2026));
    assert!(!rule.accepts_at(2024, 2, 30, 2026));
  }

  #[test]
  fn birthday_short_months_and_ranges() {
    let rule = BirthdayRule::default();
    for m in [4, 6, 9, 11] {
      assert!(rule.accepts_at(1990, m, 30, 2026));
      assert!(!rule.accepts_at(1990, m, 31, 2026));
    }
    assert!(rule.accepts_at(1990, 1, 31, 2026));
    assert!(!rule.accepts_at(1990, 0, 1, 2026));
    assert!(!rule.accepts_at(1990, 13, 1, 2026));
    assert!(!rule.accepts_at(1990, 1, 0, 2026));
    assert!(!rule.accepts_at(1990, 1, 32, 2026));
  }

  #[test]
  fn age_counts_full_years() {
    assert_eq!(calculate_age(ymd(1990, 5, 20), ymd(2020, 5, 19)), 29);
    assert_eq!(calculate_age(ymd(1990, 5, 20), ymd(2020, 5, 20)), 30);
    assert_eq!(calculate_age(ymd(1990, 5, 20), ymd(2020, 4, 30)), 29);
    assert_eq!(calculate_age(ymd(2020, 1, 1), ymd(2019, 1, 1)), 0);
  }

  #[test]
  fn chinese_names() {
    assert_eq!(Week::Monday.to_chinese("星期"), "星期一");
    assert_eq!(Week::Sunday.to_chinese("周"), "周日");
    assert_eq!(Week::from(Weekday::Sat), Week::Saturday);
    assert_eq!(Week::of(1), Some(Week::Sunday));
    assert_eq!(Week::of(8), None);
    assert_eq!(Month::of(1).map(Month::to_chinese).as_deref(), Some("一月"));
    assert_eq!(Month::December.to_chinese(), "十二月");
    assert_eq!(Month::of(0), None);
    assert_eq!(Quarter::Q3.to_chinese(), "第三季度");
  }

  #[test]
  fn quarters() {
    assert_eq!(Month::May.quarter(), Quarter::Q2);
    assert_eq!(Month::December.quarter(), Quarter::Q4);
    assert_eq!(Quarter::Q1.begin(2024), Some(ymd(2024, 1, 1)));
    assert_eq!(Quarter::Q1.end(2024), Some(ymd(2024, 3, 31)));
    assert_eq!(Quarter::Q4.end(2024), Some(ymd(2024, 12, 31)));
    assert_eq!(Quarter::of(5), None);
  }
}
