//! End-to-end checks of the public surface: ID validation, date pattern detection,
//! and currency rendering.

use std::str::FromStr;

use rand::Rng;
use rust_decimal::Decimal;

use commonx::date::{self, BirthdayRule, DateFormatPattern};
use commonx::idcard::{check_code18, is_id_card, province_of};
use commonx::{is_id_card15, is_id_card18, resolve_pattern, to_chinese_amount, to_chinese_amount_i64, Error};

#[test]
fn generated_ids_validate_and_single_edits_fail() {
  let mut rng = rand::thread_rng();
  for _ in 0..200 {
    let body: String = (0..17).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect();
    let code = check_code18(&body).unwrap();
    let id = format!("{body}{code}");
    assert!(is_id_card18(&id));
    assert!(is_id_card(&id));

    for other in "0123456789x".chars().filter(|c| *c != code) {
      assert!(!is_id_card18(&format!("{body}{other}")));
    }
  }
}

#[test]
fn classic_example_id() {
  assert!(is_id_card18("11010519491231002X"));
  assert!(!is_id_card18("110105194912310021"));
  assert_eq!(province_of("11010519491231002X"), Some("北京"));
  assert!(is_id_card15("110105701231002"));
  assert!(!is_id_card15("11010519491231002X"));
}

#[test]
fn birthday_boundaries() {
  let rule = BirthdayRule { min_year: 1930, max_year: Some(2026) };
  assert!(!rule.accepts(1929, 12, 31));
  assert!(rule.accepts(1930, 1, 1));
  assert!(!rule.accepts(2023, 2, 29));
  assert!(rule.accepts(2000, 2, 29));
  assert!(!rule.accepts(1900, 2, 29));
  let wide = BirthdayRule { min_year: 1500, max_year: Some(2100) };
  assert!(wide.accepts(1600, 2, 29));
}

#[test]
fn date_pattern_detection() {
  assert_eq!(resolve_pattern("2018-07-10 12:30:00"), Some(DateFormatPattern::YyyyMmDdHhMmSs));
  assert_eq!(resolve_pattern("2018/07/10 12:30"), Some(DateFormatPattern::YyyyMmDdHhMmEn));
  assert_eq!(resolve_pattern("12-25 08:00:00"), Some(DateFormatPattern::MmDdHhMmSs));
  assert_eq!(resolve_pattern("not a date"), None);

  let ambiguous = "07/10";
  let first = resolve_pattern(ambiguous);
  assert!(first.is_some());
  for _ in 0..10 {
    assert_eq!(resolve_pattern(ambiguous), first);
  }
}

#[test]
fn auto_parse_feeds_birthday_and_age() {
  let birth = date::parse_auto("1990年05月20日").unwrap().date();
  let on = date::parse_auto("2020-05-19").unwrap().date();
  assert_eq!(date::calculate_age(birth, on), 29);
  assert!(date::is_birthday_str("1990年05月20日"));
  assert!(!date::is_birthday_str("1990年02月30日"));
}

#[test]
fn currency_rendering() {
  assert_eq!(to_chinese_amount(&Decimal::ZERO).unwrap(), "零元整");

  let negative = to_chinese_amount_i64(-1234).unwrap();
  assert!(negative.starts_with('负'));
  assert!(negative.ends_with('整'));

  let text = to_chinese_amount(&Decimal::from_str("100.5").unwrap()).unwrap();
  assert!(!text.ends_with('整'));
  assert!(text.contains('角'));
  assert!(!text.contains('分'));

  let err = to_chinese_amount(&Decimal::from_str("123456789012345678").unwrap()).unwrap_err();
  assert!(matches!(err, Error::AmountOutOfRange { .. }));
}
