//! Chinese numerals: uppercase monetary amounts (大写金额) and small lowercase
//! numbers for calendar names.
//!
//! Money rendering walks the amount in cents from the least significant digit,
//! prepending digit and unit glyphs. The unit table starts at 分 (cents) and 角
//! (dimes); when the fractional part is `.00` or `.X0` those slots are skipped. Zero
//! runs collapse to a single 零, 元 is always emitted, and 万/亿 group markers are
//! emitted only for groups holding a nonzero digit.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{Error, Result};

const CN_UPPER_NUMBER: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];

const CN_UPPER_MONETARY_UNIT: [&str; 18] = [
  "分", "角", "元", "拾", "佰", "仟", "万", "拾", "佰", "仟", "亿", "拾", "佰", "仟", "兆", "拾", "佰", "仟",
];

const CN_FULL: &str = "整";
const CN_NEGATIVE: &str = "负";
pub const CN_ZERO_FULL: &str = "零元整";

const MONEY_PRECISION: u32 = 2;

// 18 unit slots hold at most 18 cent digits; more would need a unit past 仟兆.
const MAX_CENTS: i128 = 1_000_000_000_000_000_000;

/// Integer digits the unit table can hold.
pub const MAX_INTEGER_DIGITS: usize = 16;

const CN_LOWER_NUMBER: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const CN_LOWER_SECTION_UNIT: [&str; 4] = ["", "十", "百", "千"];
const CN_LOWER_GROUP_UNIT: [&str; 3] = ["", "万", "亿"];

/// Render `amount` as an uppercase Chinese monetary amount, rounded half-up to the cent.
///
/// ```
/// use rust_decimal::Decimal;
/// let s = commonx::numeral::to_chinese_amount(&Decimal::new(-1234, 0)).unwrap();
/// assert_eq!(s, "负壹仟贰佰叁拾肆元整");
/// ```
///
/// Amounts whose integer part needs more than [`MAX_INTEGER_DIGITS`] digits fail
/// with [`Error::AmountOutOfRange`].
pub fn to_chinese_amount(amount: &Decimal) -> Result<String> {
  let negative = amount.is_sign_negative();
  let rounded = amount
    .abs()
    .round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
  if rounded.is_zero() {
    return Ok(CN_ZERO_FULL.to_string());
  }

  // round_dp leaves at most two fractional digits in the mantissa
  let cents = rounded.mantissa() * 10i128.pow(MONEY_PRECISION - rounded.scale());
  if cents >= MAX_CENTS {
    return Err(Error::AmountOutOfRange {
      amount: amount.to_string(),
      max_digits: MAX_INTEGER_DIGITS,
    });
  }

  let scale = cents % 100;
  let mut number = cents;
  let mut num_index = 0usize;
  let mut get_zero = false;
  if scale == 0 {
    num_index = 2;
    number /= 100;
    get_zero = true;
  } else if scale % 10 == 0 {
    num_index = 1;
    number /= 10;
    get_zero = true;
  }

  // glyphs in reverse order; each push is a prepend
  let mut parts: Vec<&'static str> = Vec::with_capacity(40);
  let mut zero_size = 0;
  while number > 0 {
    let digit = (number % 10) as usize;
    if digit > 0 {
      if num_index == 9 && zero_size >= 3 {
        parts.push(CN_UPPER_MONETARY_UNIT[6]);
      }
      if num_index == 13 && zero_size >= 3 {
        parts.push(CN_UPPER_MONETARY_UNIT[10]);
      }
      parts.push(CN_UPPER_MONETARY_UNIT[num_index]);
      parts.push(CN_UPPER_NUMBER[digit]);
      get_zero = false;
      zero_size = 0;
    } else {
      zero_size += 1;
      if !get_zero {
        parts.push(CN_UPPER_NUMBER[0]);
      }
      if num_index == 2 {
        parts.push(CN_UPPER_MONETARY_UNIT[num_index]);
      } else if num_index > 2 && (num_index - 2) % 4 == 0 && number % 1000 > 0 {
        parts.push(CN_UPPER_MONETARY_UNIT[num_index]);
      }
      get_zero = true;
    }
    number /= 10;
    num_index += 1;
  }

  let mut out = String::with_capacity(parts.len() * 3 + 6);
  if negative {
    out.push_str(CN_NEGATIVE);
  }
  out.extend(parts.iter().rev().copied());
  if scale == 0 {
    out.push_str(CN_FULL);
  }
  debug!(target: "commonx::numeral", %amount, %cents, glyphs = parts.len(), "rendered amount");
  Ok(out)
}

/// Integer overload of [`to_chinese_amount`].
pub fn to_chinese_amount_i64(amount: i64) -> Result<String> {
  to_chinese_amount(&Decimal::from(amount))
}

/// Lowercase Chinese reading of a number, e.g. `12` → "十二", `105` → "一百零五".
pub fn to_chinese_lower(n: u32) -> String {
  if n == 0 {
    return CN_LOWER_NUMBER[0].to_string();
  }
  let groups = [n / 100_000_000, n / 10_000 % 10_000, n % 10_000];
  let mut out = String::new();
  let mut pending_zero = false;
  for (i, &group) in groups.iter().enumerate() {
    if group == 0 {
      pending_zero = !out.is_empty();
      continue;
    }
    if !out.is_empty() && (pending_zero || group < 1000) {
      out.push_str(CN_LOWER_NUMBER[0]);
    }
    out.push_str(&section_lower(group));
    out.push_str(CN_LOWER_GROUP_UNIT[groups.len() - 1 - i]);
    pending_zero = false;
  }
  // 一十二 reads as 十二
  match out.strip_prefix("一十") {
    Some(rest) => format!("十{rest}"),
    None => out,
  }
}

fn section_lower(mut n: u32) -> String {
  let mut parts: Vec<&'static str> = Vec::new();
  let mut unit = 0;
  let mut zero = false;
  while n > 0 {
    let digit = (n % 10) as usize;
    if digit == 0 {
      if !parts.is_empty() && !zero {
        parts.push(CN_LOWER_NUMBER[0]);
        zero = true;
      }
    } else {
      parts.push(CN_LOWER_SECTION_UNIT[unit]);
      parts.push(CN_LOWER_NUMBER[digit]);
      zero = false;
    }
    n /= 10;
    unit += 1;
  }
  parts.iter().rev().copied().collect()
}

/// Number of pages needed for `total` items; 0 when `page_size` is 0.
pub fn calculate_pages(total: u64, page_size: u64) -> u64 {
  if page_size == 0 {
    return 0;
  }
  total / page_size + u64::from(total % page_size != 0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn render(s: &str) -> String {
    to_chinese_amount(&Decimal::from_str(s).unwrap()).unwrap()
  }

  #[test]
  fn zero_is_sentinel() {
    assert_eq!(render("0"), "零元整");
    assert_eq!(render("0.00"), "零元整");
    assert_eq!(render("-0.004"), "零元整");
    assert_eq!(to_chinese_amount_i64(0).unwrap(), CN_ZERO_FULL);
  }

  #[test]
  fn negative_whole_amount() {
    assert_eq!(to_chinese_amount_i64(-1234).unwrap(), "负壹仟贰佰叁拾肆元整");
    assert_eq!(render("-0.5"), "负伍角");
  }

  #[test]
  fn fractional_parts() {
    assert_eq!(render("100.5"), "壹佰元零伍角");
    assert_eq!(render("1234.56"), "壹仟贰佰叁拾肆元伍角陆分");
    assert_eq!(render("0.5"), "伍角");
    assert_eq!(render("0.05"), "伍分");
  }

  #[test]
  fn rounds_half_up_at_the_cent() {
    assert_eq!(render("1005.005"), "壹仟零伍元零壹分");
    assert_eq!(render("1.999"), "贰元整");
    assert_eq!(render("1.994"), "壹元玖角玖分");
  }

  #[test]
  fn zero_runs_and_group_markers() {
    assert_eq!(render("10"), "壹拾元整");
    assert_eq!(render("100000"), "壹拾万元整");
    assert_eq!(render("1000001"), "壹佰万零壹元整");
    assert_eq!(render("100000000"), "壹亿元整");
    assert_eq!(render("100010001"), "壹亿零壹万零壹元整");
    assert_eq!(render("10000000001"), "壹佰亿零壹元整");
    assert_eq!(render("12345678.9"), "壹仟贰佰叁拾肆万伍仟陆佰柒拾捌元玖角");
  }

  #[test]
  fn largest_supported_amount() {
    assert_eq!(
      render("9999999999999999.99"),
      "玖仟玖佰玖拾玖兆玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元玖角玖分"
    );
  }

  #[test]
  fn out_of_range_is_an_error() {
    let err = to_chinese_amount(&Decimal::from_str("10000000000000000").unwrap()).unwrap_err();
    assert!(matches!(err, Error::AmountOutOfRange { max_digits: 16, .. }));
    // rounding can push an amount over the edge
    assert!(to_chinese_amount(&Decimal::from_str("9999999999999999.995").unwrap()).is_err());
    assert!(to_chinese_amount(&Decimal::MAX).is_err());
  }

  #[test]
  fn nonzero_digit_glyphs_match_nonzero_digits() {
    for s in ["1234.56", "100.5", "100010001", "20.02", "9087654321.1"] {
      let rounded = Decimal::from_str(s).unwrap();
      let expected = s.chars().filter(|c| c.is_ascii_digit() && *c != '0').count();
      let text = render(s);
      let got = text.chars().filter(|c| "壹贰叁肆伍陆柒捌玖".contains(*c)).count();
      assert_eq!(got, expected, "{rounded} -> {text}");
    }
  }

  #[test]
  fn lowercase_numbers() {
    assert_eq!(to_chinese_lower(0), "零");
    assert_eq!(to_chinese_lower(7), "七");
    assert_eq!(to_chinese_lower(10), "十");
    assert_eq!(to_chinese_lower(12), "十二");
    assert_eq!(to_chinese_lower(20), "二十");
    assert_eq!(to_chinese_lower(105), "一百零五");
    assert_eq!(to_chinese_lower(1001), "一千零一");
    assert_eq!(to_chinese_lower(1100), "一千一百");
    assert_eq!(to_chinese_lower(10_010), "一万零一十");
    assert_eq!(to_chinese_lower(100_000_001), "一亿零一");
  }

  #[test]
  fn pages() {
    assert_eq!(calculate_pages(0, 10), 0);
    assert_eq!(calculate_pages(1, 10), 1);
    assert_eq!(calculate_pages(10, 10), 1);
    assert_eq!(calculate_pages(11, 10), 2);
    assert_eq!(calculate_pages(5, 0), 0);
  }
}
