//! Command parsing and the handlers behind each command.
//!
//! Handlers are thin: they call into the library and shape the result for printing.

use std::str::FromStr;

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use commonx::config::Settings;
use commonx::date::{self, calculate_age};
use commonx::{idcard, numeral};

use crate::protocol::*;

pub const USAGE: &str = "usage: commonx <command> <input>

commands:
  idcard <id>          validate a 15- or 18-digit resident ID
  date <raw>           detect the date pattern of <raw> and parse it
  money <amount>       render <amount> as uppercase Chinese currency
  birthday <raw>       check that <raw> is a plausible birth date
  age <birth> [on]     full years from <birth> to [on] (default today)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
  IdCard(String),
  Date(String),
  Money(String),
  Birthday(String),
  Age { birth: String, on: Option<String> },
}

impl Command {
  /// Parse `args` without the program name. `None` means print usage.
  pub fn parse(args: &[String]) -> Option<Command> {
    let (name, rest) = args.split_first()?;
    match (name.as_str(), rest) {
      ("idcard", [id]) => Some(Command::IdCard(id.clone())),
      ("date", [raw]) => Some(Command::Date(raw.clone())),
      ("money", [amount]) => Some(Command::Money(amount.clone())),
      ("birthday", [raw]) => Some(Command::Birthday(raw.clone())),
      ("age", [birth]) => Some(Command::Age { birth: birth.clone(), on: None }),
      ("age", [birth, on]) => Some(Command::Age { birth: birth.clone(), on: Some(on.clone()) }),
      _ => None,
    }
  }
}

pub fn run(cmd: &Command, settings: &Settings) -> Output {
  match cmd {
    Command::IdCard(id) => Output::IdCard(check_id_card(id, settings)),
    Command::Date(raw) => Output::Date(detect_date(raw)),
    Command::Money(amount) => render_money(amount),
    Command::Birthday(raw) => Output::Birthday(BirthdayOut {
      raw: raw.clone(),
      birthday: date::is_birthday_str_with(raw, &settings.birthday_rule()),
    }),
    Command::Age { birth, on } => Output::Age(age_of(birth, on.as_deref())),
  }
}

#[instrument(level = "info", skip(id, settings), fields(id_len = id.len()))]
pub fn check_id_card(id: &str, settings: &Settings) -> IdCardOut {
  let valid = idcard::is_id_card_with(id, &settings.birthday_rule());
  info!(target: "commonx", %valid, "ID checked");
  IdCardOut {
    id: id.to_string(),
    valid,
    length: id.chars().count(),
    province: idcard::province_of(id),
  }
}

#[instrument(level = "info", skip(raw), fields(raw_len = raw.len()))]
pub fn detect_date(raw: &str) -> DateOut {
  let candidates = date::resolve::candidates(raw);
  let pattern = date::resolve::pick_accurate(&candidates).map(|c| c.pattern);
  let parsed = pattern.and_then(|p| date::parse_with(raw, p).ok());
  info!(target: "commonx", candidates = candidates.len(), pattern = ?pattern.map(|p| p.template()), "date detected");
  DateOut {
    raw: raw.to_string(),
    pattern,
    template: pattern.map(|p| p.template()),
    parsed: parsed.and_then(|p| match p.offset {
      Some(offset) => offset.from_local_datetime(&p.datetime).single().map(|d| d.to_rfc3339()),
      None => Some(p.datetime.format("%Y-%m-%dT%H:%M:%S").to_string()),
    }),
    timestamp_millis: parsed.map(|p| p.timestamp_millis()),
    candidates,
  }
}

#[instrument(level = "info")]
pub fn render_money(amount: &str) -> Output {
  let value = match Decimal::from_str(amount.trim()) {
    Ok(v) => v,
    Err(e) => {
      warn!(target: "commonx", error = %e, "not a decimal amount");
      return Output::Error(ErrorOut { error: format!("'{amount}' is not a decimal amount: {e}") });
    }
  };
  match numeral::to_chinese_amount(&value) {
    Ok(chinese) => Output::Money(MoneyOut { amount: value.to_string(), chinese }),
    Err(e) => {
      warn!(target: "commonx", error = %e, "amount not renderable");
      Output::Error(ErrorOut { error: e.to_string() })
    }
  }
}

#[instrument(level = "info")]
pub fn age_of(birth: &str, on: Option<&str>) -> AgeOut {
  let on_date = match on {
    Some(raw) => date::parse_auto(raw).map(|p| p.date()),
    None => Some(Local::now().date_naive()),
  };
  let age = date::parse_auto(birth)
    .zip(on_date)
    .map(|(b, o)| calculate_age(b.date(), o));
  AgeOut {
    birth: birth.to_string(),
    on: on_date.map_or_else(|| on.unwrap_or_default().to_string(), |d| d.to_string()),
    age,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn parses_commands() {
    assert_eq!(
      Command::parse(&args(&["idcard", "11010519491231002X"])),
      Some(Command::IdCard("11010519491231002X".into()))
    );
    assert_eq!(
      Command::parse(&args(&["age", "1990-01-01", "2020-01-01"])),
      Some(Command::Age { birth: "1990-01-01".into(), on: Some("2020-01-01".into()) })
    );
    assert_eq!(Command::parse(&args(&[])), None);
    assert_eq!(Command::parse(&args(&["idcard"])), None);
    assert_eq!(Command::parse(&args(&["frobnicate", "x"])), None);
  }

  #[test]
  fn id_card_output() {
    let out = check_id_card("11010519491231002X", &Settings::default());
    assert!(out.valid);
    assert_eq!(out.length, 18);
    assert_eq!(out.province, Some("北京"));
  }

  #[test]
  fn date_output() {
    let out = detect_date("2018-07-10 12:30:00");
    assert_eq!(out.template, Some("yyyy-MM-dd HH:mm:ss"));
    assert_eq!(out.parsed.as_deref(), Some("2018-07-10T12:30:00"));
    assert_eq!(out.timestamp_millis, Some(1_531_225_800_000));

    let out = detect_date("Tue Jul 10 12:30:00 +0800 2018");
    assert_eq!(out.parsed.as_deref(), Some("2018-07-10T12:30:00+08:00"));

    let out = detect_date("nope");
    assert_eq!(out.pattern, None);
    assert!(out.candidates.is_empty());
  }

  #[test]
  fn money_output() {
    match render_money("100.5") {
      Output::Money(m) => assert_eq!(m.chinese, "壹佰元零伍角"),
      other => panic!("unexpected {other:?}"),
    }
    assert!(render_money("abc").is_error());
    assert!(render_money("1e30").is_error());
  }

  #[test]
  fn age_output() {
    let out = age_of("1990-05-20", Some("2020-05-19"));
    assert_eq!(out.age, Some(29));
    assert_eq!(out.on, "2020-05-19");
    assert_eq!(age_of("whenever", Some("2020-05-19")).age, None);
  }

  #[test]
  fn json_shape_is_flat() {
    let out = run(&Command::Birthday("1988-01-01".into()), &Settings::default());
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json, serde_json::json!({ "raw": "1988-01-01", "birthday": true }));
  }
}
