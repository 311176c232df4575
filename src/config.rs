//! Loading settings from TOML.
//!
//! Schema:
//! ```toml
//! [birthday]
//! min_year = 1930
//! # max_year = 2020   # defaults to the current year
//!
//! [output]
//! pretty = true
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::date::calendar::{BirthdayRule, MIN_BIRTH_YEAR};
use crate::error::{Error, Result};

pub const CONFIG_PATH_ENV: &str = "COMMONX_CONFIG_PATH";

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct Settings {
  #[serde(default)]
  pub birthday: BirthdaySettings,
  #[serde(default)]
  pub output: OutputSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BirthdaySettings {
  #[serde(default = "default_min_year")]
  pub min_year: i32,
  #[serde(default)]
  pub max_year: Option<i32>,
}

impl Default for BirthdaySettings {
  fn default() -> Self {
    Self { min_year: MIN_BIRTH_YEAR, max_year: None }
  }
}

fn default_min_year() -> i32 {
  MIN_BIRTH_YEAR
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OutputSettings {
  #[serde(default = "default_pretty")]
  pub pretty: bool,
}

impl Default for OutputSettings {
  fn default() -> Self {
    Self { pretty: true }
  }
}

fn default_pretty() -> bool {
  true
}

impl Settings {
  pub fn from_toml_str(s: &str, origin: &str) -> Result<Settings> {
    toml::from_str(s).map_err(|source| Error::ConfigToml { path: origin.to_string(), source })
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let s = std::fs::read_to_string(path)
      .map_err(|source| Error::ConfigIo { path: display.clone(), source })?;
    Self::from_toml_str(&s, &display)
  }

  pub fn birthday_rule(&self) -> BirthdayRule {
    BirthdayRule { min_year: self.birthday.min_year, max_year: self.birthday.max_year }
  }
}

/// Load settings from `COMMONX_CONFIG_PATH`. Unset means defaults; on any IO/parse
/// error the failure is logged and defaults are used.
pub fn load_settings_from_env() -> Settings {
  let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
    return Settings::default();
  };
  match Settings::from_path(&path) {
    Ok(settings) => {
      info!(target: "commonx", %path, "Loaded settings (TOML)");
      settings
    }
    Err(e) => {
      error!(target: "commonx", %path, error = %e, "Failed to load settings; using defaults");
      Settings::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_gives_defaults() {
    let s = Settings::from_toml_str("", "inline").unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.birthday_rule(), BirthdayRule::default());
    assert!(s.output.pretty);
  }

  #[test]
  fn overrides_are_read() {
    let s = Settings::from_toml_str(
      "[birthday]\nmin_year = 1950\nmax_year = 2000\n\n[output]\npretty = false\n",
      "inline",
    )
    .unwrap();
    assert_eq!(s.birthday_rule(), BirthdayRule { min_year: 1950, max_year: Some(2000) });
    assert!(!s.output.pretty);
  }

  #[test]
  fn bad_toml_is_a_typed_error() {
    let err = Settings::from_toml_str("[birthday]\nmin_year = \"old\"", "inline").unwrap_err();
    assert!(matches!(err, Error::ConfigToml { .. }));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = Settings::from_path("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, Error::ConfigIo { .. }));
  }
}
