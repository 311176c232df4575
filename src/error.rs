//! Crate error type.
//!
//! Validators and the date resolver are total and never produce these; only the
//! money renderer, explicit single-template parsing, and config loading do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The rounded amount needs more digit slots than the unit table has.
  #[error("amount {amount} is out of range: at most {max_digits} integer digits are supported")]
  AmountOutOfRange { amount: String, max_digits: usize },

  #[error("no date format pattern with template '{0}'")]
  UnknownPattern(String),

  #[error("'{input}' does not match '{template}': {reason}")]
  InvalidDate {
    input: String,
    template: &'static str,
    reason: String,
  },

  #[error("failed to read config {path}: {source}")]
  ConfigIo {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config {path}: {source}")]
  ConfigToml {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
