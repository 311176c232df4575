//! commonx · command-line front end
//!
//! Prints one JSON object per invocation on stdout.
//!
//! Important env variables:
//!   COMMONX_CONFIG_PATH : path to TOML settings (birthday bounds, output style)
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod logic;
mod protocol;
mod telemetry;

use std::process::ExitCode;

use tracing::{debug, instrument};

use crate::logic::{run, Command, USAGE};

#[instrument(level = "info", skip_all)]
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let settings = commonx::config::load_settings_from_env();
  debug!(target: "commonx", ?settings, "settings in effect");

  let args: Vec<String> = std::env::args().skip(1).collect();
  let Some(cmd) = Command::parse(&args) else {
    eprintln!("{USAGE}");
    return Ok(ExitCode::from(2));
  };

  let out = run(&cmd, &settings);
  let json = if settings.output.pretty {
    serde_json::to_string_pretty(&out)?
  } else {
    serde_json::to_string(&out)?
  };
  println!("{json}");

  Ok(if out.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
