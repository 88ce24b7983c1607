use std::path::PathBuf;

use outcome_core::app::env::{self, EnvVarError};
use outcome_core::{propagate, Failure, Outcome, Success};

pub const DEFAULT_MAX_MAGNITUDE: i64 = 1_000_000;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
  #[error(transparent)]
  Env(#[from] EnvVarError),
  #[error("`OUTCOME_DEMO_MAX` must be positive, got {0}")]
  NonPositiveMax(i64),
}

/// Demo settings read from the environment (optionally seeded from `.env`).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
  /// Numbers to summarize when none are given on the command line.
  pub input: Option<String>,
  pub max_magnitude: i64,
  pub log_file: Option<PathBuf>,
}

impl Config {
  pub fn from_env() -> Outcome<Self, ConfigError> {
    let input = propagate!(env::var_opt("OUTCOME_DEMO_INPUT"));
    let max_magnitude = propagate!(
      env::parse_var_or("OUTCOME_DEMO_MAX", DEFAULT_MAX_MAGNITUDE)
        .map_err(ConfigError::from)
        .and_then(validate_max)
    );
    let log_file = propagate!(env::var_opt("OUTCOME_DEMO_LOG_FILE")).map(PathBuf::from);
    Success(Self { input, max_magnitude, log_file }).into()
  }

  /// Arguments take precedence over `OUTCOME_DEMO_INPUT`.
  pub fn input_or_args(&self, args: impl IntoIterator<Item=String>) -> Option<String> {
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() {
      self.input.clone()
    } else {
      Some(args.join(" "))
    }
  }
}

fn validate_max(max: i64) -> Outcome<i64, ConfigError> {
  if max > 0 {
    Success(max).into()
  } else {
    Failure(ConfigError::NonPositiveMax(max)).into()
  }
}
