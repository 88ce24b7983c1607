use std::env::{self, VarError};
use std::path::PathBuf;
use std::str::FromStr;

use crate::{Failure, Outcome, Success};

/// Loads `.env` from the working directory (or its ancestors) into the process environment. A missing file is not an
/// error; variables already set in the environment take precedence.
///
/// Any other problem, such as a malformed line, is returned so the caller can log it once tracing is set up.
pub fn load_dotenv_into_env() -> Outcome<(), dotenvy::Error> {
  ignore_not_found(dotenvy::dotenv())
}

fn ignore_not_found(result: Result<PathBuf, dotenvy::Error>) -> Outcome<(), dotenvy::Error> {
  match result {
    Ok(_) => Success(()).into(),
    Err(e) if e.not_found() => Success(()).into(),
    Err(e) => Failure(e).into(),
  }
}

/// Problem reading a configuration variable from the environment.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum EnvVarError {
  #[error("environment variable `{name}` is not valid unicode")]
  NotUnicode { name: String },
  #[error("environment variable `{name}` has invalid value `{value}`: {cause}")]
  Invalid { name: String, value: String, cause: String },
}

/// Reads `name` from the environment, returning `None` in a success if it is not set.
pub fn var_opt(name: &str) -> Outcome<Option<String>, EnvVarError> {
  match env::var(name) {
    Ok(value) => Success(Some(value)).into(),
    Err(VarError::NotPresent) => Success(None).into(),
    Err(VarError::NotUnicode(_)) => Failure(EnvVarError::NotUnicode { name: name.to_owned() }).into(),
  }
}

/// Reads and parses `name` from the environment, falling back to `default` if it is not set.
pub fn parse_var_or<T>(name: &str, default: T) -> Outcome<T, EnvVarError> where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  let value = match crate::propagate!(var_opt(name)) {
    Some(value) => value,
    None => return Success(default).into(),
  };
  value.parse::<T>().map_err(|cause| EnvVarError::Invalid {
    name: name.to_owned(),
    value,
    cause: cause.to_string(),
  }).into()
}
