use outcome_core::{propagate, Failure, Outcome, OutcomeInstrumentExt, Success};

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InputError {
  #[error("no numbers were given")]
  Empty,
  #[error("`{token}` at position {position} is not a number")]
  NotANumber { token: String, position: usize },
  #[error("{value} at position {position} exceeds the maximum magnitude of {max}")]
  OutOfRange { value: i64, position: usize, max: i64 },
  #[error("sum overflowed at position {position}")]
  Overflow { position: usize },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Summary {
  pub count: usize,
  pub sum: i64,
  pub min: i64,
  pub max: i64,
}
impl Summary {
  fn single(value: i64) -> Self {
    Self { count: 1, sum: value, min: value, max: value }
  }

  fn add(self, value: i64, position: usize) -> Outcome<Self, InputError> {
    match self.sum.checked_add(value) {
      Some(sum) => Success(Self {
        count: self.count + 1,
        sum,
        min: self.min.min(value),
        max: self.max.max(value),
      }).into(),
      None => Failure(InputError::Overflow { position }).into(),
    }
  }

  pub fn mean(&self) -> f64 {
    self.sum as f64 / self.count as f64
  }
}

/// Splits `raw` on commas and whitespace, dropping empty tokens.
pub fn tokenize(raw: &str) -> impl Iterator<Item=&str> {
  raw.split(|c: char| c == ',' || c.is_whitespace()).filter(|token| !token.is_empty())
}

pub fn parse_number(token: &str, position: usize, max: i64) -> Outcome<i64, InputError> {
  Outcome::from(token.parse::<i64>())
    .map_err(|_| InputError::NotANumber { token: token.to_owned(), position })
    .and_then(|value| {
      if value.unsigned_abs() > max.unsigned_abs() {
        Failure(InputError::OutOfRange { value, position, max }).into()
      } else {
        Success(value).into()
      }
    })
}

/// Parses every token of `raw` and aggregates the numbers, stopping at the first invalid one.
pub fn summarize(raw: &str, max: i64) -> Outcome<Summary, InputError> {
  let mut summary: Option<Summary> = None;
  for (position, token) in tokenize(raw).enumerate() {
    let value = propagate!(parse_number(token, position, max).trace_failure("parsing number"));
    summary = Some(match summary {
      None => Summary::single(value),
      Some(summary) => propagate!(summary.add(value, position)),
    });
    tracing::trace!(position, value, "accepted number");
  }
  match summary {
    Some(summary) => Success(summary).into(),
    None => Failure(InputError::Empty).into(),
  }
}
