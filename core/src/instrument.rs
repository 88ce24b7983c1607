use std::fmt::Display;

use crate::outcome::Outcome;

/// Logs failures that flow through a pipeline without consuming them.
pub trait OutcomeInstrumentExt {
  /// Emits a `debug` event with `context` if this is a failure; passes `self` through.
  fn trace_failure(self, context: &str) -> Self;
  /// Emits a `warn` event with `context` if this is a failure; passes `self` through.
  fn warn_failure(self, context: &str) -> Self;
}

impl<T, E: Display> OutcomeInstrumentExt for Outcome<T, E> {
  #[inline]
  fn trace_failure(self, context: &str) -> Self {
    self.inspect_failure(|cause| tracing::debug!(%cause, context, "failure"))
  }

  #[inline]
  fn warn_failure(self, context: &str) -> Self {
    self.inspect_failure(|cause| tracing::warn!(%cause, context, "failure"))
  }
}
