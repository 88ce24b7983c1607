use std::any::type_name;

/// Misuse of an [`Outcome`](crate::Outcome) accessor: asking for the payload of the variant that is not held.
///
/// These are programmer bugs, not domain errors. They are never returned as data; [`violated`] renders them into a
/// panic message.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ContractViolation {
  #[error("called `Outcome::unwrap()` on a failure")]
  UnwrapOnFailure,
  #[error("called `Outcome::unwrap_failure()` on a success")]
  UnwrapFailureOnSuccess,
  #[error("{message}")]
  Expectation { message: String, expected_success: bool },
}

impl ContractViolation {
  /// Whether the caller expected the outcome to be a success.
  pub fn expected_success(&self) -> bool {
    match self {
      ContractViolation::UnwrapOnFailure => true,
      ContractViolation::UnwrapFailureOnSuccess => false,
      ContractViolation::Expectation { expected_success, .. } => *expected_success,
    }
  }
}

/// Raises `violation` as a panic at the caller's location, logging it first when the `tracing` feature is enabled.
#[cold]
#[track_caller]
pub(crate) fn violated<T, E>(violation: ContractViolation) -> ! {
  let success_type = type_name::<T>();
  let failure_type = type_name::<E>();
  #[cfg(feature = "tracing")] {
    let location = std::panic::Location::caller();
    tracing::error!(
      %violation,
      expected_success = violation.expected_success(),
      success_type,
      failure_type,
      %location,
      "outcome contract violated"
    );
  }
  panic!("{} (Outcome<{}, {}>)", violation, success_type, failure_type)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(ContractViolation::UnwrapOnFailure.to_string(), "called `Outcome::unwrap()` on a failure");
    assert_eq!(ContractViolation::UnwrapFailureOnSuccess.to_string(), "called `Outcome::unwrap_failure()` on a success");
    let expectation = ContractViolation::Expectation { message: "config must load".into(), expected_success: true };
    assert_eq!(expectation.to_string(), "config must load");
    assert!(expectation.expected_success());
    assert!(!ContractViolation::UnwrapFailureOnSuccess.expected_success());
  }

  #[test]
  #[should_panic(expected = "called `Outcome::unwrap()` on a failure (Outcome<u32, &str>)")]
  fn violated_panics_with_types() {
    violated::<u32, &str>(ContractViolation::UnwrapOnFailure);
  }
}
