use std::fmt::{self, Debug, Formatter};

use crate::variant::{Failure, Success};
use crate::violation::{violated, ContractViolation};

/// Result of an operation that either succeeded with a `T` or failed with an `E`.
///
/// Holds exactly one of [`Success<T>`] or [`Failure<E>`], fixed at construction. There is no way to build an
/// `Outcome` other than from one of those wrappers:
///
/// ```
/// use outcome_core::{Failure, Outcome, Success};
///
/// let parsed: Outcome<u32, String> = Success(3).into();
/// let missing: Outcome<u32, String> = Failure(String::from("missing")).into();
/// assert!(parsed.is_success());
/// assert!(missing.is_failure());
/// ```
///
/// `Outcome` is move-only: it implements neither `Clone` nor `Copy`, and every operation that extracts or transforms
/// the payload takes `self` by value, so a container cannot be consumed twice.
///
/// Construction through `From` is exact: `Success<T>` builds an `Outcome<T, _>`. A payload of another type is
/// converted explicitly with [`Success::convert`] or [`Failure::convert`]:
///
/// ```
/// use outcome_core::{Failure, Outcome, Success};
///
/// let name: Outcome<String, String> = Success("abc").convert::<String>().into();
/// let code: Outcome<String, i64> = Failure(7i32).convert::<i64>().into();
/// assert_eq!(name.unwrap(), "abc");
/// assert_eq!(code.unwrap_failure(), 7);
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub struct Outcome<T, E> {
  pub(crate) variant: Variant<T, E>,
}

pub(crate) enum Variant<T, E> {
  Success(Success<T>),
  Failure(Failure<E>),
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
  #[inline]
  fn from(success: Success<T>) -> Self {
    Self { variant: Variant::Success(success) }
  }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
  #[inline]
  fn from(failure: Failure<E>) -> Self {
    Self { variant: Variant::Failure(failure) }
  }
}

/// `Ok` becomes a success and `Err` a failure.
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Success(value).into(),
      Err(error) => Failure(error).into(),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.into_result() }
}


// Querying

impl<T, E> Outcome<T, E> {
  #[inline]
  pub fn is_success(&self) -> bool {
    matches!(self.variant, Variant::Success(_))
  }
  #[inline]
  pub fn is_failure(&self) -> bool {
    !self.is_success()
  }

  /// Returns `true` if this is a success and `f` holds for its payload. Consumes `self`.
  #[inline]
  pub fn is_success_and(self, f: impl FnOnce(T) -> bool) -> bool {
    match self.variant {
      Variant::Success(Success(value)) => f(value),
      Variant::Failure(_) => false,
    }
  }
  /// Returns `true` if this is a failure and `f` holds for its payload. Consumes `self`.
  #[inline]
  pub fn is_failure_and(self, f: impl FnOnce(E) -> bool) -> bool {
    match self.variant {
      Variant::Success(_) => false,
      Variant::Failure(Failure(error)) => f(error),
    }
  }

  /// Borrows the payload, producing a new `Outcome` of references and leaving `self` in place.
  #[inline]
  pub fn as_ref(&self) -> Outcome<&T, &E> {
    match &self.variant {
      Variant::Success(success) => success.as_ref().into(),
      Variant::Failure(failure) => failure.as_ref().into(),
    }
  }
  #[inline]
  pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
    match &mut self.variant {
      Variant::Success(Success(value)) => Success(value).into(),
      Variant::Failure(Failure(error)) => Failure(error).into(),
    }
  }
}


// Extracting

impl<T, E> Outcome<T, E> {
  /// Moves the success payload out, or returns `None` for a failure, discarding the error.
  #[inline]
  pub fn success(self) -> Option<T> {
    match self.variant {
      Variant::Success(Success(value)) => Some(value),
      Variant::Failure(_) => None,
    }
  }
  /// Moves the failure payload out, or returns `None` for a success, discarding the value.
  #[inline]
  pub fn failure(self) -> Option<E> {
    match self.variant {
      Variant::Success(_) => None,
      Variant::Failure(Failure(error)) => Some(error),
    }
  }

  /// Converts into the standard library's `Result`.
  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self.variant {
      Variant::Success(Success(value)) => Ok(value),
      Variant::Failure(Failure(error)) => Err(error),
    }
  }

  /// Moves the success payload out.
  ///
  /// # Panics
  ///
  /// Panics with [`ContractViolation::UnwrapOnFailure`] if this is a failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.variant {
      Variant::Success(Success(value)) => value,
      Variant::Failure(_) => violated::<T, E>(ContractViolation::UnwrapOnFailure),
    }
  }
  /// Moves the failure payload out.
  ///
  /// # Panics
  ///
  /// Panics with [`ContractViolation::UnwrapFailureOnSuccess`] if this is a success.
  #[inline]
  #[track_caller]
  pub fn unwrap_failure(self) -> E {
    match self.variant {
      Variant::Success(_) => violated::<T, E>(ContractViolation::UnwrapFailureOnSuccess),
      Variant::Failure(Failure(error)) => error,
    }
  }

  /// Moves the success payload out.
  ///
  /// # Panics
  ///
  /// Panics with `message` if this is a failure.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self.variant {
      Variant::Success(Success(value)) => value,
      Variant::Failure(_) => violated::<T, E>(ContractViolation::Expectation {
        message: message.to_owned(),
        expected_success: true,
      }),
    }
  }
  /// Moves the failure payload out.
  ///
  /// # Panics
  ///
  /// Panics with `message` if this is a success.
  #[inline]
  #[track_caller]
  pub fn expect_failure(self, message: &str) -> E {
    match self.variant {
      Variant::Success(_) => violated::<T, E>(ContractViolation::Expectation {
        message: message.to_owned(),
        expected_success: false,
      }),
      Variant::Failure(Failure(error)) => error,
    }
  }

  /// Moves the success payload out, or returns `default` for a failure.
  ///
  /// `default` is evaluated eagerly; use [`unwrap_or_else`](Self::unwrap_or_else) for a computed fallback.
  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self.variant {
      Variant::Success(Success(value)) => value,
      Variant::Failure(_) => default,
    }
  }
  /// Moves the success payload out, or computes a fallback from the failure payload.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self.variant {
      Variant::Success(Success(value)) => value,
      Variant::Failure(Failure(error)) => f(error),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    match self.variant {
      Variant::Success(Success(value)) => value,
      Variant::Failure(_) => T::default(),
    }
  }

  /// Calls `f` with a reference to the success payload, if any, and passes `self` through.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Variant::Success(Success(value)) = &self.variant {
      f(value);
    }
    self
  }
  /// Calls `f` with a reference to the failure payload, if any, and passes `self` through.
  #[inline]
  pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Self {
    if let Variant::Failure(Failure(error)) = &self.variant {
      f(error);
    }
    self
  }
}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.variant {
      Variant::Success(success) => success.fmt(f),
      Variant::Failure(failure) => failure.fmt(f),
    }
  }
}
