//! Early return on failure.
//!
//! [`propagate!`](crate::propagate) evaluates an [`Outcome`](crate::Outcome) expression once. A success evaluates to
//! its payload; a failure makes the enclosing function return it immediately. The enclosing function's return type
//! must implement [`FromFailure`], which holds for `Outcome<_, F>` and `Result<_, F>` whenever the failure payload
//! converts into `F`. [`propagate_bare!`](crate::propagate_bare) instead returns the bare failure payload, for
//! functions that return the error type itself.

use crate::outcome::Outcome;
use crate::variant::Failure;

/// Return types that [`propagate!`](crate::propagate) can build from a failure payload of type `E`.
pub trait FromFailure<E> {
  fn from_failure(error: E) -> Self;
}

impl<T, E, F> FromFailure<E> for Outcome<T, F> where
  E: Into<F>
{
  #[inline]
  fn from_failure(error: E) -> Self { Failure(error).convert::<F>().into() }
}

impl<T, E, F> FromFailure<E> for Result<T, F> where
  E: Into<F>
{
  #[inline]
  fn from_failure(error: E) -> Self { Err(error.into()) }
}

/// Evaluates to the success payload of an [`Outcome`](crate::Outcome), or returns its failure from the enclosing
/// function.
///
/// ```
/// use outcome_core::{propagate, Failure, Outcome, Success};
///
/// fn parse(input: &str) -> Outcome<u32, String> {
///   match input.parse::<u32>() {
///     Ok(value) => Success(value).into(),
///     Err(_) => Failure(format!("not a number: {input}")).into(),
///   }
/// }
///
/// fn sum(a: &str, b: &str) -> Outcome<u32, String> {
///   let a = propagate!(parse(a));
///   let b = propagate!(parse(b));
///   Success(a + b).into()
/// }
///
/// assert_eq!(sum("1", "2").unwrap(), 3);
/// assert_eq!(sum("1", "two").unwrap_failure(), "not a number: two");
/// ```
#[macro_export]
macro_rules! propagate {
  ($outcome:expr $(,)?) => {
    match $crate::Outcome::into_result($outcome) {
      ::core::result::Result::Ok(value) => value,
      ::core::result::Result::Err(error) => return $crate::propagate::FromFailure::from_failure(error),
    }
  };
}

/// Like [`propagate!`], but returns the bare failure payload (converted with `From`) from the enclosing function.
///
/// ```
/// use outcome_core::{propagate_bare, Failure, Outcome, Success};
///
/// fn first_error(steps: Vec<Outcome<(), String>>) -> String {
///   for step in steps {
///     propagate_bare!(step);
///   }
///   String::from("no error")
/// }
///
/// assert_eq!(first_error(vec![Success(()).into(), Failure(String::from("second")).into()]), "second");
/// assert_eq!(first_error(vec![]), "no error");
/// ```
#[macro_export]
macro_rules! propagate_bare {
  ($outcome:expr $(,)?) => {
    match $crate::Outcome::into_result($outcome) {
      ::core::result::Result::Ok(value) => value,
      ::core::result::Result::Err(error) => return ::core::convert::From::from(error),
    }
  };
}

impl<T, E> From<Failure<E>> for Result<T, E> {
  #[inline]
  fn from(Failure(error): Failure<E>) -> Self { Err(error) }
}
