//! Transforming and chaining combinators.
//!
//! Type compatibility between chained outcomes is part of each signature: [`Outcome::and`] and
//! [`Outcome::and_then`] only accept outcomes with the *same* failure type, [`Outcome::or`] and
//! [`Outcome::or_else`] only accept outcomes with the *same* success type. A mismatched chain does not compile.

use crate::outcome::{Outcome, Variant};
use crate::variant::{Failure, Success};

impl<T, E> Outcome<T, E> {
  /// Transforms the success payload with `f`; a failure passes through and `f` is not called.
  ///
  /// ```
  /// use outcome_core::{Outcome, Success};
  ///
  /// let outcome: Outcome<i32, ()> = Success(2).into();
  /// assert_eq!(outcome.map(|x| x + 1).unwrap(), 3);
  /// ```
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self.variant {
      Variant::Success(success) => success.map(f).into(),
      Variant::Failure(failure) => failure.into(),
    }
  }

  /// Transforms the failure payload with `f`; a success passes through and `f` is not called.
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self.variant {
      Variant::Success(success) => success.into(),
      Variant::Failure(failure) => failure.map(f).into(),
    }
  }

  /// Applies `f` to the success payload, or returns `default` for a failure.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self.variant {
      Variant::Success(Success(value)) => f(value),
      Variant::Failure(_) => default,
    }
  }

  /// Folds both variants into a `U`.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    match self.variant {
      Variant::Success(Success(value)) => f(value),
      Variant::Failure(Failure(error)) => default(error),
    }
  }

  /// Returns `other` if this is a success, discarding this payload; otherwise returns this failure.
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self.variant {
      Variant::Success(_) => other,
      Variant::Failure(failure) => failure.into(),
    }
  }

  /// Chains an operation that may fail with the same failure type. A failure short-circuits without calling `f`.
  ///
  /// ```
  /// use outcome_core::{Failure, Outcome, Success};
  ///
  /// fn half(x: u32) -> Outcome<u32, &'static str> {
  ///   if x % 2 == 0 { Success(x / 2).into() } else { Failure("odd").into() }
  /// }
  ///
  /// assert_eq!(Success(8).outcome::<&str>().and_then(half).and_then(half).unwrap(), 2);
  /// assert_eq!(Success(6).outcome::<&str>().and_then(half).and_then(half).unwrap_failure(), "odd");
  /// ```
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self.variant {
      Variant::Success(Success(value)) => f(value),
      Variant::Failure(failure) => failure.into(),
    }
  }

  /// Returns this success if it is one; otherwise returns `other`, discarding this failure payload.
  #[inline]
  pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
    match self.variant {
      Variant::Success(success) => success.into(),
      Variant::Failure(_) => other,
    }
  }

  /// Recovers from a failure with an operation producing the same success type. A success short-circuits without
  /// calling `f`.
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self.variant {
      Variant::Success(success) => success.into(),
      Variant::Failure(Failure(error)) => f(error),
    }
  }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
  /// Removes one level of nesting.
  #[inline]
  pub fn flatten(self) -> Outcome<T, E> {
    self.and_then(|inner| inner)
  }
}

impl<T, E> Outcome<Option<T>, E> {
  /// `Success(None)` becomes `None`; `Success(Some(v))` becomes `Some(Success(v))`; a failure becomes
  /// `Some(Failure(e))`.
  #[inline]
  pub fn transpose(self) -> Option<Outcome<T, E>> {
    match self.variant {
      Variant::Success(Success(Some(value))) => Some(Success(value).into()),
      Variant::Success(Success(None)) => None,
      Variant::Failure(failure) => Some(failure.into()),
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  type Out<T> = Outcome<T, &'static str>;

  fn success<T>(value: T) -> Out<T> { Success(value).into() }

  fn failure<T>(error: &'static str) -> Out<T> { Failure(error).into() }

  #[test]
  fn map_transforms_success() {
    assert_eq!(success(2).map(|x| x + 1), success(3));
    assert_eq!(success(2).map(|x| x.to_string()).unwrap(), "2");
  }

  #[test]
  fn map_skips_failure() {
    let calls = Cell::new(0);
    let outcome = failure::<i32>("e").map(|x| {
      calls.set(calls.get() + 1);
      x + 1
    });
    assert_eq!(outcome, failure("e"));
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn map_err_is_symmetric() {
    let calls = Cell::new(0);
    let outcome = success(1).map_err(|e: &str| {
      calls.set(calls.get() + 1);
      e.len()
    });
    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(failure::<i32>("four").map_err(str::len).unwrap_failure(), 4);
  }

  #[test]
  fn map_or_and_map_or_else() {
    assert_eq!(success(2).map_or(0, |x| x * 2), 4);
    assert_eq!(failure::<i32>("e").map_or(0, |x| x * 2), 0);
    assert_eq!(success(2).map_or_else(|e| e.len() as i32, |x| x * 2), 4);
    assert_eq!(failure::<i32>("abc").map_or_else(|e| e.len() as i32, |x| x * 2), 3);
  }

  #[test]
  fn and_takes_other_on_success() {
    assert_eq!(success(1).and(success("two")), success("two"));
    assert_eq!(success(1).and(failure::<&str>("late")), failure("late"));
    assert_eq!(failure::<i32>("early").and(success("two")), failure("early"));
    assert_eq!(failure::<i32>("early").and(failure::<&str>("late")), failure("early"));
  }

  #[test]
  fn and_then_chains_success() {
    assert_eq!(success(1).and_then(|x| success(x + 1)), success(2));
    assert_eq!(success(1).and_then(|_| failure::<i32>("inner")), failure("inner"));
  }

  #[test]
  fn and_then_short_circuits_failure() {
    let calls = Cell::new(0);
    let outcome = failure::<i32>("e").and_then(|x| {
      calls.set(calls.get() + 1);
      success(x + 1)
    });
    assert_eq!(outcome, failure("e"));
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn or_takes_other_on_failure() {
    let other: Outcome<i32, usize> = Success(9).into();
    assert_eq!(failure::<i32>("e").or(other).unwrap(), 9);
    let other: Outcome<i32, usize> = Failure(3).into();
    assert_eq!(success(1).or(other).unwrap(), 1);
    let other: Outcome<i32, usize> = Failure(3).into();
    assert_eq!(failure::<i32>("e").or(other).unwrap_failure(), 3);
  }

  #[test]
  fn or_else_recovers_failure() {
    let recovered = failure::<usize>("four").or_else(|e| Success(e.len()).outcome::<()>());
    assert_eq!(recovered.unwrap(), 4);

    let calls = Cell::new(0);
    let untouched = success(1usize).or_else(|_| {
      calls.set(calls.get() + 1);
      Failure(()).outcome::<usize>()
    });
    assert_eq!(untouched.unwrap(), 1);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn flatten_removes_one_level() {
    let nested: Out<Out<i32>> = Success(success(1)).into();
    assert_eq!(nested.flatten(), success(1));
    let nested: Out<Out<i32>> = Success(failure("inner")).into();
    assert_eq!(nested.flatten(), failure("inner"));
    let nested: Out<Out<i32>> = Failure("outer").into();
    assert_eq!(nested.flatten(), failure("outer"));
  }

  #[test]
  fn transpose_swaps_option() {
    assert_eq!(success(Some(1)).transpose(), Some(success(1)));
    assert_eq!(success(None::<i32>).transpose(), None);
    assert_eq!(failure::<Option<i32>>("e").transpose(), Some(failure("e")));
  }

  #[test]
  fn pipeline_produces_fresh_containers() {
    let parsed = success("42")
      .and_then(|s| s.parse::<i64>().map_or_else(|_| failure("not a number"), success))
      .map(|n| n * 2)
      .map_err(|e| e.to_uppercase());
    assert_eq!(parsed.unwrap(), 84);

    let parsed = success("forty-two")
      .and_then(|s| s.parse::<i64>().map_or_else(|_| failure("not a number"), success))
      .map(|n| n * 2)
      .map_err(|e| e.to_uppercase());
    assert_eq!(parsed.unwrap_failure(), "NOT A NUMBER");
  }
}
