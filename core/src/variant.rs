//! Tagged wrappers that originate an [`Outcome`](crate::Outcome).
//!
//! `Success(value)` and `Failure(error)` are plain tuple structs: calling them infers the payload type from the
//! argument. An [`Outcome`](crate::Outcome) can only be built from one of them.

/// Capability tag shared by [`Success`] and [`Failure`]. Sealed: no other type can mark itself as a variant.
pub trait Variant: sealed::Sealed {
  /// `true` for [`Success`], `false` for [`Failure`].
  const IS_SUCCESS: bool;
  /// Payload carried by this variant.
  type Payload;

  fn into_payload(self) -> Self::Payload;
}

mod sealed {
  pub trait Sealed {}

  impl<T> Sealed for super::Success<T> {}

  impl<E> Sealed for super::Failure<E> {}
}


/// Marks a value as the success payload of an [`Outcome`](crate::Outcome).
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[must_use = "a `Success` does nothing until it is turned into an `Outcome`"]
pub struct Success<T>(pub T);

impl<T> Success<T> {
  #[inline]
  pub fn into_inner(self) -> T { self.0 }

  /// Turns this wrapper into an [`Outcome`](crate::Outcome) whose failure type is given explicitly, e.g.
  /// `Success(1).outcome::<String>()`.
  #[inline]
  pub fn outcome<E>(self) -> crate::Outcome<T, E> { self.into() }

  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> { Success(f(self.0)) }

  /// Converts the payload into `U`, e.g. to build an `Outcome<String, _>` from a `Success<&str>`.
  #[inline]
  pub fn convert<U>(self) -> Success<U> where
    T: Into<U>
  {
    Success(self.0.into())
  }

  #[inline]
  pub fn as_ref(&self) -> Success<&T> { Success(&self.0) }
}

impl<T> Variant for Success<T> {
  const IS_SUCCESS: bool = true;
  type Payload = T;

  #[inline]
  fn into_payload(self) -> T { self.0 }
}


/// Marks a value as the failure payload of an [`Outcome`](crate::Outcome).
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[must_use = "a `Failure` does nothing until it is turned into an `Outcome`"]
pub struct Failure<E>(pub E);

impl<E> Failure<E> {
  #[inline]
  pub fn into_inner(self) -> E { self.0 }

  /// Turns this wrapper into an [`Outcome`](crate::Outcome) whose success type is given explicitly, e.g.
  /// `Failure("bad input").outcome::<u32>()`.
  #[inline]
  pub fn outcome<T>(self) -> crate::Outcome<T, E> { self.into() }

  #[inline]
  pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Failure<F> { Failure(f(self.0)) }

  #[inline]
  pub fn convert<F>(self) -> Failure<F> where
    E: Into<F>
  {
    Failure(self.0.into())
  }

  #[inline]
  pub fn as_ref(&self) -> Failure<&E> { Failure(&self.0) }
}

impl<E> Variant for Failure<E> {
  const IS_SUCCESS: bool = false;
  type Payload = E;

  #[inline]
  fn into_payload(self) -> E { self.0 }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn is_success<V: Variant>(_: &V) -> bool { V::IS_SUCCESS }

  #[test]
  fn capability_tags_are_exclusive() {
    assert!(is_success(&Success(1)));
    assert!(!is_success(&Failure(1)));
  }

  #[test]
  fn payload_type_is_inferred_from_the_argument() {
    let success = Success(String::from("value"));
    let _: &Success<String> = &success;
    assert_eq!(success.into_payload(), "value");

    let failure = Failure(42u8);
    assert_eq!(failure.into_inner(), 42u8);
  }

  #[test]
  fn convert_uses_into() {
    let success: Success<String> = Success("abc").convert();
    assert_eq!(success, Success(String::from("abc")));

    let failure: Failure<i64> = Failure(7i32).convert();
    assert_eq!(failure, Failure(7i64));
  }

  #[test]
  fn map_transforms_payload_and_keeps_tag() {
    assert_eq!(Success(2).map(|x| x * 10), Success(20));
    assert_eq!(Failure("e").map(str::len), Failure(1));
  }
}
