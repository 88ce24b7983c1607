//! Equality, ordering, and hashing of outcomes.
//!
//! Outcomes holding the same variant compare by payload. Across variants, every failure is less than every
//! success, for `<`, `<=`, `>`, `>=` and [`Ord::cmp`] alike; a failure never equals a success.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::outcome::{Outcome, Variant};
use crate::variant::{Failure, Success};

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    match (&self.variant, &other.variant) {
      (Variant::Success(Success(a)), Variant::Success(Success(b))) => a == b,
      (Variant::Failure(Failure(a)), Variant::Failure(Failure(b))) => a == b,
      _ => false,
    }
  }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: PartialOrd, E: PartialOrd> PartialOrd for Outcome<T, E> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (&self.variant, &other.variant) {
      (Variant::Success(Success(a)), Variant::Success(Success(b))) => a.partial_cmp(b),
      (Variant::Failure(Failure(a)), Variant::Failure(Failure(b))) => a.partial_cmp(b),
      (Variant::Failure(_), Variant::Success(_)) => Some(Ordering::Less),
      (Variant::Success(_), Variant::Failure(_)) => Some(Ordering::Greater),
    }
  }
}

impl<T: Ord, E: Ord> Ord for Outcome<T, E> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    match (&self.variant, &other.variant) {
      (Variant::Success(Success(a)), Variant::Success(Success(b))) => a.cmp(b),
      (Variant::Failure(Failure(a)), Variant::Failure(Failure(b))) => a.cmp(b),
      (Variant::Failure(_), Variant::Success(_)) => Ordering::Less,
      (Variant::Success(_), Variant::Failure(_)) => Ordering::Greater,
    }
  }
}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match &self.variant {
      Variant::Success(success) => hash_tagged(success.as_ref(), state),
      Variant::Failure(failure) => hash_tagged(failure.as_ref(), state),
    }
  }
}

/// Hashes the variant tag, then the payload.
#[inline]
fn hash_tagged<V, H: Hasher>(variant: V, state: &mut H) where
  V: crate::variant::Variant,
  V::Payload: Hash,
{
  V::IS_SUCCESS.hash(state);
  variant.into_payload().hash(state);
}
