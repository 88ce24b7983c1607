//! Explicit success/failure outcomes.
//!
//! An [`Outcome<T, E>`] is built from a [`Success`] or [`Failure`] wrapper, transformed and chained with
//! combinators, and unpacked with accessors or the [`propagate!`] early-return macro.
//!
//! An outcome is consumed by the operation that unpacks it; using it again does not compile:
//!
//! ```compile_fail
//! use outcome_core::{Outcome, Success};
//!
//! let outcome: Outcome<u8, ()> = Success(1).into();
//! let first = outcome.unwrap();
//! let second = outcome.unwrap();
//! ```
//!
//! Chaining requires matching types; `and_then` with a different failure type does not compile:
//!
//! ```compile_fail
//! use outcome_core::{Outcome, Success};
//!
//! let outcome: Outcome<u8, String> = Success(1).into();
//! let chained = outcome.and_then(|x| Success(x).outcome::<std::io::Error>());
//! ```
//!
//! Neither does `and` with a different failure type:
//!
//! ```compile_fail
//! use outcome_core::{Outcome, Success};
//!
//! let outcome: Outcome<u8, String> = Success(1).into();
//! let other: Outcome<u16, std::io::Error> = Success(2).into();
//! let chained = outcome.and(other);
//! ```
//!
//! `or` and `or_else` keep the success type, so a different one does not compile:
//!
//! ```compile_fail
//! use outcome_core::{Failure, Outcome};
//!
//! let outcome: Outcome<u8, String> = Failure(String::from("e")).into();
//! let other: Outcome<String, ()> = Failure(()).into();
//! let recovered = outcome.or(other);
//! ```
//!
//! ```compile_fail
//! use outcome_core::{Failure, Outcome, Success};
//!
//! let outcome: Outcome<u8, String> = Failure(String::from("e")).into();
//! let recovered = outcome.or_else(|e| Success(e).outcome::<()>());
//! ```
//!
//! [`propagate!`] only returns from functions whose return type can be built from the failure:
//!
//! ```compile_fail
//! use outcome_core::{propagate, Outcome};
//!
//! fn length(outcome: Outcome<String, std::io::Error>) -> usize {
//!   propagate!(outcome).len()
//! }
//! ```
//!
//! ```compile_fail
//! use outcome_core::{propagate, Outcome, Success};
//!
//! fn length(outcome: Outcome<String, std::io::Error>) -> Outcome<usize, String> {
//!   Success(propagate!(outcome).len()).into()
//! }
//! ```
//!
//! Nor can an outcome be created without a variant:
//!
//! ```compile_fail
//! use outcome_core::Outcome;
//!
//! let outcome: Outcome<u8, ()> = Outcome::default();
//! ```

pub mod variant;
pub mod outcome;
pub mod combinator;
pub mod compare;
pub mod propagate;
pub mod violation;
#[cfg(feature = "tracing")]
pub mod instrument;

pub mod app;

pub use outcome::Outcome;
pub use variant::{Failure, Success, Variant};
pub use propagate::FromFailure;
pub use violation::ContractViolation;
#[cfg(feature = "tracing")]
pub use instrument::OutcomeInstrumentExt;
