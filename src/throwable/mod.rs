//! Error nesting, recovery and propagation for fallible lambdas.
//!
//! A fallible lambda is any [`Lambda`](crate::lambda::Lambda) returning a
//! `Result`. This module provides:
//!
//! - [`Throwable`]: the fallible lambda trait and its adapter methods
//! - [`NestedError`]: the standard error type errors are nested into
//! - [`LambdaError`]: the union of every error this crate produces
//! - [`catch_unchecked`]: recovers errors raised through [`Unchecked`]
//!
//! # Error taxonomy
//!
//! - **Contract violations** (absent callables) are rejected at
//!   construction with [`MissingFunctionError`](crate::lambda::MissingFunctionError).
//! - **Computation errors** are `Err` values returned by the wrapped
//!   lambda. They reach the caller unchanged unless an adapter is applied
//!   explicitly.
//! - **Fatal errors** are panics and aborts. No adapter ever intercepts
//!   them; they always propagate as-is.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::lambda::Lambda;
//! use lambdakit::throwable::{LambdaError, Throwable};
//!
//! fn checked_divide(dividend: i32, divisor: i32) -> Result<i32, std::fmt::Error> {
//!     dividend.checked_div(divisor).ok_or(std::fmt::Error)
//! }
//!
//! // Nest into the standard error type, then into the crate-wide error.
//! let nested = checked_divide.nest().propagate::<LambdaError>();
//! assert!(matches!(nested.apply((1, 0)), Err(LambdaError::Nested(_))));
//!
//! // Or recover with a fallback value.
//! let saturating = checked_divide.or_return(i32::MAX);
//! assert_eq!(saturating.apply((1, 0)), i32::MAX);
//! assert_eq!(saturating.apply((9, 3)), 3);
//! ```

mod adapter;
mod error;
#[allow(clippy::module_inception)]
mod throwable;
mod unchecked;

pub use adapter::{Nest, NestWith, OrReturn, Propagate, Recover, RecoverWith, Unchecked};
pub use error::{LambdaError, NestedError};
pub use throwable::Throwable;
pub use unchecked::catch_unchecked;
