//! Arity-generic lambdas and their combinators.
//!
//! This module provides one parametric callable abstraction in place of a
//! family of per-arity, per-type functional interfaces:
//!
//! - [`Lambda`]: a callable applied to an argument tuple, implemented for
//!   every closure and function item of arity 0 to 3
//! - [`AndThen`] / [`Compose`]: post- and pre-composition
//! - [`Partial`], [`partial`], [`curry2`]: partial application and currying
//! - [`BoxedLambda`]: the type-erased object form
//! - [`MissingFunctionError`], [`require`]: fail-fast construction from
//!   optional callables
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::lambda::{BoxedLambda, Lambda, partial};
//!
//! let area = |width: u32, height: u32| width * height;
//! assert_eq!(area.apply((3, 4)), 12);
//!
//! let labelled = area.and_then(|value: u32| format!("{value} m2"));
//! assert_eq!(labelled.apply((3, 4)), "12 m2");
//!
//! let width_three = partial(area, 3);
//! assert_eq!(width_three.apply((5,)), 15);
//!
//! let boxed: BoxedLambda<(u32, u32), u32> = BoxedLambda::new(area);
//! assert_eq!(boxed.apply((2, 2)), 4);
//! ```

mod boxed;
mod callable;
mod combinator;
mod error;

pub use boxed::BoxedLambda;
pub use callable::Lambda;
pub use combinator::{AndThen, Compose, Partial, curry2, partial, uncurry2};
pub use error::{MissingFunctionError, require};
