//! # lambdakit
//!
//! Arity-generic function adapters for Rust: memoization, error nesting
//! and recovery, composition.
//!
//! ## Overview
//!
//! Instead of one functional interface per arity and argument type, this
//! library works with a single parametric callable, [`Lambda<Args>`](lambda::Lambda),
//! implemented for every closure and function item taking zero to three
//! arguments. On top of it, it provides:
//!
//! - **Lambdas**: composition, partial application, currying, boxing
//! - **Memoization**: thread-safe result caching with at-most-once
//!   evaluation per argument tuple, for infallible and fallible lambdas
//! - **Throwable**: nesting, recovery and propagation adapters for lambdas
//!   returning `Result`
//!
//! ## Feature Flags
//!
//! - `lambda`: The `Lambda` trait and combinators
//! - `memoize`: Memoizing wrappers
//! - `throwable`: Error adapters for fallible lambdas
//! - `fxhash`: Use `rustc-hash` for memo caches
//! - `ahash`: Use `ahash` for memo caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdakit::prelude::*;
//!
//! let add = (|first: i32, second: i32| first + second).memoized();
//! assert_eq!(add.apply((2, 3)), 5);
//! assert!(add.contains(&(2, 3)));
//!
//! let parse = |text: &str| text.parse::<i32>();
//! assert_eq!(parse.or_return(-1).apply(("nope",)), -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambdakit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "lambda")]
    pub use crate::lambda::*;

    #[cfg(feature = "memoize")]
    pub use crate::memoize::*;

    #[cfg(feature = "throwable")]
    pub use crate::throwable::*;
}

#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "memoize")]
pub mod memoize;

#[cfg(feature = "throwable")]
pub mod throwable;
