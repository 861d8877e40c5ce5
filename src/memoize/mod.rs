//! Memoizing wrappers.
//!
//! This module caches the results of lambdas per argument tuple:
//!
//! - [`Memoized`] / [`Memoize`]: infallible lambdas, backed by a sharded
//!   concurrent map; callers on different keys never wait for each other
//! - [`TryMemoized`] / [`TryMemoize`]: lambdas returning `Result`, with a
//!   per-instance re-entrant lock and double-checked lookup; only `Ok`
//!   results are cached
//! - [`MemoCache`]: the grow-only concurrent cache both wrappers use
//!
//! Both wrappers evaluate the wrapped lambda at most once per key, also
//! under concurrent access, and both propagate failures without caching
//! them.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::lambda::Lambda;
//! use lambdakit::memoize::Memoize;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let slow_square = Arc::new((|value: u64| value * value).memoized());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let slow_square = Arc::clone(&slow_square);
//!         thread::spawn(move || slow_square.apply((12,)))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 144);
//! }
//! assert_eq!(slow_square.len(), 1);
//! ```

mod cache;
mod memoized;
mod try_memoized;

pub use cache::MemoCache;
pub use memoized::{Memoize, Memoized};
pub use try_memoized::{TryMemoize, TryMemoized};

static_assertions::assert_impl_all!(MemoCache<(String, u64), Vec<u8>>: Send, Sync);
static_assertions::assert_impl_all!(Memoized<(u64,), fn(u64) -> String>: Send, Sync);
static_assertions::assert_impl_all!(
    TryMemoized<(u64, u64), fn(u64, u64) -> Result<u64, String>>: Send,
    Sync
);
