//! Memoization of fallible lambdas.

use std::fmt;
use std::hash::Hash;

use parking_lot::ReentrantMutex;

use crate::lambda::{Lambda, MissingFunctionError, require};
use crate::throwable::Throwable;

use super::cache::MemoCache;

/// A fallible lambda whose successful results are cached per argument tuple.
///
/// Lookup-or-evaluate runs as double-checked locking: a cache hit returns
/// immediately; a miss enters the wrapper's mutual-exclusion section,
/// checks the cache again, and only then evaluates. Exactly one caller
/// evaluates a given key even when several threads race on it.
///
/// Only `Ok` results are cached. An `Err` is returned to the caller that
/// triggered the evaluation and nothing is stored, so the next application
/// with that key evaluates again. Callers that were waiting on the lock
/// while an evaluation failed perform their own evaluation in turn.
///
/// The lock is re-entrant: the wrapped lambda may apply this wrapper
/// recursively on other keys. Applying the same key again from inside the
/// wrapped lambda recurses without bound.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
/// use lambdakit::memoize::TryMemoize;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let evaluations = AtomicUsize::new(0);
/// let parse = (|text: String| {
///     evaluations.fetch_add(1, Ordering::SeqCst);
///     text.parse::<u16>()
/// })
/// .try_memoized();
///
/// assert_eq!(parse.apply(("80".to_string(),)), Ok(80));
/// assert_eq!(parse.apply(("80".to_string(),)), Ok(80));
/// assert_eq!(evaluations.load(Ordering::SeqCst), 1);
///
/// // Failures are not cached.
/// assert!(parse.apply(("port".to_string(),)).is_err());
/// assert!(parse.apply(("port".to_string(),)).is_err());
/// assert_eq!(evaluations.load(Ordering::SeqCst), 3);
/// ```
pub struct TryMemoized<Args, F>
where
    F: Throwable<Args>,
{
    function: F,
    cache: MemoCache<Args, F::Value>,
    lock: ReentrantMutex<()>,
}

impl<Args, F> TryMemoized<Args, F>
where
    Args: Eq + Hash,
    F: Throwable<Args>,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
            lock: ReentrantMutex::new(()),
        }
    }

    /// Wraps `function` with a cache pre-sized for `capacity` keys.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self {
            function,
            cache: MemoCache::with_capacity(capacity),
            lock: ReentrantMutex::new(()),
        }
    }

    /// Wraps an optional `function`, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFunctionError`] if `function` is `None`.
    pub fn try_new(function: Option<F>) -> Result<Self, MissingFunctionError> {
        require(function, "TryMemoized::try_new").map(Self::new)
    }

    /// Returns the wrapped lambda.
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the cached successful result for `args`, without evaluating.
    pub fn cached(&self, args: &Args) -> Option<F::Value>
    where
        F::Value: Clone,
    {
        self.cache.get(args)
    }

    /// Returns `true` if a successful result is cached for `args`.
    pub fn contains(&self, args: &Args) -> bool {
        self.cache.contains_key(args)
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if no result is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<Args, F> Lambda<Args> for TryMemoized<Args, F>
where
    Args: Eq + Hash + Clone,
    F: Throwable<Args>,
    F::Value: Clone,
{
    type Output = Result<F::Value, F::Error>;

    fn apply(&self, args: Args) -> Self::Output {
        if let Some(value) = self.cache.get(&args) {
            return Ok(value);
        }

        let _guard = self.lock.lock();
        if let Some(value) = self.cache.get(&args) {
            return Ok(value);
        }

        tracing::trace!("fallible memo cache miss, evaluating");
        let key = args.clone();
        match self.function.try_apply(args) {
            Ok(value) => {
                self.cache.insert(key, value.clone());
                Ok(value)
            }
            Err(error) => {
                tracing::debug!("fallible evaluation failed, result not cached");
                Err(error)
            }
        }
    }
}

impl<Args, F> fmt::Debug for TryMemoized<Args, F>
where
    Args: Eq + Hash,
    F: Throwable<Args>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Conversion of a fallible lambda into its memoized form.
///
/// Like [`Memoize`](super::Memoize), memoizing is idempotent: calling
/// [`try_memoized`](TryMemoize::try_memoized) on a [`TryMemoized`] returns
/// it unchanged.
///
/// Implemented for closures and function items of arity 0 to 3 returning
/// `Result`, and for [`TryMemoized`] itself.
pub trait TryMemoize<Args>: Throwable<Args> + Sized {
    /// The memoized form.
    type Memoized: Lambda<Args, Output = Result<Self::Value, Self::Error>>;

    /// Returns the memoized form of this lambda.
    fn try_memoized(self) -> Self::Memoized;

    /// Returns `true` if this lambda already caches its successful results.
    ///
    /// Named apart from [`Memoize::is_memoized`](super::Memoize::is_memoized)
    /// so that both traits can be in scope for the same closure.
    fn is_try_memoized(&self) -> bool {
        false
    }
}

impl<Args, F> TryMemoize<Args> for TryMemoized<Args, F>
where
    Args: Eq + Hash + Clone,
    F: Throwable<Args>,
    F::Value: Clone,
{
    type Memoized = Self;

    #[inline]
    fn try_memoized(self) -> Self {
        self
    }

    fn is_try_memoized(&self) -> bool {
        true
    }
}

macro_rules! impl_try_memoize_for_fn {
    ($($argument_type:ident),*) => {
        impl<Function, T, E, $($argument_type),*> TryMemoize<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> Result<T, E>,
            ($($argument_type,)*): Eq + Hash + Clone,
            T: Clone,
        {
            type Memoized = TryMemoized<($($argument_type,)*), Self>;

            fn try_memoized(self) -> Self::Memoized {
                TryMemoized::new(self)
            }
        }
    };
}

impl_try_memoize_for_fn!();
impl_try_memoize_for_fn!(A);
impl_try_memoize_for_fn!(A, B);
impl_try_memoize_for_fn!(A, B, C);
