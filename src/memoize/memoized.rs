//! Memoization of infallible lambdas.

use std::fmt;
use std::hash::Hash;

use crate::lambda::{BoxedLambda, Lambda, MissingFunctionError, require};

use super::cache::MemoCache;

/// An infallible lambda whose results are cached per argument tuple.
///
/// The first application with a given argument tuple evaluates the wrapped
/// lambda and caches the result; every later application with an equal
/// tuple returns a clone of the cached result without evaluating again.
///
/// The wrapped lambda is evaluated at most once per key, also when several
/// threads apply the same key concurrently. Threads applying different keys
/// never wait for each other's evaluation.
///
/// A `Memoized` owns its cache exclusively. It is not `Clone`; share it
/// between threads with `Arc`.
///
/// # Panics
///
/// If the wrapped lambda panics, the panic propagates and nothing is cached
/// for that key; the next application evaluates again.
///
/// Applying the same key again from inside the wrapped lambda never
/// completes. Recursion on other keys is fine.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
/// use lambdakit::memoize::Memoize;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let evaluations = AtomicUsize::new(0);
/// let add = (|first: i32, second: i32| {
///     evaluations.fetch_add(1, Ordering::SeqCst);
///     first + second
/// })
/// .memoized();
///
/// assert_eq!(add.apply((2, 3)), 5);
/// assert_eq!(add.apply((2, 3)), 5);
/// assert_eq!(evaluations.load(Ordering::SeqCst), 1);
///
/// assert_eq!(add.apply((3, 2)), 5);
/// assert_eq!(evaluations.load(Ordering::SeqCst), 2);
/// ```
pub struct Memoized<Args, F>
where
    F: Lambda<Args>,
{
    function: F,
    cache: MemoCache<Args, F::Output>,
}

impl<Args, F> Memoized<Args, F>
where
    Args: Eq + Hash,
    F: Lambda<Args>,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
        }
    }

    /// Wraps `function` with a cache pre-sized for `capacity` keys.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self {
            function,
            cache: MemoCache::with_capacity(capacity),
        }
    }

    /// Wraps an optional `function`, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFunctionError`] if `function` is `None`.
    pub fn try_new(function: Option<F>) -> Result<Self, MissingFunctionError> {
        require(function, "Memoized::try_new").map(Self::new)
    }

    /// Returns the wrapped lambda.
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the cached result for `args`, without evaluating.
    pub fn cached(&self, args: &Args) -> Option<F::Output>
    where
        F::Output: Clone,
    {
        self.cache.get(args)
    }

    /// Returns `true` if a result is cached for `args`.
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

impl<Args, F> Lambda<Args> for Memoized<Args, F>
where
    Args: Eq + Hash + Clone,
    F: Lambda<Args>,
    F::Output: Clone,
{
    type Output = F::Output;

    fn apply(&self, args: Args) -> F::Output {
        if let Some(value) = self.cache.get(&args) {
            return value;
        }
        let key = args.clone();
        self.cache.get_or_compute(key, || self.function.apply(args))
    }
}

impl<Args, F> fmt::Debug for Memoized<Args, F>
where
    Args: Eq + Hash,
    F: Lambda<Args>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Conversion of an infallible lambda into its memoized form.
///
/// Memoizing is idempotent: calling [`memoized`](Memoize::memoized) on a
/// [`Memoized`] returns it unchanged, with the same cache, instead of
/// wrapping it a second time.
///
/// Implemented for closures and function items of arity 0 to 3, for
/// [`BoxedLambda`], and for [`Memoized`] itself. Any other lambda can be
/// wrapped with [`Memoized::new`].
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
/// use lambdakit::memoize::{Memoize, Memoized};
///
/// let square = (|value: u64| value * value).memoized();
/// assert!(square.is_memoized());
/// assert_eq!(square.apply((9,)), 81);
///
/// // Memoizing again keeps the same wrapper and its cache.
/// let again: Memoized<(u64,), _> = square.memoized();
/// assert!(again.contains(&(9,)));
/// ```
pub trait Memoize<Args>: Lambda<Args> + Sized {
    /// The memoized form.
    type Memoized: Lambda<Args, Output = Self::Output>;

    /// Returns the memoized form of this lambda.
    fn memoized(self) -> Self::Memoized;

    /// Returns `true` if this lambda already caches its results.
    fn is_memoized(&self) -> bool {
        false
    }
}

impl<Args, F> Memoize<Args> for Memoized<Args, F>
where
    Args: Eq + Hash + Clone,
    F: Lambda<Args>,
    F::Output: Clone,
{
    type Memoized = Self;

    #[inline]
    fn memoized(self) -> Self {
        self
    }

    fn is_memoized(&self) -> bool {
        true
    }
}

impl<Args, R> Memoize<Args> for BoxedLambda<Args, R>
where
    Args: Eq + Hash + Clone,
    R: Clone,
{
    type Memoized = Memoized<Args, Self>;

    fn memoized(self) -> Self::Memoized {
        Memoized::new(self)
    }
}

macro_rules! impl_memoize_for_fn {
    ($($argument_type:ident),*) => {
        impl<Function, R, $($argument_type),*> Memoize<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> R,
            ($($argument_type,)*): Eq + Hash + Clone,
            R: Clone,
        {
            type Memoized = Memoized<($($argument_type,)*), Self>;

            fn memoized(self) -> Self::Memoized {
                Memoized::new(self)
            }
        }
    };
}

impl_memoize_for_fn!();
impl_memoize_for_fn!(A);
impl_memoize_for_fn!(A, B);
impl_memoize_for_fn!(A, B, C);
