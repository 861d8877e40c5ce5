//! The fallible lambda trait.

use crate::lambda::Lambda;

use super::adapter::{Nest, NestWith, OrReturn, Propagate, Recover, RecoverWith, Unchecked};

/// A [`Lambda`] whose output is a `Result`.
///
/// This trait is implemented automatically for every lambda returning
/// `Result<T, E>`. It names the success and error types and provides the
/// error adapters. Each adapter implements exactly one behaviour, passes
/// `Ok` values through unchanged, and only ever looks at `Err` values:
/// panics raised by the wrapped lambda are never intercepted.
///
/// | Adapter              | On `Err(error)`                                  |
/// |----------------------|--------------------------------------------------|
/// | [`nest`]             | `Err(NestedError::new(error))`                   |
/// | [`nest_with`]        | `Err(mapper(error))`                             |
/// | [`recover_with`]     | `handler(error)`                                 |
/// | [`recover`]          | `handler(error).apply(args)`                     |
/// | [`or_return`]        | a clone of the default value                     |
/// | [`propagate`]        | `Err(E2::from(error))`                           |
/// | [`unchecked`]        | panics with `error` as the payload               |
///
/// [`nest`]: Throwable::nest
/// [`nest_with`]: Throwable::nest_with
/// [`recover_with`]: Throwable::recover_with
/// [`recover`]: Throwable::recover
/// [`or_return`]: Throwable::or_return
/// [`propagate`]: Throwable::propagate
/// [`unchecked`]: Throwable::unchecked
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
/// use lambdakit::throwable::Throwable;
///
/// let parse = |text: &str| text.parse::<i32>();
///
/// let lenient = parse.recover_with(|_error| 0);
/// assert_eq!(lenient.apply(("12",)), 12);
/// assert_eq!(lenient.apply(("twelve",)), 0);
///
/// let nested = parse.nest();
/// assert!(nested.apply(("twelve",)).is_err());
/// ```
pub trait Throwable<Args>: Lambda<Args> {
    /// The success type.
    type Value;
    /// The error type.
    type Error;

    /// Applies the lambda, returning its `Result` unchanged.
    fn try_apply(&self, args: Args) -> Result<Self::Value, Self::Error>;

    /// Wraps every error into a [`NestedError`](super::NestedError).
    #[inline]
    fn nest(self) -> Nest<Self>
    where
        Self: Sized,
    {
        Nest::new(self)
    }

    /// Wraps every error with the given mapper.
    #[inline]
    fn nest_with<Mapper, Target>(self, mapper: Mapper) -> NestWith<Self, Mapper>
    where
        Self: Sized,
        Mapper: Fn(Self::Error) -> Target,
    {
        NestWith::new(self, mapper)
    }

    /// Substitutes the result of `handler` for every error.
    #[inline]
    fn recover_with<Handler>(self, handler: Handler) -> RecoverWith<Self, Handler>
    where
        Self: Sized,
        Handler: Fn(Self::Error) -> Self::Value,
    {
        RecoverWith::new(self, handler)
    }

    /// Substitutes a fallback lambda for every error.
    ///
    /// `handler` receives the error and returns the lambda that is applied
    /// to the original arguments in place of the failed one.
    #[inline]
    fn recover<Handler, Fallback>(self, handler: Handler) -> Recover<Self, Handler>
    where
        Self: Sized,
        Handler: Fn(Self::Error) -> Fallback,
        Fallback: Lambda<Args, Output = Self::Value>,
    {
        Recover::new(self, handler)
    }

    /// Substitutes `default` for every error.
    #[inline]
    fn or_return(self, default: Self::Value) -> OrReturn<Self, Self::Value>
    where
        Self: Sized,
    {
        OrReturn::new(self, default)
    }

    /// Re-raises every error, unwrapped, as the caller's error type.
    ///
    /// The error is converted with `From`, exactly as `?` would do.
    #[inline]
    fn propagate<Target>(self) -> Propagate<Self, Target>
    where
        Self: Sized,
    {
        Propagate::new(self)
    }

    /// Turns every error into a panic carrying the original error.
    ///
    /// Use [`catch_unchecked`](super::catch_unchecked) to get the error back.
    #[inline]
    fn unchecked(self) -> Unchecked<Self>
    where
        Self: Sized,
    {
        Unchecked::new(self)
    }
}

impl<Args, L, T, E> Throwable<Args> for L
where
    L: Lambda<Args, Output = Result<T, E>>,
{
    type Value = T;
    type Error = E;

    #[inline]
    fn try_apply(&self, args: Args) -> Result<T, E> {
        self.apply(args)
    }
}
