//! Error adapters returned by [`Throwable`]'s methods.
//!
//! Every adapter is itself a [`Lambda`], so adapters chain: a nested lambda
//! is still fallible and can be recovered, a propagated lambda can be
//! memoized, and so on.

use std::error::Error;
use std::marker::PhantomData;
use std::panic::panic_any;

use crate::lambda::Lambda;

use super::NestedError;
use super::Throwable;
use super::unchecked::UncheckedPayload;

/// Lambda returned by [`Throwable::nest`].
#[derive(Debug, Clone, Copy)]
pub struct Nest<L> {
    function: L,
}

impl<L> Nest<L> {
    pub(crate) const fn new(function: L) -> Self {
        Self { function }
    }
}

impl<Args, L> Lambda<Args> for Nest<L>
where
    L: Throwable<Args>,
    L::Error: Error + Send + Sync + 'static,
{
    type Output = Result<L::Value, NestedError>;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        self.function.try_apply(args).map_err(NestedError::new)
    }
}

/// Lambda returned by [`Throwable::nest_with`].
#[derive(Debug, Clone, Copy)]
pub struct NestWith<L, Mapper> {
    function: L,
    mapper: Mapper,
}

impl<L, Mapper> NestWith<L, Mapper> {
    pub(crate) const fn new(function: L, mapper: Mapper) -> Self {
        Self { function, mapper }
    }
}

impl<Args, L, Mapper, Target> Lambda<Args> for NestWith<L, Mapper>
where
    L: Throwable<Args>,
    Mapper: Fn(L::Error) -> Target,
{
    type Output = Result<L::Value, Target>;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        self.function.try_apply(args).map_err(&self.mapper)
    }
}

/// Lambda returned by [`Throwable::recover_with`].
#[derive(Debug, Clone, Copy)]
pub struct RecoverWith<L, Handler> {
    function: L,
    handler: Handler,
}

impl<L, Handler> RecoverWith<L, Handler> {
    pub(crate) const fn new(function: L, handler: Handler) -> Self {
        Self { function, handler }
    }
}

impl<Args, L, Handler> Lambda<Args> for RecoverWith<L, Handler>
where
    L: Throwable<Args>,
    Handler: Fn(L::Error) -> L::Value,
{
    type Output = L::Value;

    fn apply(&self, args: Args) -> L::Value {
        self.function.try_apply(args).unwrap_or_else(|error| {
            tracing::debug!("substituting fallback result for failed lambda");
            (self.handler)(error)
        })
    }
}

/// Lambda returned by [`Throwable::recover`].
///
/// The arguments are cloned before the first attempt so that the fallback
/// lambda sees exactly the same input.
#[derive(Debug, Clone, Copy)]
pub struct Recover<L, Handler> {
    function: L,
    handler: Handler,
}

impl<L, Handler> Recover<L, Handler> {
    pub(crate) const fn new(function: L, handler: Handler) -> Self {
        Self { function, handler }
    }
}

impl<Args, L, Handler, Fallback> Lambda<Args> for Recover<L, Handler>
where
    Args: Clone,
    L: Throwable<Args>,
    Handler: Fn(L::Error) -> Fallback,
    Fallback: Lambda<Args, Output = L::Value>,
{
    type Output = L::Value;

    fn apply(&self, args: Args) -> L::Value {
        match self.function.try_apply(args.clone()) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("applying fallback lambda for failed lambda");
                (self.handler)(error).apply(args)
            }
        }
    }
}

/// Lambda returned by [`Throwable::or_return`].
#[derive(Debug, Clone, Copy)]
pub struct OrReturn<L, T> {
    function: L,
    default: T,
}

impl<L, T> OrReturn<L, T> {
    pub(crate) const fn new(function: L, default: T) -> Self {
        Self { function, default }
    }
}

impl<Args, L, T> Lambda<Args> for OrReturn<L, T>
where
    L: Throwable<Args, Value = T>,
    T: Clone,
{
    type Output = T;

    fn apply(&self, args: Args) -> T {
        self.function.try_apply(args).unwrap_or_else(|_| {
            tracing::debug!("substituting default value for failed lambda");
            self.default.clone()
        })
    }
}

/// Lambda returned by [`Throwable::propagate`].
pub struct Propagate<L, Target> {
    function: L,
    target: PhantomData<fn() -> Target>,
}

impl<L, Target> Propagate<L, Target> {
    pub(crate) const fn new(function: L) -> Self {
        Self {
            function,
            target: PhantomData,
        }
    }
}

impl<L: Clone, Target> Clone for Propagate<L, Target> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<L: std::fmt::Debug, Target> std::fmt::Debug for Propagate<L, Target> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Propagate")
            .field("function", &self.function)
            .finish()
    }
}

impl<Args, L, Target> Lambda<Args> for Propagate<L, Target>
where
    L: Throwable<Args>,
    Target: From<L::Error>,
{
    type Output = Result<L::Value, Target>;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        Ok(self.function.try_apply(args)?)
    }
}

/// Lambda returned by [`Throwable::unchecked`].
///
/// # Panics
///
/// Applying it panics when the wrapped lambda fails. The panic carries the
/// original error, which only [`catch_unchecked`](super::catch_unchecked)
/// can recover.
#[derive(Debug, Clone, Copy)]
pub struct Unchecked<L> {
    function: L,
}

impl<L> Unchecked<L> {
    pub(crate) const fn new(function: L) -> Self {
        Self { function }
    }
}

impl<Args, L> Lambda<Args> for Unchecked<L>
where
    L: Throwable<Args>,
    L::Error: Send + 'static,
{
    type Output = L::Value;

    fn apply(&self, args: Args) -> L::Value {
        match self.function.try_apply(args) {
            Ok(value) => value,
            Err(error) => panic_any(UncheckedPayload(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::num::ParseIntError;

    fn parse(text: &str) -> Result<i64, ParseIntError> {
        text.parse()
    }

    #[rstest]
    fn test_nest_passes_ok_through() {
        assert_eq!(parse.nest().apply(("41",)).unwrap(), 41);
    }

    #[rstest]
    fn test_nest_wraps_error() {
        let error = parse.nest().apply(("forty",)).unwrap_err();
        assert!(error.is::<ParseIntError>());
    }

    #[rstest]
    fn test_nest_with_maps_error() {
        let nested = parse.nest_with(|error: ParseIntError| error.to_string());
        assert_eq!(
            nested.apply(("",)),
            Err("cannot parse integer from empty string".to_string())
        );
    }

    #[rstest]
    fn test_recover_with_uses_handler_only_on_error() {
        let recovered = parse.recover_with(|_| -1);
        assert_eq!(recovered.apply(("8",)), 8);
        assert_eq!(recovered.apply(("eight",)), -1);
    }

    #[rstest]
    fn test_recover_reapplies_fallback_to_same_arguments() {
        let recovered = parse.recover(|_| |text: &str| i64::try_from(text.len()).unwrap_or(0));
        assert_eq!(recovered.apply(("12",)), 12);
        assert_eq!(recovered.apply(("abc",)), 3);
    }

    #[rstest]
    fn test_or_return_substitutes_default() {
        let defaulted = parse.or_return(0);
        assert_eq!(defaulted.apply(("x",)), 0);
        assert_eq!(defaulted.apply(("7",)), 7);
    }

    #[rstest]
    fn test_propagate_converts_with_from() {
        let propagated = parse.propagate::<Box<dyn Error + Send + Sync>>();
        let error = propagated.apply(("?",)).unwrap_err();
        assert!(error.downcast_ref::<ParseIntError>().is_some());
    }

    #[rstest]
    fn test_unchecked_passes_ok_through() {
        assert_eq!(parse.unchecked().apply(("5",)), 5);
    }

    #[rstest]
    #[should_panic]
    fn test_unchecked_panics_on_error() {
        let _ = parse.unchecked().apply(("five",));
    }
}
