//! Generic combinators over [`Lambda`].
//!
//! - [`AndThen`]: post-composition, `after(f(args))`
//! - [`Compose`]: pre-composition, `f(before(args))`
//! - [`Partial`]: fixes the first argument of an arity-2 or arity-3 lambda
//! - [`curry2`]: turns an arity-2 lambda into a chain of arity-1 lambdas
//! - [`uncurry2`]: the inverse of [`curry2`]
//!
//! # Laws
//!
//! - **Left identity**: `f.compose(identity) == f`
//! - **Right identity**: `f.and_then(identity) == f`
//! - **Partial definition**: `partial(f, a).apply((b,)) == f.apply((a, b))`
//! - **Uncurry inverse**: `uncurry2(curry2(f))(a, b) == f(a, b)`

use super::Lambda;

/// Lambda returned by [`Lambda::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct AndThen<F, After> {
    function: F,
    after: After,
}

impl<F, After> AndThen<F, After> {
    pub(crate) const fn new(function: F, after: After) -> Self {
        Self { function, after }
    }
}

impl<Args, F, After> Lambda<Args> for AndThen<F, After>
where
    F: Lambda<Args>,
    After: Lambda<(F::Output,)>,
{
    type Output = After::Output;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        self.after.apply((self.function.apply(args),))
    }
}

/// Lambda returned by [`Lambda::compose`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<F, Before> {
    function: F,
    before: Before,
}

impl<F, Before> Compose<F, Before> {
    pub(crate) const fn new(function: F, before: Before) -> Self {
        Self { function, before }
    }
}

impl<Args, F, Before> Lambda<Args> for Compose<F, Before>
where
    Before: Lambda<Args>,
    F: Lambda<(Before::Output,)>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        self.function.apply((self.before.apply(args),))
    }
}

/// A lambda with its first argument fixed.
///
/// Applied to an arity-2 lambda it yields an arity-1 lambda; applied to an
/// arity-3 lambda it yields an arity-2 lambda. The fixed argument is cloned
/// on every application.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::{Lambda, partial};
///
/// let volume = |width: u32, height: u32, depth: u32| width * height * depth;
/// let width_two = partial(volume, 2);
/// assert_eq!(width_two.apply((3, 4)), 24);
///
/// let width_two_height_three = partial(width_two, 3);
/// assert_eq!(width_two_height_three.apply((4,)), 24);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Partial<F, First> {
    function: F,
    first: First,
}

impl<F, First> Partial<F, First> {
    /// Returns the fixed first argument.
    pub const fn first(&self) -> &First {
        &self.first
    }
}

impl<F, First, B> Lambda<(B,)> for Partial<F, First>
where
    F: Lambda<(First, B)>,
    First: Clone,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, (second,): (B,)) -> Self::Output {
        self.function.apply((self.first.clone(), second))
    }
}

impl<F, First, B, C> Lambda<(B, C)> for Partial<F, First>
where
    F: Lambda<(First, B, C)>,
    First: Clone,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, (second, third): (B, C)) -> Self::Output {
        self.function.apply((self.first.clone(), second, third))
    }
}

/// Fixes the first argument of `function`.
///
/// See [`Partial`].
#[inline]
pub const fn partial<F, First>(function: F, first: First) -> Partial<F, First> {
    Partial { function, first }
}

/// Converts an arity-2 lambda into its curried form.
///
/// `curry2(f)(a).apply((b,)) == f.apply((a, b))`
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::{Lambda, curry2};
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let from_ten = curry2(subtract)(10);
/// assert_eq!(from_ten.apply((3,)), 7);
/// ```
pub fn curry2<F, A, B>(function: F) -> impl Fn(A) -> Partial<F, A>
where
    F: Lambda<(A, B)> + Clone,
{
    move |first| partial(function.clone(), first)
}

/// Converts a curried function back into an arity-2 lambda.
///
/// `uncurry2(g)(a, b) == g(a).apply((b,))`
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::{Lambda, curry2, uncurry2};
///
/// let scale = |factor: i32| move |value: i32| factor * value;
/// let product = uncurry2(scale);
/// assert_eq!(product.apply((6, 7)), 42);
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(uncurry2(curry2(subtract))(10, 3), 7);
/// ```
pub fn uncurry2<Curried, Inner, A, B>(curried: Curried) -> impl Fn(A, B) -> Inner::Output
where
    Curried: Fn(A) -> Inner,
    Inner: Lambda<(B,)>,
{
    move |first, second| curried(first).apply((second,))
}
