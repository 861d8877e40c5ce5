//! The arity-generic callable trait.
//!
//! A [`Lambda<Args>`] is anything that can be applied to a tuple of
//! arguments. Every closure and function item taking zero to three
//! arguments is a `Lambda`, with `Args` being the tuple of its parameter
//! types:
//!
//! | Callable                 | `Args`       |
//! |--------------------------|--------------|
//! | `Fn() -> R`              | `()`         |
//! | `Fn(A) -> R`             | `(A,)`       |
//! | `Fn(A, B) -> R`          | `(A, B)`     |
//! | `Fn(A, B, C) -> R`       | `(A, B, C)`  |
//!
//! The adapters of this crate ([`AndThen`], [`Compose`], [`Partial`],
//! [`BoxedLambda`](super::BoxedLambda), memoizing wrappers, error adapters)
//! are `Lambda`s too, so they compose freely.

use super::boxed::BoxedLambda;
use super::combinator::{AndThen, Compose};

/// A callable applied to a tuple of arguments.
///
/// # Type Parameters
///
/// * `Args` - The argument tuple: `()`, `(A,)`, `(A, B)` or `(A, B, C)`
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
///
/// let add = |first: i32, second: i32| first + second;
/// assert_eq!(add.apply((2, 3)), 5);
///
/// let answer = || 42;
/// assert_eq!(answer.apply(()), 42);
/// ```
pub trait Lambda<Args> {
    /// The result of applying the lambda.
    type Output;

    /// Applies the lambda to the given arguments.
    ///
    /// For plain closures this is exactly a direct call.
    fn apply(&self, args: Args) -> Self::Output;

    /// Returns a lambda that feeds the output of `self` into `after`.
    ///
    /// `self.and_then(after).apply(args) == after(self.apply(args))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::lambda::Lambda;
    ///
    /// let add = |first: i32, second: i32| first + second;
    /// let describe = add.and_then(|sum: i32| format!("sum={sum}"));
    /// assert_eq!(describe.apply((2, 3)), "sum=5");
    /// ```
    #[inline]
    fn and_then<After>(self, after: After) -> AndThen<Self, After>
    where
        Self: Sized,
    {
        AndThen::new(self, after)
    }

    /// Returns a lambda that applies `before` first and feeds its output
    /// into `self`.
    ///
    /// `before` may take any supported arity; the composed lambda takes the
    /// same arguments as `before`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::lambda::Lambda;
    ///
    /// let double = |value: i32| value * 2;
    /// let add_then_double = double.compose(|first: i32, second: i32| first + second);
    /// assert_eq!(add_then_double.apply((2, 3)), 10);
    /// ```
    #[inline]
    fn compose<Before>(self, before: Before) -> Compose<Self, Before>
    where
        Self: Sized,
    {
        Compose::new(self, before)
    }

    /// Converts this lambda into its type-erased [`BoxedLambda`] form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::lambda::{BoxedLambda, Lambda};
    ///
    /// let render: BoxedLambda<(u32,), String> = (|value: u32| format!("#{value}")).boxed();
    /// assert_eq!(render.apply((7,)), "#7");
    /// ```
    fn boxed(self) -> BoxedLambda<Args, Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedLambda::new(self)
    }
}

macro_rules! impl_lambda_for_fn {
    ($($argument:ident : $argument_type:ident),*) => {
        impl<Function, R, $($argument_type),*> Lambda<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> R,
        {
            type Output = R;

            #[inline]
            fn apply(&self, ($($argument,)*): ($($argument_type,)*)) -> R {
                self($($argument),*)
            }
        }
    };
}

impl_lambda_for_fn!();
impl_lambda_for_fn!(first: A);
impl_lambda_for_fn!(first: A, second: B);
impl_lambda_for_fn!(first: A, second: B, third: C);
