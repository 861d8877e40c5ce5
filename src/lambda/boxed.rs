//! Type-erased lambdas.

use std::fmt;
use std::sync::Arc;

use super::Lambda;
use super::error::{MissingFunctionError, require};

/// A type-erased, thread-safe, cheaply clonable lambda.
///
/// `BoxedLambda` is the object form of any [`Lambda`]: it hides the concrete
/// closure type behind an `Arc<dyn Lambda>` so that lambdas of different
/// types with the same signature can be stored together.
///
/// Cloning shares the underlying callable.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::{BoxedLambda, Lambda};
///
/// let operations: Vec<BoxedLambda<(i32, i32), i32>> = vec![
///     BoxedLambda::new(|first: i32, second: i32| first + second),
///     BoxedLambda::new(|first: i32, second: i32| first * second),
/// ];
///
/// let results: Vec<i32> = operations.iter().map(|operation| operation.apply((3, 4))).collect();
/// assert_eq!(results, vec![7, 12]);
/// ```
pub struct BoxedLambda<Args, R> {
    function: Arc<dyn Lambda<Args, Output = R> + Send + Sync>,
}

impl<Args, R> BoxedLambda<Args, R> {
    /// Boxes the given lambda.
    pub fn new<F>(function: F) -> Self
    where
        F: Lambda<Args, Output = R> + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Boxes the given lambda, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFunctionError`] if `function` is `None`.
    pub fn try_new<F>(function: Option<F>) -> Result<Self, MissingFunctionError>
    where
        F: Lambda<Args, Output = R> + Send + Sync + 'static,
    {
        require(function, "BoxedLambda::try_new").map(Self::new)
    }

    /// Returns `true` if both handles share the same underlying callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.function, &other.function)
    }
}

impl<Args, R> Clone for BoxedLambda<Args, R> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<Args, R> Lambda<Args> for BoxedLambda<Args, R> {
    type Output = R;

    #[inline]
    fn apply(&self, args: Args) -> R {
        self.function.apply(args)
    }
}

impl<Args, R> fmt::Debug for BoxedLambda<Args, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("BoxedLambda").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_boxed_lambda_applies_inner() {
        let boxed = BoxedLambda::new(|value: u8| u16::from(value) * 300);
        assert_eq!(boxed.apply((2,)), 600);
    }

    #[rstest]
    fn test_boxed_lambda_clone_shares_callable() {
        let boxed: BoxedLambda<(), &str> = BoxedLambda::new(|| "shared");
        let cloned = boxed.clone();
        assert!(boxed.ptr_eq(&cloned));
        assert_eq!(cloned.apply(()), "shared");
    }

    #[rstest]
    fn test_boxed_lambda_try_new_rejects_none() {
        let missing: Option<fn(i32) -> i32> = None;
        let error = BoxedLambda::try_new(missing).unwrap_err();
        assert_eq!(error.operation, "BoxedLambda::try_new");
    }

    #[rstest]
    fn test_boxed_lambda_debug_hides_callable() {
        let boxed = BoxedLambda::new(|| 1);
        assert!(format!("{boxed:?}").starts_with("BoxedLambda"));
    }
}
