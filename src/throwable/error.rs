//! Error types produced by the error adapters.

use std::error::Error;
use std::fmt;

use crate::lambda::MissingFunctionError;

/// The standard error type produced by [`Throwable::nest`](super::Throwable::nest).
///
/// `NestedError` wraps any error raised by a fallible lambda, erasing its
/// concrete type while keeping it reachable through [`Error::source`],
/// [`NestedError::downcast_ref`] and [`NestedError::downcast`].
///
/// # Examples
///
/// ```rust
/// use lambdakit::throwable::NestedError;
/// use std::num::ParseIntError;
///
/// let raised = "x".parse::<i32>().unwrap_err();
/// let nested = NestedError::new(raised.clone());
///
/// assert_eq!(nested.downcast_ref::<ParseIntError>(), Some(&raised));
/// assert_eq!(
///     format!("{nested}"),
///     "lambda raised an error: invalid digit found in string"
/// );
/// ```
#[derive(Debug)]
pub struct NestedError {
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl NestedError {
    /// Wraps the given error.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            source: Box::new(error),
        }
    }

    /// Returns a reference to the wrapped error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source.downcast_ref::<E>()
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.source.is::<E>()
    }

    /// Recovers the wrapped error as type `E`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if the wrapped error is not of type `E`.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        self.source
            .downcast::<E>()
            .map(|error| *error)
            .map_err(|source| Self { source })
    }

    /// Consumes the wrapper and returns the boxed error.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.source
    }
}

impl fmt::Display for NestedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "lambda raised an error: {}", self.source)
    }
}

impl Error for NestedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Represents every error this crate can produce.
///
/// Callers that want a single error type can convert into `LambdaError`
/// with `?` (or [`Throwable::propagate`](super::Throwable::propagate)).
#[derive(Debug)]
pub enum LambdaError {
    /// A wrapper was built from an absent callable.
    MissingFunction(MissingFunctionError),
    /// A wrapped lambda raised an error.
    Nested(NestedError),
}

impl fmt::Display for LambdaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFunction(error) => write!(formatter, "{error}"),
            Self::Nested(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for LambdaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFunction(_) => None,
            Self::Nested(error) => Some(error),
        }
    }
}

impl From<MissingFunctionError> for LambdaError {
    fn from(error: MissingFunctionError) -> Self {
        Self::MissingFunction(error)
    }
}

impl From<NestedError> for LambdaError {
    fn from(error: NestedError) -> Self {
        Self::Nested(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Overdrawn(u32);

    impl fmt::Display for Overdrawn {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "overdrawn by {}", self.0)
        }
    }

    impl Error for Overdrawn {}

    #[rstest]
    fn test_nested_error_display() {
        let nested = NestedError::new(Overdrawn(12));
        assert_eq!(format!("{nested}"), "lambda raised an error: overdrawn by 12");
    }

    #[rstest]
    fn test_nested_error_source_is_wrapped_error() {
        let nested = NestedError::new(Overdrawn(3));
        let source = nested.source().unwrap();
        assert_eq!(source.to_string(), "overdrawn by 3");
    }

    #[rstest]
    fn test_nested_error_downcast_success() {
        let nested = NestedError::new(Overdrawn(5));
        assert!(nested.is::<Overdrawn>());
        assert_eq!(nested.downcast::<Overdrawn>().unwrap(), Overdrawn(5));
    }

    #[rstest]
    fn test_nested_error_downcast_failure_returns_self() {
        let nested = NestedError::new(Overdrawn(5));
        let nested = nested.downcast::<std::fmt::Error>().unwrap_err();
        assert_eq!(nested.downcast_ref::<Overdrawn>(), Some(&Overdrawn(5)));
    }

    #[rstest]
    fn test_nested_error_into_inner() {
        let inner = NestedError::new(Overdrawn(1)).into_inner();
        assert_eq!(inner.to_string(), "overdrawn by 1");
    }

    #[rstest]
    fn test_lambda_error_from_missing_function() {
        let error: LambdaError = MissingFunctionError { operation: "op" }.into();
        assert!(matches!(error, LambdaError::MissingFunction(_)));
        assert_eq!(format!("{error}"), "op: function must not be absent");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_lambda_error_from_nested_keeps_chain() {
        let error: LambdaError = NestedError::new(Overdrawn(9)).into();
        let nested = error.source().unwrap();
        assert_eq!(nested.source().unwrap().to_string(), "overdrawn by 9");
    }
}
