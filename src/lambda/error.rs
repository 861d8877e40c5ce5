//! Contract violation errors.
//!
//! Rust callables cannot be null, but wrappers are often built from
//! optional, dynamically registered callables. Constructors taking an
//! `Option` fail fast with [`MissingFunctionError`] instead of deferring
//! the failure to the first call.

/// Represents an attempt to build a wrapper around an absent callable.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::MissingFunctionError;
///
/// let error = MissingFunctionError {
///     operation: "Memoized::try_new",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Memoized::try_new: function must not be absent"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFunctionError {
    /// The constructor or adapter that rejected the callable.
    pub operation: &'static str,
}

impl std::fmt::Display for MissingFunctionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: function must not be absent",
            self.operation
        )
    }
}

impl std::error::Error for MissingFunctionError {}

/// Unwraps an optional callable, failing fast when it is absent.
///
/// # Errors
///
/// Returns [`MissingFunctionError`] naming `operation` if `function` is `None`.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::require;
///
/// let present = require(Some(|value: i32| value + 1), "example");
/// assert!(present.is_ok());
///
/// let absent: Option<fn(i32) -> i32> = None;
/// assert!(require(absent, "example").is_err());
/// ```
pub fn require<F>(function: Option<F>, operation: &'static str) -> Result<F, MissingFunctionError> {
    function.ok_or(MissingFunctionError { operation })
}
