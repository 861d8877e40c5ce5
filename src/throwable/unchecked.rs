//! Recovering errors raised through [`Unchecked`](super::Unchecked).

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

/// Panic payload raised by [`Unchecked`](super::Unchecked).
///
/// Keeps ordinary panics whose payload happens to have the error's type
/// (`String`, `&'static str`) apart from smuggled errors.
pub(crate) struct UncheckedPayload<E>(pub(crate) E);

/// Runs `body`, turning a panic whose payload is an `E` back into `Err`.
///
/// This is the counterpart of [`Throwable::unchecked`](super::Throwable::unchecked):
/// an error smuggled through code that does not declare it comes back out
/// as the original typed value. Every other panic is resumed unchanged,
/// including a `panic!` whose message has the same type as `E`.
///
/// # Errors
///
/// Returns `Err(error)` if `body` panicked through an unchecked lambda
/// failing with `error`.
///
/// # Examples
///
/// ```rust
/// use lambdakit::lambda::Lambda;
/// use lambdakit::throwable::{Throwable, catch_unchecked};
/// use std::num::ParseIntError;
///
/// let parse = |text: &str| text.parse::<u8>();
/// let unchecked = parse.unchecked();
///
/// let total: Result<u8, ParseIntError> =
///     catch_unchecked(|| unchecked.apply(("1",)) + unchecked.apply(("2",)));
/// assert_eq!(total, Ok(3));
/// ```
pub fn catch_unchecked<T, E, Body>(body: Body) -> Result<T, E>
where
    Body: FnOnce() -> T,
    E: 'static,
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<UncheckedPayload<E>>() {
            Ok(unchecked) => Err(unchecked.0),
            Err(other) => resume_unwind(other),
        },
    }
}
