//! Attempt type - a computation whose failure is captured as a value.
//!
//! `Attempt<T>` runs a computation immediately and records its outcome:
//! `Success(T)` when it produced a value, `Failure(AttemptError)` when it
//! returned an error or panicked. From then on the outcome is fixed; no
//! combinator re-runs the computation and none of them re-raises a captured
//! failure. Only [`Attempt::get_or_else_throw`] hands the error back to the
//! caller, as an `Err`.
//!
//! Panic capture relies on unwinding. Under `panic = "abort"` a panicking
//! computation aborts the process as usual. A captured panic still passes
//! through the installed panic hook first, so the default hook prints its
//! "thread ... panicked" message to stderr; install a quieter hook with
//! `std::panic::set_hook` if that output is unwanted.
//!
//! # Examples
//!
//! ```rust
//! use vessel::control::{Attempt, Either};
//!
//! fn throw_on_xyz(text: &str) -> Result<String, String> {
//!     if text == "XYZ" {
//!         Err("XYZ provided".to_string())
//!     } else {
//!         Ok(text.to_string())
//!     }
//! }
//!
//! let failed = Attempt::of(|| throw_on_xyz("XYZ"));
//! assert!(failed.is_failure());
//! assert_eq!(failed.to_either(), Either::Left("XYZ provided".to_string()));
//!
//! let succeeded = Attempt::of(|| throw_on_xyz("ABC"));
//! assert_eq!(succeeded.get_or_else_throw().ok(), Some("ABC".to_string()));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::either::Either;
use super::optional::Optional;

/// A boxed, thread-safe error; anything convertible into it can fail an
/// [`Attempt`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// =============================================================================
// AttemptError
// =============================================================================

/// The error captured by a failed [`Attempt`].
///
/// Wraps the original error without losing its `source` chain. Cloning is
/// cheap: clones share the same underlying error.
///
/// Two `AttemptError`s are equal when their rendered chains of messages are
/// equal.
///
/// # Examples
///
/// ```rust
/// use vessel::control::AttemptError;
///
/// let error = AttemptError::msg("connection refused").context("loading profile");
/// assert_eq!(error.message(), "loading profile");
/// assert_eq!(error.root_cause().to_string(), "connection refused");
/// assert_eq!(error.chain().count(), 2);
/// ```
#[derive(Clone, thiserror::Error)]
#[error(transparent)]
pub struct AttemptError {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct Context {
    message: String,
    #[source]
    cause: AttemptError,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Panicked(String);

impl AttemptError {
    /// Wraps any error (or string) as an `AttemptError`.
    ///
    /// An `AttemptError` passed in is returned as is, so the original error
    /// stays reachable through [`downcast_ref`](Self::downcast_ref) and
    /// [`is_panic`](Self::is_panic).
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Self>() {
            Ok(existing) => *existing,
            Err(other) => Self {
                inner: Arc::from(other),
            },
        }
    }

    /// Creates an error carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Wraps this error as the cause of a new error with `message`.
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::new(Context {
            message: message.into(),
            cause: self,
        })
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "computation panicked".to_string());
        Self::new(Panicked(message))
    }

    /// The top-level message of this error.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns `true` if the error was captured from a panic.
    pub fn is_panic(&self) -> bool {
        self.downcast_ref::<Panicked>().is_some()
    }

    /// Iterates over this error followed by each of its causes.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let head: &(dyn StdError + 'static) = &*self.inner;
        std::iter::successors(Some(head), |&error| error.source())
    }

    /// The innermost cause of this error.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = &*self.inner;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// Attempts to view the wrapped error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Debug for AttemptError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("AttemptError");
        for error in self.chain() {
            tuple.field(&error.to_string());
        }
        tuple.finish()
    }
}

impl PartialEq for AttemptError {
    fn eq(&self, other: &Self) -> bool {
        self.chain()
            .map(ToString::to_string)
            .eq(other.chain().map(ToString::to_string))
    }
}

impl Eq for AttemptError {}

// =============================================================================
// Attempt
// =============================================================================

/// The outcome of a computation that may fail.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Attempt;
///
/// let parsed = Attempt::of(|| "42".parse::<i32>()).map(|n| n + 1);
/// assert_eq!(parsed, Attempt::Success(43));
///
/// let broken = Attempt::of(|| "forty-two".parse::<i32>()).map(|n| n + 1);
/// assert!(broken.is_failure());
/// assert_eq!(broken.get_or_else(0), 0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(AttemptError),
}

/// Runs `computation`, turning a returned error or a panic into `Failure`.
fn capture<T, F>(computation: F) -> Attempt<T>
where
    F: FnOnce() -> Result<T, AttemptError>,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(Ok(value)) => Attempt::Success(value),
        Ok(Err(error)) => {
            tracing::debug!(error = %error, panicked = false, "computation failed, captured as failure");
            Attempt::Failure(error)
        }
        Err(payload) => {
            let error = AttemptError::from_panic(&*payload);
            tracing::debug!(error = %error, panicked = true, "computation panicked, captured as failure");
            Attempt::Failure(error)
        }
    }
}

impl<T> Attempt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs a fallible computation now and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)`; `Err(error)` and panics become
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Attempt;
    ///
    /// let attempt = Attempt::of(|| Err::<i32, _>("boom"));
    /// assert_eq!(attempt.error().map(|error| error.message()), Some("boom".to_string()));
    /// ```
    pub fn of<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        capture(|| computation().map_err(AttemptError::new))
    }

    /// Runs a computation that can only fail by panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Attempt;
    ///
    /// assert_eq!(Attempt::catching(|| 42), Attempt::Success(42));
    ///
    /// let panicked = Attempt::<i32>::catching(|| panic!("XYZ provided"));
    /// assert_eq!(panicked.error().map(|error| error.message()), Some("XYZ provided".to_string()));
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        capture(|| Ok(computation()))
    }

    /// Wraps an already known value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an already known error.
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failure(AttemptError::new(error))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the computation produced a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the value of a success.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error of a failure.
    #[inline]
    pub const fn error(&self) -> Option<&AttemptError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms a success; a panic in `function` becomes a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Attempt;
    ///
    /// let doubled = Attempt::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, Attempt::Success(42));
    ///
    /// let divided = Attempt::success(0).map(|n: i32| 10 / n);
    /// assert!(divided.is_failure());
    /// ```
    pub fn map<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => capture(move || Ok(function(value))),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Transforms a success with a function that may return an error.
    pub fn try_map<U, E, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => capture(move || function(value).map_err(AttemptError::new)),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Chains a computation that itself returns an `Attempt`.
    ///
    /// A `Failure` is returned unchanged without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Attempt;
    ///
    /// fn throw_on_abc(text: String) -> Attempt<String> {
    ///     Attempt::of(|| if text == "ABC" { Err("ABC provided") } else { Ok(text) })
    /// }
    ///
    /// let chained = Attempt::success("ABC".to_string()).flat_map(throw_on_abc);
    /// assert!(chained.is_failure());
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self {
            Self::Success(value) => capture(move || Ok(function(value))).flatten(),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Alias for [`Attempt::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        self.flat_map(function)
    }

    /// Turns a success into a failure unless it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Failure(AttemptError::msg("predicate does not hold"))
            }
        })
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with a value computed from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(AttemptError) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => capture(move || Ok(function(error))),
        }
    }

    /// Replaces a failure with another attempt computed from its error.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(AttemptError) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => capture(move || Ok(function(error))).flatten(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value of a success or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value of a success or one computed from the error.
    #[inline]
    pub fn get_or_else_with<F>(self, function: F) -> T
    where
        F: FnOnce(AttemptError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the value, or hands the captured error back to the caller.
    ///
    /// # Errors
    ///
    /// Returns the captured [`AttemptError`] if this is a `Failure`.
    #[inline]
    pub fn get_or_else_throw(self) -> Result<T, AttemptError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Eliminates the `Attempt` by applying one of two functions.
    #[inline]
    pub fn fold<U, E, S>(self, on_failure: E, on_success: S) -> U
    where
        E: FnOnce(AttemptError) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs a side effect on the value of a success and returns `self`.
    #[inline]
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side effect on the error of a failure and returns `self`.
    #[inline]
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&AttemptError),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Consumes the `Attempt`, running `action` on the value of a success.
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Either`, keeping only the message of a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::{Attempt, Either};
    ///
    /// assert_eq!(Attempt::catching(|| 42).to_either(), Either::Right(42));
    /// assert_eq!(
    ///     Attempt::<i32>::failure("bad input").to_either(),
    ///     Either::Left("bad input".to_string())
    /// );
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<String, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error.message()),
        }
    }

    /// Converts into an `Either` that keeps the whole error.
    #[inline]
    pub fn into_either(self) -> Either<AttemptError, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error),
        }
    }

    /// Converts into an `Optional`, discarding the error of a failure.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }
}

impl<T> Attempt<Attempt<T>> {
    /// Collapses one level of nesting.
    #[inline]
    pub fn flatten(self) -> Attempt<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Attempt::Failure(error),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From / IntoIterator Implementations
// =============================================================================

impl<T> From<Attempt<T>> for Result<T, AttemptError> {
    #[inline]
    fn from(attempt: Attempt<T>) -> Self {
        attempt.get_or_else_throw()
    }
}

impl<T> From<Result<T, AttemptError>> for Attempt<T> {
    #[inline]
    fn from(result: Result<T, AttemptError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> IntoIterator for Attempt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.to_optional().into_iter()
    }
}

static_assertions::assert_impl_all!(AttemptError: Send, Sync, Clone);
static_assertions::assert_impl_all!(Attempt<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, thiserror::Error)]
    #[error("disk unavailable")]
    struct DiskError;

    #[rstest]
    fn panic_with_string_payload_keeps_message() {
        let attempt = Attempt::<i32>::catching(|| panic!("{} provided", "XYZ"));
        let error = attempt.error().cloned();
        assert_eq!(error.as_ref().map(AttemptError::message), Some("XYZ provided".to_string()));
        assert!(error.is_some_and(|error| error.is_panic()));
    }

    #[rstest]
    fn returned_error_is_not_a_panic() {
        let attempt = Attempt::<i32>::of(|| Err(DiskError));
        assert!(attempt.error().is_some_and(|error| !error.is_panic()));
        assert!(attempt.error().and_then(AttemptError::downcast_ref::<DiskError>).is_some());
    }

    #[rstest]
    fn context_builds_cause_chain() {
        let error = AttemptError::new(DiskError).context("saving report");
        let messages: Vec<String> = error.chain().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["saving report", "disk unavailable"]);
        assert_eq!(error.root_cause().to_string(), "disk unavailable");
    }

    #[rstest]
    fn errors_compare_by_message_chain() {
        assert_eq!(AttemptError::msg("a"), AttemptError::msg("a"));
        assert_ne!(AttemptError::msg("a"), AttemptError::msg("a").context("b"));
    }

    #[rstest]
    fn debug_lists_chain() {
        let error = AttemptError::msg("inner").context("outer");
        assert_eq!(format!("{error:?}"), "AttemptError(\"outer\", \"inner\")");
    }
}
