//! Ordered, first-match-wins evaluation of cases against one subject.

use std::fmt;

use super::patterns::Pattern;

/// Returned when no case matched the subject.
///
/// This signals a missing catch-all case, not a problem with the data.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
/// use vessel::pattern::{Match, present, any};
///
/// let subject: Optional<i32> = Optional::absent();
/// let error = Match::on(&subject).case(present(any()), |n| n * 2).get().unwrap_err();
/// assert_eq!(error.subject(), "Absent");
/// assert_eq!(error.to_string(), "no case matched subject: Absent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no case matched subject: {subject}")]
pub struct MatchError {
    subject: String,
}

impl MatchError {
    /// Creates an error for the given (already rendered) subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// The `Debug` rendering of the subject that no case matched.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// A pattern match over a borrowed subject.
///
/// Cases are added in order with [`Match::case`]. The first case whose
/// pattern matches runs its handler; from then on every later case is
/// skipped without evaluating its pattern or handler.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
/// use vessel::pattern::{Match, absent, any, present, when};
///
/// fn describe(value: Option<&str>) -> String {
///     let subject = Optional::of(value);
///     Match::on(&subject)
///         .case(absent(), |()| "default".to_string())
///         .case(present(when(|v: &&str| v.starts_with("LOL"))), |v| format!("{v}123"))
///         .case(present(when(|v: &&str| v.starts_with("YOLO"))), |v| format!("{v}456"))
///         .case(present(any()), |v| format!("{v}789"))
///         .get()
///         .unwrap_or_default()
/// }
///
/// assert_eq!(describe(None), "default");
/// assert_eq!(describe(Some("LOL")), "LOL123");
/// assert_eq!(describe(Some("YOLO")), "YOLO456");
/// assert_eq!(describe(Some("meh")), "meh789");
/// ```
#[must_use = "a match does nothing until it is finished with `get`, `otherwise` or `run`"]
pub struct Match<'s, S: ?Sized, R> {
    subject: &'s S,
    outcome: Option<R>,
}

impl<'s, S: ?Sized, R> Match<'s, S, R> {
    /// Starts a match over `subject`.
    #[inline]
    pub const fn on(subject: &'s S) -> Self {
        Self {
            subject,
            outcome: None,
        }
    }

    /// Adds a case.
    ///
    /// If no earlier case has matched and `pattern` matches the subject,
    /// `handler` runs with the pattern's binding.
    #[inline]
    pub fn case<P, F>(mut self, pattern: P, handler: F) -> Self
    where
        P: Pattern<S>,
        F: FnOnce(P::Binding) -> R,
    {
        if self.outcome.is_none()
            && let Some(binding) = pattern.bind(self.subject)
        {
            self.outcome = Some(handler(binding));
        }
        self
    }

    /// Adds a case that also requires `guard` to hold for the binding.
    ///
    /// Unlike [`when`](super::when), the guard's parameter type is known
    /// from the pattern and needs no annotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::control::Optional;
    /// use vessel::pattern::{Match, any, present, wildcard};
    ///
    /// let subject = Optional::present("LOL cats".to_string());
    /// let label = Match::on(&subject)
    ///     .case_if(present(any()), |v| v.starts_with("LOL"), |_| "1st condition")
    ///     .case(wildcard(), |()| "default")
    ///     .get();
    /// assert_eq!(label, Ok("1st condition"));
    /// ```
    #[inline]
    pub fn case_if<P, G, F>(mut self, pattern: P, guard: G, handler: F) -> Self
    where
        P: Pattern<S>,
        G: FnOnce(&P::Binding) -> bool,
        F: FnOnce(P::Binding) -> R,
    {
        if self.outcome.is_none()
            && let Some(binding) = pattern.bind(self.subject).filter(|binding| guard(binding))
        {
            self.outcome = Some(handler(binding));
        }
        self
    }

    /// Returns `true` once some case has matched.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    /// Finishes the match with a catch-all result for an unmatched subject.
    ///
    /// `default` runs only if no case matched.
    #[inline]
    pub fn otherwise<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.outcome.unwrap_or_else(default)
    }

    /// Finishes the match.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] naming the subject if no case matched.
    pub fn get(self) -> Result<R, MatchError>
    where
        S: fmt::Debug,
    {
        self.outcome.ok_or_else(|| {
            let subject = format!("{:?}", self.subject);
            tracing::debug!(subject = %subject, "no case matched");
            MatchError::new(subject)
        })
    }
}

impl<S: ?Sized + fmt::Debug> Match<'_, S, ()> {
    /// Finishes a match whose handlers only perform side effects.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] naming the subject if no case matched.
    #[inline]
    pub fn run(self) -> Result<(), MatchError> {
        self.get()
    }
}

impl<S: ?Sized + fmt::Debug, R: fmt::Debug> fmt::Debug for Match<'_, S, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Match")
            .field("subject", &self.subject)
            .field("outcome", &self.outcome)
            .finish()
    }
}
