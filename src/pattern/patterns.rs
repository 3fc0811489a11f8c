//! The [`Pattern`] trait and the built-in patterns.
//!
//! A pattern both tests a subject and extracts bindings from it. Patterns
//! for `Optional`, `Attempt`, `Either` and tuples take sub-patterns, so a
//! shape such as "a pair whose first element is absent and whose second is
//! present" is written `pair(absent(), present(any()))`.
//!
//! Bindings are owned: `any()` and `when()` clone the matched part of the
//! subject, the other leaf patterns bind `()`.

use crate::control::{Attempt, AttemptError, Either, Optional};

/// A test over a subject of type `S` that extracts a binding on success.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
/// use vessel::pattern::{Pattern, absent, any, present};
///
/// let subject = Optional::present(3);
/// assert_eq!(present(any()).bind(&subject), Some(3));
/// assert_eq!(absent().bind(&subject), None);
/// ```
pub trait Pattern<S: ?Sized> {
    /// What a successful match hands to the case handler.
    type Binding;

    /// Returns the binding if `subject` matches, `None` otherwise.
    fn bind(&self, subject: &S) -> Option<Self::Binding>;

    /// Returns `true` if `subject` matches.
    fn matches(&self, subject: &S) -> bool {
        self.bind(subject).is_some()
    }
}

// =============================================================================
// Leaf Patterns
// =============================================================================

/// Matches anything and binds nothing. See [`wildcard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wildcard;

/// Matches anything and binds a copy of it. See [`any`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValue;

/// Matches values satisfying a predicate and binds a copy. See [`when`].
#[derive(Debug, Clone, Copy)]
pub struct When<F> {
    predicate: F,
}

/// Matches values equal to an expected value. See [`equals`].
#[derive(Debug, Clone, Copy)]
pub struct Equals<T> {
    expected: T,
}

/// Restricts a pattern by a predicate over its binding. See [`guarded`].
#[derive(Debug, Clone, Copy)]
pub struct Guarded<P, F> {
    pattern: P,
    predicate: F,
}

/// The catch-all pattern.
///
/// Putting `wildcard()` in the last case makes a match exhaustive.
pub const fn wildcard() -> Wildcard {
    Wildcard
}

/// Matches any value and binds a clone of it.
pub const fn any() -> AnyValue {
    AnyValue
}

/// Matches a value for which `predicate` holds and binds a clone of it.
///
/// The predicate's parameter type usually needs an annotation, since the
/// pattern is built before it is applied to a subject.
///
/// # Examples
///
/// ```rust
/// use vessel::pattern::{Pattern, when};
///
/// let shouty = when(|text: &&str| text.starts_with("LOL"));
/// assert_eq!(shouty.bind(&"LOL cats"), Some("LOL cats"));
/// assert_eq!(shouty.bind(&"cats"), None);
/// ```
pub const fn when<F>(predicate: F) -> When<F> {
    When { predicate }
}

/// Matches a value equal to `expected`.
pub const fn equals<T>(expected: T) -> Equals<T> {
    Equals { expected }
}

/// Matches when `pattern` matches and `predicate` holds for its binding.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
/// use vessel::pattern::{Pattern, any, guarded, present};
///
/// let big = guarded(present(any()), |value: &i32| *value > 10);
/// assert!(big.matches(&Optional::present(42)));
/// assert!(!big.matches(&Optional::present(1)));
/// assert!(!big.matches(&Optional::<i32>::absent()));
/// ```
pub const fn guarded<P, F>(pattern: P, predicate: F) -> Guarded<P, F> {
    Guarded { pattern, predicate }
}

impl<S: ?Sized> Pattern<S> for Wildcard {
    type Binding = ();

    #[inline]
    fn bind(&self, _subject: &S) -> Option<()> {
        Some(())
    }
}

impl<S: Clone> Pattern<S> for AnyValue {
    type Binding = S;

    #[inline]
    fn bind(&self, subject: &S) -> Option<S> {
        Some(subject.clone())
    }
}

impl<S, F> Pattern<S> for When<F>
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    type Binding = S;

    #[inline]
    fn bind(&self, subject: &S) -> Option<S> {
        (self.predicate)(subject).then(|| subject.clone())
    }
}

impl<S, T> Pattern<S> for Equals<T>
where
    S: PartialEq<T> + ?Sized,
{
    type Binding = ();

    #[inline]
    fn bind(&self, subject: &S) -> Option<()> {
        (*subject == self.expected).then_some(())
    }
}

impl<S, P, F> Pattern<S> for Guarded<P, F>
where
    S: ?Sized,
    P: Pattern<S>,
    F: Fn(&P::Binding) -> bool,
{
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &S) -> Option<P::Binding> {
        self.pattern
            .bind(subject)
            .filter(|binding| (self.predicate)(binding))
    }
}

// =============================================================================
// Container Deconstruction Patterns
// =============================================================================

/// Matches `Optional::Present` whose value matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct PresentPattern<P> {
    inner: P,
}

/// Matches `Optional::Absent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsentPattern;

/// Matches `Attempt::Success` whose value matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct SuccessPattern<P> {
    inner: P,
}

/// Matches `Attempt::Failure` whose error matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct FailurePattern<P> {
    inner: P,
}

/// Matches `Either::Left` whose value matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct LeftPattern<P> {
    inner: P,
}

/// Matches `Either::Right` whose value matches the inner pattern.
#[derive(Debug, Clone, Copy)]
pub struct RightPattern<P> {
    inner: P,
}

/// Deconstructs `Optional::Present`, matching its value against `inner`.
pub const fn present<P>(inner: P) -> PresentPattern<P> {
    PresentPattern { inner }
}

/// Deconstructs `Optional::Absent`.
pub const fn absent() -> AbsentPattern {
    AbsentPattern
}

/// Deconstructs `Attempt::Success`, matching its value against `inner`.
pub const fn success<P>(inner: P) -> SuccessPattern<P> {
    SuccessPattern { inner }
}

/// Deconstructs `Attempt::Failure`, matching its [`AttemptError`] against
/// `inner`.
pub const fn failure<P>(inner: P) -> FailurePattern<P> {
    FailurePattern { inner }
}

/// Deconstructs `Either::Left`, matching its value against `inner`.
pub const fn left<P>(inner: P) -> LeftPattern<P> {
    LeftPattern { inner }
}

/// Deconstructs `Either::Right`, matching its value against `inner`.
pub const fn right<P>(inner: P) -> RightPattern<P> {
    RightPattern { inner }
}

impl<T, P: Pattern<T>> Pattern<Optional<T>> for PresentPattern<P> {
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &Optional<T>) -> Option<P::Binding> {
        match subject {
            Optional::Present(value) => self.inner.bind(value),
            Optional::Absent => None,
        }
    }
}

impl<T> Pattern<Optional<T>> for AbsentPattern {
    type Binding = ();

    #[inline]
    fn bind(&self, subject: &Optional<T>) -> Option<()> {
        subject.is_absent().then_some(())
    }
}

impl<T, P: Pattern<T>> Pattern<Attempt<T>> for SuccessPattern<P> {
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &Attempt<T>) -> Option<P::Binding> {
        match subject {
            Attempt::Success(value) => self.inner.bind(value),
            Attempt::Failure(_) => None,
        }
    }
}

impl<T, P: Pattern<AttemptError>> Pattern<Attempt<T>> for FailurePattern<P> {
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &Attempt<T>) -> Option<P::Binding> {
        match subject {
            Attempt::Success(_) => None,
            Attempt::Failure(error) => self.inner.bind(error),
        }
    }
}

impl<L, R, P: Pattern<L>> Pattern<Either<L, R>> for LeftPattern<P> {
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &Either<L, R>) -> Option<P::Binding> {
        match subject {
            Either::Left(value) => self.inner.bind(value),
            Either::Right(_) => None,
        }
    }
}

impl<L, R, P: Pattern<R>> Pattern<Either<L, R>> for RightPattern<P> {
    type Binding = P::Binding;

    #[inline]
    fn bind(&self, subject: &Either<L, R>) -> Option<P::Binding> {
        match subject {
            Either::Left(_) => None,
            Either::Right(value) => self.inner.bind(value),
        }
    }
}

// =============================================================================
// Tuple Patterns
// =============================================================================

/// Matches a 2-tuple component-wise. See [`pair`].
#[derive(Debug, Clone, Copy)]
pub struct PairPattern<P1, P2> {
    first: P1,
    second: P2,
}

/// Matches a 3-tuple component-wise. See [`triple`].
#[derive(Debug, Clone, Copy)]
pub struct TriplePattern<P1, P2, P3> {
    first: P1,
    second: P2,
    third: P3,
}

/// Matches a pair when both components match; binds both bindings.
///
/// The second sub-pattern is not evaluated if the first one fails.
///
/// # Examples
///
/// ```rust
/// use vessel::control::Optional;
/// use vessel::pattern::{Pattern, absent, any, pair, present};
///
/// let subject = (Optional::<&str>::absent(), Optional::present("b"));
/// assert_eq!(pair(absent(), present(any())).bind(&subject), Some(((), "b")));
/// assert_eq!(pair(present(any()), absent()).bind(&subject), None);
/// ```
pub const fn pair<P1, P2>(first: P1, second: P2) -> PairPattern<P1, P2> {
    PairPattern { first, second }
}

/// Matches a triple when all three components match.
pub const fn triple<P1, P2, P3>(first: P1, second: P2, third: P3) -> TriplePattern<P1, P2, P3> {
    TriplePattern {
        first,
        second,
        third,
    }
}

impl<A, B, P1, P2> Pattern<(A, B)> for PairPattern<P1, P2>
where
    P1: Pattern<A>,
    P2: Pattern<B>,
{
    type Binding = (P1::Binding, P2::Binding);

    #[inline]
    fn bind(&self, subject: &(A, B)) -> Option<Self::Binding> {
        let first = self.first.bind(&subject.0)?;
        let second = self.second.bind(&subject.1)?;
        Some((first, second))
    }
}

impl<A, B, C, P1, P2, P3> Pattern<(A, B, C)> for TriplePattern<P1, P2, P3>
where
    P1: Pattern<A>,
    P2: Pattern<B>,
    P3: Pattern<C>,
{
    type Binding = (P1::Binding, P2::Binding, P3::Binding);

    #[inline]
    fn bind(&self, subject: &(A, B, C)) -> Option<Self::Binding> {
        let first = self.first.bind(&subject.0)?;
        let second = self.second.bind(&subject.1)?;
        let third = self.third.bind(&subject.2)?;
        Some((first, second, third))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn pair_skips_second_when_first_fails() {
        let calls = Cell::new(0);
        let counting = when(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        let pattern = pair(equals(1), counting);

        assert!(!pattern.matches(&(2, 5)));
        assert_eq!(calls.get(), 0);
        assert!(pattern.matches(&(1, 5)));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(Optional::present(5), true)]
    #[case(Optional::present(50), false)]
    #[case(Optional::absent(), false)]
    fn present_with_when_guards_value(#[case] subject: Optional<i32>, #[case] expected: bool) {
        let small = present(when(|value: &i32| *value < 10));
        assert_eq!(small.matches(&subject), expected);
    }

    #[rstest]
    fn failure_binds_error() {
        let subject: Attempt<i32> = Attempt::failure("XYZ provided");
        let message = failure(any()).bind(&subject).map(|error: AttemptError| error.message());
        assert_eq!(message, Some("XYZ provided".to_string()));
    }

    #[rstest]
    fn equals_compares_across_types() {
        assert!(equals("ABC").matches(&"ABC".to_string()));
        assert!(!equals("ABC").matches(&"XYZ".to_string()));
    }

    #[rstest]
    fn nested_either_in_optional() {
        let subject: Optional<Either<String, i32>> = Optional::present(Either::right(3));
        assert_eq!(present(right(any())).bind(&subject), Some(3));
        assert_eq!(present(left(any())).bind(&subject), None);
    }
}
