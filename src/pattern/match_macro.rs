//! The `match_of!` macro, a compact spelling of a [`Match`](super::Match) chain.

/// Matches a subject against `pattern => handler` cases in order.
///
/// `match_of!(subject; p1 => h1, p2 => h2)` is equivalent to
/// `Match::on(&subject).case(p1, h1).case(p2, h2).get()`, so it evaluates
/// to `Result<R, MatchError>`.
///
/// # Examples
///
/// ```
/// use vessel::control::{Attempt, Optional};
/// use vessel::match_of;
/// use vessel::pattern::{absent, any, failure, present, success, wildcard};
///
/// let maybe = Optional::present(21);
/// let doubled = match_of!(maybe;
///     present(any()) => |n| n * 2,
///     absent() => |()| 0,
/// );
/// assert_eq!(doubled, Ok(42));
///
/// let parsed = Attempt::of(|| "x".parse::<i32>());
/// let label = match_of!(parsed;
///     success(wildcard()) => |()| "number",
///     failure(wildcard()) => |()| "not a number",
/// );
/// assert_eq!(label, Ok("not a number"));
/// ```
///
/// An unmatched subject yields a [`MatchError`](crate::pattern::MatchError):
///
/// ```
/// use vessel::match_of;
/// use vessel::pattern::equals;
///
/// let outcome = match_of!(7; equals(1) => |()| "one");
/// assert_eq!(outcome.unwrap_err().subject(), "7");
/// ```
#[macro_export]
macro_rules! match_of {
    ($subject:expr; $($pattern:expr => $handler:expr),+ $(,)?) => {
        $crate::pattern::Match::on(&$subject)
            $(.case($pattern, $handler))+
            .get()
    };
}
