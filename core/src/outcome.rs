use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Value that is either a success carrying `T` or a failure carrying `E`.
///
/// Outcome is immutable, every combinator consumes it and hands back either
/// a new Outcome or a plain value.
///
/// ```rust
/// use outcome_core::Outcome;
///
/// let squared: Outcome<i32, String> = Outcome::success(2)
///     .and_then(|x| Outcome::success(x * x))
///     .and_then(|x| Outcome::success(x * x));
///
/// assert_eq!(squared, Outcome::success(16));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates Success variant holding given value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates Failure variant holding given error value.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns true if self is a Success holding value equal to `candidate`.
    pub fn contains<U>(&self, candidate: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Outcome::Success(value) => candidate == value,
            Outcome::Failure(_) => false,
        }
    }

    /// Returns true if self is a Failure holding value equal to `candidate`.
    pub fn contains_failure<F>(&self, candidate: &F) -> bool
    where
        F: PartialEq<E>,
    {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => candidate == error,
        }
    }

    /// Borrows held value, lets caller inspect it without consuming self.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns held success value.
    ///
    /// # Panics
    ///
    /// Panics if self is a Failure. Calling it on a Failure is a bug in the
    /// caller, use `unwrap_or`, `unwrap_or_else` or a `match` to handle it.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                contract_violation("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Returns held failure value.
    ///
    /// # Panics
    ///
    /// Panics if self is a Success.
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(value) => contract_violation(
                "called `Outcome::unwrap_failure()` on a `Success` value",
                &value,
            ),
            Outcome::Failure(error) => error,
        }
    }

    /// Same as `unwrap` but panics with caller's message.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => contract_violation(msg, &error),
        }
    }

    /// Same as `unwrap_failure` but panics with caller's message.
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(value) => contract_violation(msg, &value),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns held success value or `default`.
    ///
    /// `default` is evaluated before the call, pass a closure to
    /// `unwrap_or_else` when computing it is expensive.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns held success value or computes one from the failure value.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => fallback(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => T::default(),
        }
    }

    /// Maps held success value, leaves Failure untouched.
    ///
    /// ```rust
    /// use outcome_core::Outcome;
    ///
    /// let five: Outcome<i32, ()> = Outcome::success(5);
    /// assert_eq!(five.map(|x| x.to_string()), Outcome::success("5".to_string()));
    /// ```
    pub fn map<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(op(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps held failure value, leaves Success untouched.
    pub fn map_failure<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Applies `op` to held success value or returns `default`.
    ///
    /// Like `unwrap_or`, `default` is evaluated eagerly whichever variant
    /// self is.
    pub fn map_or<U, O>(self, default: U, op: O) -> U
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(_) => default,
        }
    }

    /// Applies `op` to held success value or `fallback` to held failure value.
    pub fn map_or_else<U, D, O>(self, fallback: D, op: O) -> U
    where
        D: FnOnce(E) -> U,
        O: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(error) => fallback(error),
        }
    }

    /// Returns `next` if self is a Success, otherwise self's failure.
    ///
    /// `next` is built before the call. Use `and_then` when it should only
    /// be computed on the Success path.
    pub fn and<U>(self, next: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => next,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains another fallible computation, called only on Success.
    pub fn and_then<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns self's success, otherwise `next`.
    pub fn or<F>(self, next: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => next,
        }
    }

    /// Recovers from a failure with another fallible computation, called
    /// only on Failure.
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => op(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Leaves Outcome land at an application boundary, wrapping failure
    /// in anyhow::Error with additional context.
    pub fn context<C>(self, context: C) -> anyhow::Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
        C: Display + Send + Sync + 'static,
    {
        use anyhow::Context;

        self.into_result().context(context)
    }
}

#[track_caller]
#[inline(never)]
#[cold]
fn contract_violation(msg: &str, held: &dyn Debug) -> ! {
    panic!("{}: {:?}", msg, held)
}

impl<T, E> Display for Outcome<T, E>
where
    T: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Turns standard Result into Outcome.
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_tags() {
        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert!(ok.is_success());
        assert!(!ok.is_failure());

        let err: Outcome<i32, &str> = Outcome::failure("boom");
        assert!(err.is_failure());
        assert!(!err.is_success());
    }

    #[test]
    fn test_contains() {
        let ok: Outcome<i32, i32> = Outcome::success(1);
        assert!(ok.contains(&1));
        assert!(!ok.contains(&2));
        assert!(!ok.contains_failure(&1));

        let err: Outcome<i32, i32> = Outcome::failure(1);
        assert!(err.contains_failure(&1));
        assert!(!err.contains_failure(&2));
        assert!(!err.contains(&1));

        let text: Outcome<String, ()> = Outcome::success("foo".into());
        assert!(text.contains(&"foo"));
    }

    #[test]
    fn test_equality_and_hash() {
        let a: Outcome<i32, i32> = Outcome::success(7);
        let b: Outcome<i32, i32> = Outcome::success(7);
        let c: Outcome<i32, i32> = Outcome::failure(7);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        // same held value under a different tag
        assert_ne!(a, c);
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Outcome::<_, ()>::success(3).unwrap(), 3);
        assert_eq!(Outcome::<(), _>::failure("e").unwrap_failure(), "e");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: \"x\"")]
    fn test_unwrap_on_failure_panics() {
        let _ = Outcome::<i32, _>::failure("x").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value: 5")]
    fn test_unwrap_failure_on_success_panics() {
        let _ = Outcome::<_, ()>::success(5).unwrap_failure();
    }

    #[test]
    #[should_panic(expected = "config must load: \"missing\"")]
    fn test_expect_message() {
        let _ = Outcome::<i32, _>::failure("missing").expect("config must load");
    }

    #[test]
    fn test_expect_failure() {
        let err: Outcome<i32, &str> = Outcome::failure("gone");
        assert_eq!(err.expect_failure("should have failed"), "gone");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Outcome::<_, &str>::success(9).unwrap_or(2), 9);
        assert_eq!(Outcome::<i32, _>::failure("e").unwrap_or(2), 2);
        assert_eq!(
            Outcome::<usize, _>::failure("four").unwrap_or_else(|e| e.len()),
            4
        );
        assert_eq!(Outcome::<String, ()>::failure(()).unwrap_or_default(), "");
    }

    #[test]
    fn test_map_or() {
        let foo: Outcome<&str, &str> = Outcome::success("foo");
        assert_eq!(foo.map_or(42, |s| s.len()), 3);

        let bar: Outcome<&str, &str> = Outcome::failure("bar");
        assert_eq!(bar.map_or(42, |s| s.len()), 42);

        let k = 21;
        let ok: Outcome<&str, &str> = Outcome::success("foo");
        assert_eq!(ok.map_or_else(|_| k * 2, |s| s.len()), 3);
        let err: Outcome<&str, &str> = Outcome::failure("bar");
        assert_eq!(err.map_or_else(|_| k * 2, |s| s.len()), 42);
    }

    #[test]
    fn test_map_failure() {
        let err: Outcome<i32, i32> = Outcome::failure(13);
        assert_eq!(
            err.map_failure(|e| format!("error code: {}", e)),
            Outcome::failure("error code: 13".to_string())
        );

        let ok: Outcome<i32, i32> = Outcome::success(2);
        assert_eq!(ok.map_failure(|e| e.to_string()), Outcome::success(2));
    }

    #[test]
    fn test_and_or() {
        let x: Outcome<i32, &str> = Outcome::success(2);
        assert_eq!(x.and(Outcome::<&str, _>::failure("late")), Outcome::failure("late"));

        let x: Outcome<i32, &str> = Outcome::failure("early");
        assert_eq!(x.and(Outcome::success("foo")), Outcome::failure("early"));

        let x: Outcome<i32, &str> = Outcome::success(2);
        assert_eq!(x.or(Outcome::<_, i32>::failure(0)), Outcome::success(2));

        let x: Outcome<i32, &str> = Outcome::failure("early");
        assert_eq!(x.or(Outcome::<_, ()>::success(7)), Outcome::success(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::<_, String>::success(5).to_string(), "Success(5)");
        assert_eq!(Outcome::<i32, _>::failure("boom").to_string(), "Failure(boom)");
        assert_eq!(format!("{:?}", Outcome::<_, ()>::success("a")), "Success(\"a\")");
    }

    #[test]
    fn test_result_conversions() {
        let parsed: Outcome<i32, _> = "12".parse::<i32>().into_outcome();
        assert_eq!(parsed, Outcome::success(12));

        let failed: Outcome<i32, _> = "x".parse::<i32>().into();
        assert!(failed.is_failure());

        let back: Result<i32, String> = Outcome::<i32, String>::failure("no".to_string()).into();
        assert_eq!(back, Err("no".to_string()));
    }

    #[test]
    fn test_context() {
        let err = "x"
            .parse::<i32>()
            .into_outcome()
            .context("parsing port")
            .unwrap_err();
        assert_eq!(err.to_string(), "parsing port");
        assert!(err.root_cause().to_string().contains("invalid digit"));
    }

    #[test]
    fn test_serde_representation() -> anyhow::Result<()> {
        let ok: Outcome<i32, String> = Outcome::success(1);
        assert_eq!(serde_json::to_string(&ok)?, r#"{"success":1}"#);

        let err: Outcome<i32, String> = serde_json::from_str(r#"{"failure":"boom"}"#)?;
        assert_eq!(err, Outcome::failure("boom".to_string()));
        Ok(())
    }
}
