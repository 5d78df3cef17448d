//! Chaining combinators that swallow failures
//!
//! Every closure handed to a `safe_*` combinator returns a [Result]. An `Err`
//! ends the chain with `None` (or the fallback, for
//! [SafeMaybe::safe_return_or]) and the error itself is dropped. With the
//! `catch-panic` feature, which is on by default, a panic inside the closure
//! is treated the same way. The panic hook still runs, so the panic message
//! is printed as usual.

/// Run one caller supplied step, mapping an error or a panic to `None`
fn guarded<R, E, F>(combinator: &'static str, step: F) -> Option<R>
where
    F: FnOnce() -> Result<R, E>,
{
    match run_step(step) {
        Some(Ok(v)) => Some(v),
        Some(Err(_)) => {
            log::trace!("{combinator}: step returned an error, continuing with None");
            None
        }
        None => {
            log::trace!("{combinator}: step panicked, continuing with None");
            None
        }
    }
}

#[cfg(feature = "catch-panic")]
fn run_step<T, F: FnOnce() -> T>(step: F) -> Option<T> {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    // The chain is abandoned on panic, so state the closure left behind is never observed here
    catch_unwind(AssertUnwindSafe(step)).ok()
}

#[cfg(not(feature = "catch-panic"))]
fn run_step<T, F: FnOnce() -> T>(step: F) -> Option<T> {
    Some(step())
}

/// Absence propagating combinators for [Option] that turn failing steps into absence
///
/// # Examples
///
/// ```rust
/// use extensions_maybe::{SafeMaybe, SomeExt};
///
/// let port = "8080"
///     .some()
///     .safe_with_some(|s| s.parse::<u16>())
///     .safe_when(|p| Ok::<_, ()>(*p >= 1024));
/// assert_eq!(port, Some(8080));
///
/// let port = "http".some().safe_with_some(|s| s.parse::<u16>());
/// assert_eq!(port, None);
/// ```
pub trait SafeMaybe<T>: Sized {
    /// Apply `f`; an error from `f` yields `None`
    fn safe_with<R, E, F: FnOnce(T) -> Result<Option<R>, E>>(self, f: F) -> Option<R>;

    /// Apply `f`, whose successful result is always present; an error yields `None`
    fn safe_with_some<R, E, F: FnOnce(T) -> Result<R, E>>(self, f: F) -> Option<R> {
        self.safe_with(|v| f(v).map(Some))
    }

    /// Resolve the chain: `f(value)` if present and successful, otherwise `fallback`
    ///
    /// ```rust
    /// use extensions_maybe::SafeMaybe;
    ///
    /// let parse = |s: &str| s.parse::<i32>();
    /// assert_eq!(Some("12").safe_return_or(parse, -1), 12);
    /// assert_eq!(Some("twelve").safe_return_or(parse, -1), -1);
    /// assert_eq!(None::<&str>.safe_return_or(parse, -1), -1);
    /// ```
    fn safe_return_or<R, E, F: FnOnce(T) -> Result<R, E>>(self, f: F, fallback: R) -> R;

    /// Whether a value is present
    fn safe_return_success(&self) -> bool;

    /// Keep the value only if `predicate` succeeds and holds
    fn safe_when<E, P: FnOnce(&T) -> Result<bool, E>>(self, predicate: P) -> Option<T>;

    /// Run `action` for its side effect; if it fails the value is dropped and `None` returned
    fn safe_then_do<E, A: FnOnce(&T) -> Result<(), E>>(self, action: A) -> Option<T>;
}

impl<T> SafeMaybe<T> for Option<T> {
    fn safe_with<R, E, F: FnOnce(T) -> Result<Option<R>, E>>(self, f: F) -> Option<R> {
        let v = self?;
        guarded("safe_with", || f(v)).flatten()
    }

    fn safe_return_or<R, E, F: FnOnce(T) -> Result<R, E>>(self, f: F, fallback: R) -> R {
        match self {
            Some(v) => guarded("safe_return_or", || f(v)).unwrap_or(fallback),
            None => fallback,
        }
    }

    fn safe_return_success(&self) -> bool {
        self.is_some()
    }

    fn safe_when<E, P: FnOnce(&T) -> Result<bool, E>>(self, predicate: P) -> Option<T> {
        let v = self?;
        let keep = guarded("safe_when", || predicate(&v))?;
        keep.then_some(v)
    }

    fn safe_then_do<E, A: FnOnce(&T) -> Result<(), E>>(self, action: A) -> Option<T> {
        let v = self?;
        guarded("safe_then_do", || action(&v))?;
        Some(v)
    }
}
