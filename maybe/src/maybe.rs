//! Chaining combinators that propagate failures
//!
//! Every combinator leaves `None` alone without calling its closure. The
//! `try_*` variants accept fallible closures and hand their error straight
//! back to the caller.

/// Absence propagating combinators for [Option]
///
/// # Examples
///
/// ```rust
/// use extensions_maybe::{Maybe, SomeExt};
///
/// let mut seen = Vec::new();
/// let out = "abc"
///     .some()
///     .with_some(|s| s.len())
///     .when(|n| *n == 3)
///     .then_do(|n| seen.push(*n));
///
/// assert_eq!(out, Some(3));
/// assert_eq!(seen, [3]);
/// ```
pub trait Maybe<T>: Sized {
    /// Apply `f`, which may itself produce `None`
    ///
    /// ```rust
    /// use extensions_maybe::Maybe;
    ///
    /// let first_char = |s: &str| s.chars().next();
    /// assert_eq!(Some("xyz").with(first_char), Some('x'));
    /// assert_eq!(Some("").with(first_char), None);
    /// assert_eq!(None::<&str>.with(first_char), None);
    /// ```
    fn with<R, F: FnOnce(T) -> Option<R>>(self, f: F) -> Option<R>;

    /// Apply `f`, whose result is always present
    fn with_some<R, F: FnOnce(T) -> R>(self, f: F) -> Option<R> {
        self.with(|v| Some(f(v)))
    }

    /// Like [Maybe::with], but `f` may fail; its error is returned unchanged
    ///
    /// ```rust
    /// use extensions_maybe::Maybe;
    ///
    /// let parse = |s: &str| s.parse::<u8>().map(Some);
    /// assert_eq!(Some("7").try_with(parse), Ok(Some(7)));
    /// assert!(Some("x").try_with(parse).is_err());
    /// assert_eq!(None::<&str>.try_with(parse), Ok(None));
    /// ```
    fn try_with<R, E, F: FnOnce(T) -> Result<Option<R>, E>>(self, f: F) -> Result<Option<R>, E>;

    /// Resolve the chain: `f(value)` if present, otherwise `fallback`
    ///
    /// ```rust
    /// use extensions_maybe::Maybe;
    ///
    /// assert_eq!(Some(20).return_or(|n| n * 2, 0), 40);
    /// assert_eq!(None::<i32>.return_or(|n| n * 2, 0), 0);
    /// ```
    fn return_or<R, F: FnOnce(T) -> R>(self, f: F, fallback: R) -> R;

    /// Like [Maybe::return_or], but `f` may fail; its error is returned unchanged
    fn try_return_or<R, E, F: FnOnce(T) -> Result<R, E>>(self, f: F, fallback: R) -> Result<R, E>;

    /// Whether a value is present
    fn return_success(&self) -> bool;

    /// Keep the value only if `predicate` holds
    ///
    /// ```rust
    /// use extensions_maybe::Maybe;
    ///
    /// assert_eq!(Some(4).when(|n| n % 2 == 0), Some(4));
    /// assert_eq!(Some(5).when(|n| n % 2 == 0), None);
    /// ```
    fn when<P: FnOnce(&T) -> bool>(self, predicate: P) -> Option<T>;

    /// Like [Maybe::when], but `predicate` may fail; its error is returned unchanged
    fn try_when<E, P: FnOnce(&T) -> Result<bool, E>>(self, predicate: P) -> Result<Option<T>, E>;

    /// Run `action` for its side effect and pass the value on
    fn then_do<A: FnOnce(&T)>(self, action: A) -> Option<T>;

    /// Like [Maybe::then_do], but `action` may fail; its error is returned unchanged
    fn try_then_do<E, A: FnOnce(&T) -> Result<(), E>>(self, action: A) -> Result<Option<T>, E>;
}

impl<T> Maybe<T> for Option<T> {
    fn with<R, F: FnOnce(T) -> Option<R>>(self, f: F) -> Option<R> {
        match self {
            Some(v) => f(v),
            None => None,
        }
    }

    fn try_with<R, E, F: FnOnce(T) -> Result<Option<R>, E>>(self, f: F) -> Result<Option<R>, E> {
        match self {
            Some(v) => f(v),
            None => Ok(None),
        }
    }

    fn return_or<R, F: FnOnce(T) -> R>(self, f: F, fallback: R) -> R {
        match self {
            Some(v) => f(v),
            None => fallback,
        }
    }

    fn try_return_or<R, E, F: FnOnce(T) -> Result<R, E>>(self, f: F, fallback: R) -> Result<R, E> {
        match self {
            Some(v) => f(v),
            None => Ok(fallback),
        }
    }

    fn return_success(&self) -> bool {
        self.is_some()
    }

    fn when<P: FnOnce(&T) -> bool>(self, predicate: P) -> Option<T> {
        let v = self?;
        predicate(&v).then_some(v)
    }

    fn try_when<E, P: FnOnce(&T) -> Result<bool, E>>(self, predicate: P) -> Result<Option<T>, E> {
        let Some(v) = self else {
            return Ok(None);
        };
        Ok(predicate(&v)?.then_some(v))
    }

    fn then_do<A: FnOnce(&T)>(self, action: A) -> Option<T> {
        let v = self?;
        action(&v);
        Some(v)
    }

    fn try_then_do<E, A: FnOnce(&T) -> Result<(), E>>(self, action: A) -> Result<Option<T>, E> {
        let Some(v) = self else {
            return Ok(None);
        };
        action(&v)?;
        Ok(Some(v))
    }
}
