//! Helpers for working with [Result]

/// Try block basically…returns a result and allows the use of the question mark operator inside
///
/// # Examples
///
/// ```rust
/// use extensions_util::attempt;
///
/// let parsed = attempt!({
///     let n: u8 = "42".parse()?;
///     Ok(n + 1)
/// });
/// assert_eq!(parsed.unwrap(), 43);
///
/// let failed = attempt!({
///     let n: u8 = "x".parse()?;
///     Ok(n)
/// });
/// assert!(failed.is_err());
/// ```
#[macro_export]
macro_rules! attempt {
    ($block:expr) => {
        (|| -> ::anyhow::Result<_> { $block })()
    };
}

/// Trait for the ok operation, which provides a way to convert a value into a Result
pub trait OkExt<E>: Sized {
    /// Wraps a value in a Result::Ok variant
    fn ok(self) -> Result<Self, E>;
}

impl<T, E> OkExt<E> for T {
    fn ok(self) -> Result<Self, E> {
        Ok(self)
    }
}

/// Checks a condition is true and returns an error if not.
///
/// # Examples
///
/// ```rust
/// # use extensions_util::result::ensure_or;
/// let result = ensure_or(5 > 3, "not greater");
/// assert!(result.is_ok());
///
/// let result = ensure_or(5 < 3, "not less");
/// assert!(result.is_err());
/// ```
pub fn ensure_or<E>(b: bool, err: E) -> Result<(), E> {
    match b {
        true => Ok(()),
        false => Err(err),
    }
}

/// Evaluates to an error if the condition is true.
///
/// # Examples
///
/// ```rust
/// # use extensions_util::result::bail_if;
/// let result = bail_if(false, "not bailed");
/// assert!(result.is_ok());
///
/// let result = bail_if(true, "bailed");
/// assert!(result.is_err());
/// ```
pub fn bail_if<E>(b: bool, err: E) -> Result<(), E> {
    ensure_or(!b, err)
}
