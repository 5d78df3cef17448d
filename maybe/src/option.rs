/// A helper trait for turning any type value into `Some(value)`.
///
/// Lets a chain start from a plain value:
///
/// ```rust
/// use extensions_maybe::{Maybe, SomeExt};
///
/// assert_eq!("abc".some().with_some(str::len), Some(3));
/// ```
pub trait SomeExt: Sized {
    /// Wraps the calling value in `Some()`.
    fn some(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> SomeExt for T {}
