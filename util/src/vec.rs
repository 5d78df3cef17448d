//! Appending to collections in a chainable way

/// Extension trait that appends items and hands the collection back
///
/// Implemented for every collection that implements [Extend], so it works with
/// [Vec], [std::collections::VecDeque], [String] (for chars) and the like.
///
/// # Examples
///
/// ```rust
/// use extensions_util::vec::AppendAll;
///
/// let mut list = vec![1, 2];
/// list.append_all([3, 4]).append_all(vec![5]);
/// assert_eq!(list, [1, 2, 3, 4, 5]);
/// ```
pub trait AppendAll<T> {
    /// Append every item of `items` in order and return `self`
    fn append_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self;
}

impl<T, C: Extend<T>> AppendAll<T> for C {
    fn append_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.extend(items);
        self
    }
}

/// Append the listed values to a collection and evaluate to `&mut` the collection
///
/// # Examples
///
/// ```rust
/// use extensions_util::append_all;
///
/// let mut list = Vec::new();
/// append_all!(list; 1, 2, 3);
/// assert_eq!(list, [1, 2, 3]);
///
/// assert_eq!(append_all!(list; 4).len(), 4);
/// ```
#[macro_export]
macro_rules! append_all {
    ($list:expr; $($item:expr),* $(,)?) => {
        $crate::vec::AppendAll::append_all(&mut $list, [$($item),*])
    };
}
