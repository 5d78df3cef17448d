//! Comparison of slice ranges

/// Compare `a[start_a..]` with `b[start_b..]` over their overlapping prefix.
///
/// Returns `false` if either slice is absent or if a pair of elements differs.
/// The remaining lengths are *not* compared: a shorter range that matches the
/// start of a longer one counts as equal, and a start index at or past the end
/// of its slice yields an empty range, which matches anything.
///
/// # Examples
///
/// ```rust
/// use extensions_util::mem::sequence_equals;
///
/// let a = [1u8, 2, 3];
/// assert!(sequence_equals(Some(&a[..]), Some(&[9, 1, 2, 3][..]), 0, 1));
/// assert!(!sequence_equals(Some(&a[..]), Some(&[1, 2, 4][..]), 0, 0));
/// assert!(!sequence_equals(None, Some(&[1u8][..]), 0, 0));
///
/// // Only the overlap is inspected
/// assert!(sequence_equals(Some(&a[..]), Some(&[1, 2][..]), 0, 0));
/// ```
pub fn sequence_equals<T: PartialEq>(
    a: Option<&[T]>,
    b: Option<&[T]>,
    start_a: usize,
    start_b: usize,
) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    let tail_a = a.get(start_a..).unwrap_or_default();
    let tail_b = b.get(start_b..).unwrap_or_default();
    tail_a.iter().zip(tail_b).all(|(x, y)| x == y)
}
