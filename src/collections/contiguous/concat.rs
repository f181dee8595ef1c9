use super::DynamicArray;

/// Creates a new [`DynamicArray`] holding clones of all elements of `a`, followed by all elements
/// of `b`.
///
/// The result is allocated once, with capacity exactly `a.len() + b.len()`, and shares nothing with
/// either input.
///
/// # Panics
/// Panics if the combined length overflows, or if its memory layout would exceed
/// [`isize::MAX`] bytes.
///
/// # Examples
/// ```
/// # use slice_lib::collections::contiguous::concat;
/// let joined = concat(&["A", "B"], &["C"]);
/// assert_eq!(&*joined, &["A", "B", "C"]);
/// assert_eq!(joined.cap(), 3);
/// ```
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> DynamicArray<T> {
    let total = a.len().saturating_add(b.len());
    let mut joined = DynamicArray::with_cap(total);

    joined.extend(a.iter().cloned());
    joined.extend(b.iter().cloned());

    joined
}
