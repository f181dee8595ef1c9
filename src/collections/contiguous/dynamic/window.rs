use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Bound, Deref, RangeBounds};

use super::dynamic_array::{DynamicArray, fmt_elements};
use crate::util::error::WindowOutOfBounds;
use crate::util::result::ResultExtension;

/// A borrowed view over a run of elements of a [`DynamicArray`], with its own length and capacity.
///
/// The window sees `len` elements, but can reach further: its capacity spans from its first element
/// to the last live element of the array it was taken from. Re-windowing with
/// [`window`](Window::window) may extend past the current length, up to that capacity.
///
/// Windows share the array's storage. Because a window borrows the array, the array can't be
/// appended to (and so can't reallocate) while any window over it exists.
pub struct Window<'a, T> {
    reach: &'a [T],
    len: usize,
}

impl<'a, T> Window<'a, T> {
    pub(crate) const fn new(reach: &'a [T], len: usize) -> Window<'a, T> {
        Window { reach, len }
    }

    /// The elements from the start of the window up to its capacity.
    pub(crate) const fn reach(&self) -> &'a [T] {
        self.reach
    }

    /// Returns the number of elements visible through the window.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no elements are visible through the window.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the window can reach, starting from its first element.
    pub const fn cap(&self) -> usize {
        self.reach.len()
    }

    /// Creates a new window over `range`, relative to the start of this one. The range may extend
    /// past this window's length, up to its capacity.
    ///
    /// # Panics
    /// Panics if the range isn't contained in `0..cap`.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
    /// let window = arr.window(3..5);
    /// assert_eq!(&*window.window(..5), &[4, 5, 6, 7, 8]);
    /// ```
    #[track_caller]
    pub fn window<R: RangeBounds<usize>>(&self, range: R) -> Window<'a, T> {
        self.try_window(range).throw()
    }

    /// Creates a new window over `range`, like [`window`](Window::window).
    ///
    /// # Errors
    /// Returns [`WindowOutOfBounds`] if the range isn't contained in `0..cap`.
    pub fn try_window<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<Window<'a, T>, WindowOutOfBounds> {
        let (start, end) = resolve_window(range, self.len, self.cap())?;
        log::debug!("rewindow {start}..{end} over window of len {}, cap {}", self.len, self.cap());

        Ok(Window::new(&self.reach[start..], end - start))
    }

    /// Copies the visible elements into a new [`DynamicArray`], which no longer shares storage with
    /// the original. Its length and capacity both equal the window's length.
    pub fn to_dynamic(&self) -> DynamicArray<T>
    where
        T: Clone,
    {
        let mut arr = DynamicArray::with_cap(self.len);
        arr.extend(self.iter().cloned());
        arr
    }
}

/// Converts `range` into a pair of offsets. Unbounded ends resolve to `0` and `len`. Both offsets
/// must fall within `0..=cap`.
pub(crate) fn resolve_window<R: RangeBounds<usize>>(
    range: R,
    len: usize,
    cap: usize,
) -> Result<(usize, usize), WindowOutOfBounds> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end || end > cap {
        return Err(WindowOutOfBounds { start, end, cap });
    }

    Ok((start, end))
}

impl<T> Clone for Window<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Window<'_, T> {}

impl<T> Deref for Window<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.reach[..self.len]
    }
}

impl<T> AsRef<[T]> for Window<'_, T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T: PartialEq> PartialEq for Window<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Window<'_, T> {}

impl<T: Debug> Debug for Window<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Window<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_elements(self, f)
    }
}
