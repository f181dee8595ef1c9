use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use super::window::{Window, resolve_window};
use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, WindowOutOfBounds};
use crate::util::result::ResultExtension;

/// Capacity is multiplied by this when the storage is exhausted.
pub const GROWTH_FACTOR: usize = 2;
/// Extra slots added after multiplying, so that empty arrays still grow.
pub const GROWTH_OFFSET: usize = 1;

/// Returns the capacity that a full array of length `len` is reallocated to:
/// `len * GROWTH_FACTOR + GROWTH_OFFSET`.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the result doesn't fit in a [`usize`].
///
/// # Examples
/// ```
/// # use slice_lib::collections::contiguous::growth_target;
/// assert_eq!(growth_target(0), Ok(1));
/// assert_eq!(growth_target(7), Ok(15));
/// assert!(growth_target(usize::MAX).is_err());
/// ```
pub const fn growth_target(len: usize) -> Result<usize, CapacityOverflow> {
    match len.checked_mul(GROWTH_FACTOR) {
        Some(grown) => match grown.checked_add(GROWTH_OFFSET) {
            Some(cap) => Ok(cap),
            None => Err(CapacityOverflow),
        },
        None => Err(CapacityOverflow),
    }
}

/// A growable contiguous collection, backed by an [`Array<T>`] that it owns exclusively.
///
/// Unlike [`Vec`], the growth strategy is fixed: when an append finds the storage exhausted, it is
/// reallocated to exactly `2 * len + 1` slots (see [`growth_target`]). Appending is therefore
/// amortized `O(1)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `m`: The number of items in the window.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `window` | `O(1)` |
/// | `Window::to_dynamic` | `O(m)` |
///
/// \* If the storage is exhausted, the existing `n` items are moved into the new block.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. No memory is allocated until the
    /// first append.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// assert!(arr.is_unallocated());
    /// ```
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing that
    /// many values to be appended without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing storage. This is always exactly the value that
    /// the storage was last allocated with.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if no backing storage exists yet, which is the case for a DynamicArray created
    /// with [`new`](DynamicArray::new) that has never been appended to.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::new().append("a");
    /// assert!(!arr.is_unallocated());
    /// ```
    pub const fn is_unallocated(&self) -> bool {
        self.cap() == 0
    }

    /// Appends `value` to the end of the DynamicArray and returns the updated array.
    ///
    /// The returned value is the new state of the array and the old binding is consumed, so nothing
    /// can keep observing the storage from before a reallocation.
    ///
    /// # Panics
    /// Panics if the grown capacity overflows, or if its memory layout would exceed
    /// [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..=100 {
    ///     arr = arr.append(i);
    /// }
    /// assert_eq!(arr.len(), 101);
    /// assert!(arr.iter().copied().eq(0..=100));
    /// ```
    #[must_use = "append returns the updated array and consumes the old one"]
    pub fn append(mut self, value: T) -> DynamicArray<T> {
        self.push(value);
        self
    }

    /// Pushes `value` onto the end of the DynamicArray in place. If the storage is exhausted, it
    /// is first reallocated to [`growth_target(len)`](growth_target) slots.
    ///
    /// # Panics
    /// Panics if the grown capacity overflows, or if its memory layout would exceed
    /// [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// let mut caps = [0; 4];
    /// for cap in caps.iter_mut() {
    ///     arr.push(true);
    ///     *cap = arr.cap();
    /// }
    /// assert_eq!(caps, [1, 3, 3, 7]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: len < cap after growing, so the slot is inside the storage. Writing a
        // MaybeUninit never drops the stale contents of the slot.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)) };
        self.len += 1;
    }

    /// Creates a [`Window`] over the elements in `range`. The window's capacity reaches from the
    /// start of the range to the last live element, so it can later be widened with
    /// [`Window::window`].
    ///
    /// # Panics
    /// Panics if the range isn't contained in `0..len`.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
    /// let window = arr.window(3..5);
    /// assert_eq!(&*window, &[4, 5]);
    /// assert_eq!((window.len(), window.cap()), (2, 5));
    /// ```
    #[track_caller]
    pub fn window<R: RangeBounds<usize>>(&self, range: R) -> Window<'_, T> {
        self.try_window(range).throw()
    }

    /// Creates a [`Window`] over the elements in `range`, like [`window`](DynamicArray::window).
    ///
    /// # Errors
    /// Returns [`WindowOutOfBounds`] if the range isn't contained in `0..len`.
    pub fn try_window<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<Window<'_, T>, WindowOutOfBounds> {
        let (start, end) = resolve_window(range, self.len, self.len)?;
        log::debug!("window {start}..{end} over array of len {}", self.len);

        Ok(Window::new(&self[start..], end - start))
    }

    /// Reallocates the storage to make room for at least one more element, following
    /// [`growth_target`].
    ///
    /// # Panics
    /// Panics if the grown capacity overflows, or if its memory layout would exceed
    /// [`isize::MAX`] bytes.
    pub(crate) fn grow(&mut self) {
        let new_cap = growth_target(self.len).throw();
        log::trace!("reallocate: {} -> {}", self.len, new_cap);

        self.arr.realloc(new_cap);
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Creates a DynamicArray from an array literal, with length and capacity both equal to `N`.
    fn from(value: [T; N]) -> Self {
        let mut arr = DynamicArray::with_cap(N);
        arr.extend(value);
        arr
    }
}

impl<T> From<DynamicArray<T>> for Array<T> {
    /// Releases the unused tail of the storage and returns the live elements as an Array.
    fn from(value: DynamicArray<T>) -> Self {
        let len = value.len;
        let mut storage = value.into_storage();
        storage.realloc(len);

        // SAFETY: The storage now holds exactly the len live elements.
        unsafe { storage.assume_init() }
    }
}

impl<T> DynamicArray<T> {
    /// Takes the storage out of self without dropping any elements. The caller becomes responsible
    /// for the values in `0..len`.
    pub(crate) fn into_storage(self) -> Array<MaybeUninit<T>> {
        let mut this = ManuallyDrop::new(self);
        mem::take(&mut this.arr)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        let live: *mut [T] = &mut **self;
        // SAFETY: All values below len are initialized and are dropped exactly once, here.
        unsafe { ptr::drop_in_place(live) };

        // Implicitly drop self.arr, which only deallocates because MaybeUninit has no drop glue.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The storage is valid and aligned for cap values, of which the first len are
        // initialized. MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with uniqueness guaranteed by the &mut self borrow.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: DynamicArray uniquely owns its storage, so it is Send when T is Send.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: DynamicArray's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Clones the live elements into new storage with the same capacity.
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());
        arr.extend(self.iter().cloned());
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    /// Formats the elements separated by spaces, inside square brackets: `[1 2 3]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_elements(self, f)
    }
}

pub(crate) fn fmt_elements<T: Display>(values: &[T], f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        Display::fmt(value, f)?;
    }
    write!(f, "]")
}
