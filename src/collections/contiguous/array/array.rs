use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A block of memory holding exactly `size` values of `T`, sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>), but it can also be reallocated while its contents are
/// [`MaybeUninit`].
///
/// This is the backing storage of a [`DynamicArray`](super::super::DynamicArray), which tracks
/// which of the slots are initialized.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The allocator may be able to resize the block in place, otherwise all `n` items are copied.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Decomposes an Array into a pointer to its data and its size, without dropping anything.
    /// The parts can be passed to [`Array::from_parts`] to rebuild the Array.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.size);
        mem::forget(self);
        parts
    }

    /// Rebuilds an Array from the parts produced by [`Array::into_parts`].
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be allocated in the global allocator with the layout of `size` values of
    ///   `T`, or be dangling if that layout has size zero.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Reinterprets self as an `Array<MaybeUninit<T>>`, so that it can be reallocated. The values
    /// won't be dropped by the new Array.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::{Array, DynamicArray};
    /// # use std::mem::MaybeUninit;
    /// let arr = Array::from(DynamicArray::from([1_u8, 2, 3]));
    /// let mut storage = arr.forget_init();
    ///
    /// storage.realloc(4);
    /// storage[3] = MaybeUninit::new(4);
    ///
    /// // SAFETY: All values in storage are now initialized.
    /// let arr = unsafe { storage.assume_init() };
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the allocation is unchanged and any
        // initialized T is a valid MaybeUninit<T>.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Array<T> {
    /// Creates the [`Layout`] of `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates memory for the provided [`Layout`]. Returns a dangling pointer for a zero-sized
    /// layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every value in the Array is initialized. Failing to
    /// do so is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The layouts are identical and the caller guarantees that all values are
        // initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to hold exactly `new_size` values. Values below both the old and new
    /// size keep their position; new slots are uninitialized. Values above `new_size` are
    /// discarded without being dropped, because their state is unknown.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use slice_lib::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::<u32>::new_uninit(1);
    /// arr[0] = MaybeUninit::new(7);
    /// arr.realloc(3);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(unsafe { arr[0].assume_init() }, 7);
    /// ```
    pub fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let old_layout = Self::make_layout(self.size);
        let new_layout = Self::make_layout(new_size);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types never need memory, only the size changes.
            (0, 0) => self.ptr,
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout. new_bytes is
                // non-zero and has already been checked against isize::MAX by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All values of an Array<T> are initialized and are dropped exactly once, here.
        // For MaybeUninit<T>, this is a no-op.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size)) };

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout when the
            // layout is not zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values. All values are initialized (in the sense of T) and the total
        // size is no greater than isize::MAX.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with uniqueness guaranteed by the &mut self borrow.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays uniquely own their allocation, so they are Send when T is Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
