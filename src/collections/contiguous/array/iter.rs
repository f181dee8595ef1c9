use std::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;

use super::Array;
#[allow(unused)]
use crate::collections::contiguous::DynamicArray;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.size();
        // SAFETY: All values are initialized, and the iterator takes over responsibility for
        // dropping them.
        unsafe { IntoIter::new(self.forget_init(), end) }
    }
}

/// An owned iterator over the values of an [`Array`] or [`DynamicArray`]. See
/// [`Array::into_iter`] and [`DynamicArray::into_iter`].
///
/// The storage is released when the iterator is dropped, along with any values that weren't
/// yielded.
pub struct IntoIter<T> {
    storage: Array<MaybeUninit<T>>,
    head: usize,
    tail: usize,
}

impl<T> IntoIter<T> {
    /// # Safety
    /// The values in `storage` from `0` to `end` must be initialized.
    pub(crate) const unsafe fn new(storage: Array<MaybeUninit<T>>, end: usize) -> IntoIter<T> {
        IntoIter {
            storage,
            head: 0,
            tail: end,
        }
    }

    /// Returns the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        let remaining: *const [MaybeUninit<T>] = &self.storage[self.head..self.tail];
        // SAFETY: Values in head..tail are initialized and haven't been yielded yet. MaybeUninit<T>
        // has the same layout as T.
        unsafe { &*(remaining as *const [T]) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        // SAFETY: head < tail, so the value is initialized. Incrementing head afterwards means it
        // is never read again, effectively moving it out of the storage.
        let value = unsafe { self.storage[self.head].assume_init_read() };
        self.head += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        // SAFETY: The newly decremented tail is >= head, so the value is initialized and won't be
        // read again.
        Some(unsafe { self.storage[self.tail].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [MaybeUninit<T>] = &mut self.storage[self.head..self.tail];
        // SAFETY: The values between head and tail are initialized and haven't been moved out.
        // The storage itself is released by its own drop, which doesn't touch the values.
        unsafe { ptr::drop_in_place(remaining as *mut [T]) }
    }
}
