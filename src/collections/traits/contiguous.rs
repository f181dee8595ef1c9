use crate::collections::contiguous::{Array, DynamicArray, Window};

/// A collection laid out in a single block of storage, which knows both how many elements it holds
/// and how many it could hold without reallocating.
pub trait Contiguous {
    /// The number of live elements.
    fn len(&self) -> usize;

    /// The number of slots in the storage reachable from the first element.
    fn cap(&self) -> usize;

    /// Returns true if there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of elements that can still be added without reallocating.
    fn spare(&self) -> usize {
        self.cap() - self.len()
    }
}

impl<T> Contiguous for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn cap(&self) -> usize {
        DynamicArray::cap(self)
    }
}

impl<T> Contiguous for Window<'_, T> {
    fn len(&self) -> usize {
        Window::len(self)
    }

    fn cap(&self) -> usize {
        Window::cap(self)
    }
}

impl<T> Contiguous for Array<T> {
    fn len(&self) -> usize {
        self.size()
    }

    fn cap(&self) -> usize {
        self.size()
    }
}
