#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::mem::MaybeUninit;

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::util::panic::assert_panics;
use crate::util::test_types::{DropTally, Unit};

fn filled(values: impl IntoIterator<Item = usize>) -> Array<usize> {
    Array::from(values.into_iter().collect::<DynamicArray<_>>())
}

#[test]
fn test_zst_support() {
    let mut storage = Array::<Unit>::new_uninit(5);
    let old_ptr = storage.ptr;

    storage.realloc(30);
    assert_eq!(storage.size(), 30);
    assert_eq!(
        storage.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );

    for slot in storage.iter_mut() {
        slot.write(Unit);
    }
    // SAFETY: Every slot has just been written.
    let arr = unsafe { storage.assume_init() };
    assert_eq!(arr.iter().filter(|u| **u == Unit).count(), 30);
}

#[test]
fn test_realloc() {
    let mut storage = Array::<usize>::new_uninit(0);
    let dangling = storage.ptr;

    storage.realloc(0);
    assert_eq!(
        storage.ptr, dangling,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    storage.realloc(10);
    assert_ne!(
        storage.ptr, dangling,
        "Pointer should be replaced with an allocated one."
    );

    for (i, slot) in storage.iter_mut().enumerate() {
        slot.write(i);
    }

    storage.realloc(15);
    assert_eq!(storage.size(), 15);
    for i in 0..10 {
        assert_eq!(
            // SAFETY: Values below 10 were initialized before growing.
            unsafe { storage[i].assume_init() }, i,
            "When growing, all elements should remain in the Array."
        );
    }

    storage.realloc(0);
    assert_eq!(storage.size(), 0);

    assert_panics!({
        let mut storage = Array::<u64>::new_uninit(1);
        storage.realloc(isize::MAX as usize);
    });
}

#[test]
fn test_forget_and_assume_init() {
    let arr = filled(0..3);
    let mut storage = arr.forget_init();

    storage.realloc(4);
    storage[3] = MaybeUninit::new(3);

    // SAFETY: The first three values were carried over and the fourth was just written.
    let arr = unsafe { storage.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3]);
}

#[test]
fn test_drop() {
    let tally = DropTally::new();
    let arr = Array::from(
        (0..10).map(|_| tally.track()).collect::<DynamicArray<_>>()
    );

    drop(arr);

    assert_eq!(tally.dropped(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = filled(0..5);

    assert_eq!(
        arr,
        Array::from(DynamicArray::from([0, 1, 2, 3, 4])),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from(DynamicArray::from([0, 1, 2, 5, 4])), filled(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = filled(0..5);

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let tally = DropTally::new();
    let arr = Array::from(
        (0..10).map(|_| tally.track()).collect::<DynamicArray<_>>()
    );

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(tally.dropped(), 2);

    drop(iter);
    assert_eq!(
        tally.dropped(),
        10,
        "Dropping a partially consumed iterator should drop the remaining elements."
    );
}
