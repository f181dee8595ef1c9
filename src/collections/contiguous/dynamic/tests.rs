#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::collections::contiguous::{Array, concat};
use crate::error::WindowOutOfBounds;
use crate::util::panic::assert_panics;
use crate::util::test_types::{DropTally, Unit};

#[test]
fn test_new_is_unallocated() {
    let arr = DynamicArray::<i32>::new();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), 0);
    assert!(arr.is_empty());
    assert!(arr.is_unallocated(), "A new array shouldn't own any storage.");

    let arr = arr.append(1);
    assert!(!arr.is_unallocated());
}

#[test]
fn test_append_growth() {
    let mut arr = DynamicArray::new();
    let mut caps = DynamicArray::new();

    for i in 0..100 {
        let (old_len, old_cap) = (arr.len(), arr.cap());
        arr = arr.append(i);

        assert_eq!(arr.len(), old_len + 1, "Appending should add exactly one element.");
        if old_len == old_cap {
            assert_eq!(arr.cap(), 2 * old_len + 1, "A full array should grow to 2 * len + 1.");
            caps.push(arr.cap());
        } else {
            assert_eq!(arr.cap(), old_cap, "An array with spare capacity shouldn't grow.");
        }
        assert_eq!(arr.last(), Some(&i));
    }

    assert_eq!(&*caps, &[1, 3, 7, 15, 31, 63, 127]);
}

#[test]
fn test_append_zero_to_hundred() {
    let mut arr = DynamicArray::new();
    for i in 0..=100 {
        arr = arr.append(i);
    }

    assert_eq!(arr.len(), 101);
    assert!(arr.iter().copied().eq(0..=100), "Elements should stay in insertion order.");
}

#[test]
fn test_append_text_and_bool() {
    let mut words = DynamicArray::new();
    for i in 0..5 {
        words = words.append(format!("Hello{i}"));
    }
    assert_eq!(words.to_string(), "[Hello0 Hello1 Hello2 Hello3 Hello4]");
    assert_eq!(words.cap(), 7);

    let mut flags = DynamicArray::new();
    for i in 0..5 {
        flags = flags.append(i % 2 == 0);
    }
    assert_eq!(&*flags, &[true, false, true, false, true]);
    assert_eq!(flags.cap(), 7);
}

#[test]
fn test_with_cap_and_literal() {
    let mut arr = DynamicArray::with_cap(4);
    let ptr = arr.arr.ptr;
    arr.extend([1, 2, 3, 4]);
    assert_eq!(arr.cap(), 4);
    assert_eq!(arr.arr.ptr, ptr, "Filling the capacity exactly shouldn't reallocate.");

    arr.push(5);
    assert_eq!(arr.cap(), 9);

    let literal = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!((literal.len(), literal.cap()), (8, 8));

    let empty = DynamicArray::<u8>::from([]);
    assert!(empty.is_unallocated());
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::new();
    for _ in 0..10 {
        arr.push(Unit);
    }

    assert_eq!(arr.len(), 10);
    assert_eq!(arr.cap(), 15);
    assert_eq!(arr[9], Unit);
    assert_eq!(arr.into_iter().count(), 10);
}

#[test]
fn test_drop() {
    let tally = DropTally::new();
    let mut arr = DynamicArray::new();
    for _ in 0..10 {
        arr.push(tally.track());
    }

    assert_eq!(tally.dropped(), 0, "Reallocation shouldn't drop moved elements.");
    drop(arr);
    assert_eq!(tally.dropped(), 10, "Only the live elements should be dropped, once each.");

    let tally = DropTally::new();
    let mut iter = (0..6).map(|_| tally.track()).collect::<DynamicArray<_>>().into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(tally.dropped(), 6);
}

#[test]
fn test_into_array() {
    let mut arr = DynamicArray::new();
    arr.extend(0..5);
    assert_eq!(arr.cap(), 7);

    let arr = Array::from(arr);
    assert_eq!(arr.size(), 5, "Spare capacity should be released.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_clone_equality_and_hash() {
    let arr = DynamicArray::new().append(3).append(1).append(2);
    let cloned = arr.clone();

    assert_eq!(arr, cloned);
    assert_eq!(cloned.cap(), arr.cap(), "Clones should keep the capacity.");
    assert_ne!(arr, DynamicArray::from([3, 1]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&arr), state.hash_one(&cloned));
    assert_eq!(state.hash_one(&arr), state.hash_one([3, 1, 2]));
}

#[test]
fn test_windows() {
    let arr = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);

    let window = arr.window(3..5);
    assert_eq!(&*window, &[4, 5]);
    assert_eq!((window.len(), window.cap()), (2, 5));

    let widened = window.window(..5);
    assert_eq!(&*widened, &[4, 5, 6, 7, 8], "Windows should reach up to their capacity.");
    assert_eq!(widened.cap(), 5);

    let tail = widened.window(2..);
    assert_eq!(&*tail, &[6, 7, 8]);
    assert_eq!(tail.cap(), 3);

    let all = arr.window(..);
    assert_eq!(&*all, &*arr);
    assert_eq!(arr.window(2..=3).to_string(), "[3 4]");
    assert!(arr.window(8..).is_empty());
}

#[test]
fn test_window_bounds() {
    let arr = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
    let window = arr.window(3..5);

    assert_eq!(
        window.try_window(..6),
        Err(WindowOutOfBounds { start: 0, end: 6, cap: 5 }),
    );
    assert_eq!(
        arr.try_window(4..9),
        Err(WindowOutOfBounds { start: 4, end: 9, cap: 8 }),
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = arr.try_window(5..2);
    assert_eq!(reversed, Err(WindowOutOfBounds { start: 5, end: 2, cap: 8 }));

    let mut spare = DynamicArray::with_cap(10);
    spare.extend([1, 2]);
    assert!(
        spare.try_window(..3).is_err(),
        "Uninitialized storage shouldn't be reachable through a window."
    );

    assert_panics!({
        let arr = DynamicArray::from([1, 2, 3]);
        let _ = arr.window(..4);
    });
}

#[test]
fn test_window_to_dynamic() {
    let arr = DynamicArray::from([String::from("a"), String::from("b"), String::from("c")]);
    let owned = arr.window(1..).to_dynamic();

    assert_eq!(&*owned, &["b", "c"]);
    assert_eq!((owned.len(), owned.cap()), (2, 2));

    let owned = owned.append(String::from("d"));
    assert_eq!(owned.cap(), 5);
    assert_eq!(arr.len(), 3, "Appending to a copy shouldn't affect the original.");
}

#[test]
fn test_concat() {
    let empty: DynamicArray<String> = concat(&[], &[]);
    assert!(empty.is_empty());
    assert!(empty.is_unallocated());

    let joined = concat(&["A", "B"], &["C"]);
    assert_eq!(&*joined, &["A", "B", "C"]);
    assert_eq!(joined.cap(), 3, "Concatenation should allocate exactly once.");

    let a = DynamicArray::from([String::from("A"), String::from("B"), String::from("C")]);
    let b = DynamicArray::from([String::from("D"), String::from("E"), String::from("F")]);
    let mut joined = concat(&a, &b);
    joined[0].push('!');
    assert_eq!(joined.to_string(), "[A! B C D E F]");
    assert_eq!(a[0], "A", "The result shouldn't share elements with the inputs.");
}

#[test]
fn test_formatting() {
    let arr = DynamicArray::new().append(1).append(2);
    assert_eq!(arr.to_string(), "[1 2]");
    assert_eq!(
        format!("{arr:?}"),
        "DynamicArray { contents: [1, 2], len: 2, cap: 3 }"
    );
    assert_eq!(DynamicArray::<u8>::new().to_string(), "[]");
}
