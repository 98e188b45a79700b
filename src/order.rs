//! Binary heap algorithms over a plain slice.
//!
//! Every function is parameterized by `IS_MIN`: with `true` the root holds the
//! least element under `f`, with `false` the greatest. Equal elements are
//! never swapped.

use std::cmp::Ordering;

#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0);
    (index - 1) / 2
}

#[inline]
pub fn left(index: usize) -> usize {
    index * 2 + 1
}

#[inline]
pub fn right(index: usize) -> usize {
    index * 2 + 2
}

/// `a` has to sit above `b`.
#[inline]
fn outranks<T, F: FnMut(&T, &T) -> Ordering, const IS_MIN: bool>(f: &mut F, a: &T, b: &T) -> bool {
    let ord = f(a, b);
    if IS_MIN {
        ord == Ordering::Less
    } else {
        ord == Ordering::Greater
    }
}

/// Moves `ar[index]` toward the root until its parent no longer loses to it.
/// Returns the final position.
pub fn sift_up<T, F: FnMut(&T, &T) -> Ordering, const IS_MIN: bool>(ar: &mut [T], index: usize, f: &mut F) -> usize {
    debug_assert!(index < ar.len());
    let mut index = index;
    while index > 0 {
        let p = parent(index);
        if !outranks::<T, F, IS_MIN>(f, &ar[index], &ar[p]) {
            break;
        }
        ar.swap(index, p);
        index = p;
    }
    index
}

/// Moves `ar[index]` toward the leaves, always trading places with the child
/// that ranks higher, until no child outranks it. Returns the final position.
pub fn sift_down<T, F: FnMut(&T, &T) -> Ordering, const IS_MIN: bool>(ar: &mut [T], index: usize, f: &mut F) -> usize {
    let len = ar.len();
    let mut index = index;
    loop {
        let l = left(index);
        if l >= len {
            break;
        }
        let r = right(index);
        let mut select = l;
        if r < len && outranks::<T, F, IS_MIN>(f, &ar[r], &ar[l]) {
            select = r;
        }
        if !outranks::<T, F, IS_MIN>(f, &ar[select], &ar[index]) {
            break;
        }
        ar.swap(index, select);
        index = select;
    }
    index
}

/// Restores the heap property over an arbitrary slice in linear time by
/// sinking every internal node, last one first.
pub fn heapize<T, F: FnMut(&T, &T) -> Ordering, const IS_MIN: bool>(ar: &mut [T], f: &mut F) {
    let len = ar.len();
    if len < 2 {
        return;
    }
    for i in (0..len / 2).rev() {
        sift_down::<T, F, IS_MIN>(ar, i, f);
    }
}

pub fn build_min_heap<T, F: FnMut(&T, &T) -> Ordering>(ar: &mut [T], mut f: F) {
    heapize::<T, F, true>(ar, &mut f)
}

pub fn build_max_heap<T, F: FnMut(&T, &T) -> Ordering>(ar: &mut [T], mut f: F) {
    heapize::<T, F, false>(ar, &mut f)
}

/// Checks the heap property between every node and its parent.
pub fn is_heap<T, F: FnMut(&T, &T) -> Ordering, const IS_MIN: bool>(ar: &[T], f: &mut F) -> bool {
    (1..ar.len()).all(|i| !outranks::<T, F, IS_MIN>(f, &ar[i], &ar[parent(i)]))
}

#[test]
fn index_arithmetic() {
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(5), 2);
    assert_eq!(parent(6), 2);
    assert_eq!(left(0), 1);
    assert_eq!(right(0), 2);
    assert_eq!(left(3), 7);
    assert_eq!(right(3), 8);
}

#[test]
fn build_both_ways() {
    let mut ar = vec![5, 1, 8, 3, 9, 2, 7, 7, 0];
    build_min_heap(&mut ar, i32::cmp);
    assert_eq!(ar[0], 0);
    assert!(is_heap::<_, _, true>(&ar, &mut i32::cmp));
    build_max_heap(&mut ar, i32::cmp);
    assert_eq!(ar[0], 9);
    assert!(is_heap::<_, _, false>(&ar, &mut i32::cmp));
    assert!(!is_heap::<_, _, true>(&ar, &mut i32::cmp));
}

#[test]
fn sift_up_stops_on_tie() {
    let mut ar = vec![1, 3, 3];
    let at = sift_up::<_, _, true>(&mut ar, 2, &mut i32::cmp);
    assert_eq!(at, 2);
    ar[2] = 0;
    let at = sift_up::<_, _, true>(&mut ar, 2, &mut i32::cmp);
    assert_eq!(at, 0);
    assert_eq!(ar, vec![0, 3, 1]);
}

#[test]
fn sift_down_picks_larger_child() {
    let mut ar = vec![0, 4, 6, 1];
    let at = sift_down::<_, _, false>(&mut ar, 0, &mut i32::cmp);
    assert_eq!(at, 2);
    assert_eq!(ar, vec![6, 4, 0, 1]);
    assert!(is_heap::<_, _, false>(&ar, &mut i32::cmp));
}

#[test]
fn tiny_slices() {
    let mut empty: Vec<i32> = Vec::new();
    build_max_heap(&mut empty, i32::cmp);
    let mut one = vec![3];
    build_min_heap(&mut one, i32::cmp);
    assert_eq!(one, vec![3]);
    assert_eq!(sift_down::<_, _, true>(&mut one, 0, &mut i32::cmp), 0);
}
