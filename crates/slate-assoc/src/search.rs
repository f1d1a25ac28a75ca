//! Binary search over sorted slices.
//!
//! Each function takes the slice, a search key, a projection from element
//! to key and the comparator. The slice must already be sorted by that
//! comparator over the projected keys; the results are meaningless
//! otherwise. All three run in O(log n) comparisons.

use std::ops::Range;

use slate_core::Comparator;

/// First position whose key is not ordered before `key`.
pub fn lower_bound<E, K, C>(entries: &[E], key: &K, key_of: impl Fn(&E) -> &K, cmp: &C) -> usize
where
    K: ?Sized,
    C: Comparator<K>,
{
    entries.partition_point(|e| cmp.less(key_of(e), key))
}

/// First position whose key is ordered strictly after `key`.
pub fn upper_bound<E, K, C>(entries: &[E], key: &K, key_of: impl Fn(&E) -> &K, cmp: &C) -> usize
where
    K: ?Sized,
    C: Comparator<K>,
{
    entries.partition_point(|e| !cmp.less(key, key_of(e)))
}

/// Positions of every element equivalent to `key`; empty (at the insertion
/// point) when there are none.
pub fn equal_range<E, K, C>(
    entries: &[E],
    key: &K,
    key_of: impl Fn(&E) -> &K,
    cmp: &C,
) -> Range<usize>
where
    K: ?Sized,
    C: Comparator<K>,
{
    let lo = lower_bound(entries, key, &key_of, cmp);
    // The run can only start at `lo`, so the upper search skips the prefix.
    let hi = lo + upper_bound(&entries[lo..], key, &key_of, cmp);
    lo..hi
}
