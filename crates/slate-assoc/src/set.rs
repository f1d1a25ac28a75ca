//! A set stored as a sorted vector.

use std::fmt;
use std::ops::Range;
use std::slice;

use slate_core::{Comparator, Less, Sequence};
use smallvec::SmallVec;

use crate::engine::{Identity, Ordered};

/// A set of `T` kept sorted and free of duplicates in one contiguous
/// sequence.
///
/// Two elements are duplicates when the comparator orders neither before
/// the other, so equality here means equivalence under `C`, not
/// `PartialEq`.
///
/// ```
/// use slate_assoc::SortedSet;
///
/// let mut primes: SortedSet<u32> = [7, 2, 5, 3].into_iter().collect();
/// assert_eq!(primes.insert(5), (2, false));
/// assert!(primes.contains(&3));
/// assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
/// ```
pub struct SortedSet<T, C = Less, S = Vec<T>> {
    core: Ordered<T, Identity, C, S>,
}

/// A [`SortedSet`] holding up to `N` elements inline.
pub type SmallSortedSet<T, const N: usize> = SortedSet<T, Less, SmallVec<[T; N]>>;

impl<T> SortedSet<T> {
    /// An empty set ordered ascending by `Ord`.
    pub fn new() -> Self {
        Self {
            core: Ordered::from_parts(Vec::new(), Less),
        }
    }

    /// An empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: Ordered::from_parts(Vec::with_capacity(capacity), Less),
        }
    }
}

impl<T, C, S> SortedSet<T, C, S> {
    /// The comparator ordering the elements.
    pub fn comparator(&self) -> &C {
        self.core.comparator()
    }

    /// Consumes the set, returning its sorted storage.
    pub fn into_inner(self) -> S {
        self.core.into_inner()
    }
}

impl<T, C, S> SortedSet<T, C, S>
where
    C: Comparator<T>,
    S: Sequence<T>,
{
    /// An empty set ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            core: Ordered::new(cmp),
        }
    }

    /// An empty set ordered by `cmp` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            core: Ordered::with_capacity(capacity, cmp),
        }
    }

    /// Builds a set from values in any order, keeping the first of each
    /// group of equivalent values.
    pub fn from_values_with_comparator(values: impl IntoIterator<Item = T>, cmp: C) -> Self {
        Self {
            core: Ordered::from_unsorted(values.into_iter().collect(), cmp, true),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// The elements in order.
    pub fn as_slice(&self) -> &[T] {
        self.core.as_slice()
    }

    /// Inserts `value` unless an equivalent element is present.
    ///
    /// Returns the position of the element equivalent to `value` and whether
    /// it was newly inserted.
    pub fn insert(&mut self, value: T) -> (usize, bool) {
        self.core.insert_unique(value)
    }

    /// Like [`insert`](Self::insert), returning only the position. The hint
    /// is accepted for call-site compatibility and not consulted.
    pub fn insert_hint(&mut self, _hint: usize, value: T) -> usize {
        self.insert(value).0
    }

    /// Whether an element equivalent to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.core.find(value).is_some()
    }

    /// Position of the element equivalent to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.core.find(value)
    }

    /// The stored element equivalent to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let pos = self.core.find(value)?;
        Some(&self.core.as_slice()[pos])
    }

    /// `1` if an equivalent element is present, else `0`.
    pub fn count(&self, value: &T) -> usize {
        self.core.count(value)
    }

    /// First position not ordered before `value`.
    pub fn lower_bound(&self, value: &T) -> usize {
        self.core.lower_bound(value)
    }

    /// First position ordered after `value`.
    pub fn upper_bound(&self, value: &T) -> usize {
        self.core.upper_bound(value)
    }

    /// Positions equivalent to `value`: at most one.
    pub fn equal_range(&self, value: &T) -> Range<usize> {
        self.core.equal_range(value)
    }

    /// Removes the element equivalent to `value` and returns it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.core.remove_unique(value)
    }

    /// Removes the element at `pos` and returns the position now occupied by
    /// its successor.
    pub fn erase_at(&mut self, pos: usize) -> usize {
        self.core.take_at(pos);
        pos
    }

    /// Removes the elements in `range` and returns the position following
    /// them.
    pub fn erase_range(&mut self, range: Range<usize>) -> usize {
        self.core.erase_range(range)
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.core.retain(keep);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Reserves room for `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.core.reserve(additional);
    }

    /// Exchanges contents, comparators included, with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Replaces the contents with `values`.
    pub fn assign(&mut self, values: impl IntoIterator<Item = T>) {
        self.clear();
        self.extend(values);
    }

    /// The elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.core.as_slice().iter()
    }

    /// The smallest element.
    pub fn first(&self) -> Option<&T> {
        self.core.as_slice().first()
    }

    /// The largest element.
    pub fn last(&self) -> Option<&T> {
        self.core.as_slice().last()
    }
}

impl<T, C: Clone, S: Clone> Clone for SortedSet<T, C, S> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<T, C, S> Default for SortedSet<T, C, S>
where
    C: Comparator<T> + Default,
    S: Sequence<T>,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Sets are equal when they hold the same number of elements and each pair
/// at the same position is equivalent under `self`'s comparator.
impl<T, C, S> PartialEq for SortedSet<T, C, S>
where
    C: Comparator<T>,
    S: Sequence<T>,
{
    fn eq(&self, other: &Self) -> bool {
        let cmp = self.comparator();
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| cmp.equivalent(a, b))
    }
}

impl<T, C, S> Eq for SortedSet<T, C, S>
where
    C: Comparator<T>,
    S: Sequence<T>,
{
}

impl<T, C, S> fmt::Debug for SortedSet<T, C, S>
where
    T: fmt::Debug,
    C: Comparator<T>,
    S: Sequence<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, S> FromIterator<T> for SortedSet<T, C, S>
where
    C: Comparator<T> + Default,
    S: Sequence<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values_with_comparator(iter, C::default())
    }
}

impl<T, C, S> Extend<T> for SortedSet<T, C, S>
where
    C: Comparator<T>,
    S: Sequence<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C, S> IntoIterator for SortedSet<T, C, S>
where
    S: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, C, S> IntoIterator for &'a SortedSet<T, C, S>
where
    C: Comparator<T>,
    S: Sequence<T>,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{ByFn, ByKey};
    use slate_test_utils::fixtures::stepped_keys;

    #[test]
    fn insert_and_membership() {
        let mut set = SortedSet::new();
        assert_eq!(set.insert(4), (0, true));
        assert_eq!(set.insert(1), (0, true));
        assert_eq!(set.insert(4), (1, false));
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
        assert_eq!(set.find(&4), Some(1));
        assert_eq!(set.get(&4), Some(&4));
        assert_eq!(set.count(&4), 1);
        assert_eq!(set.count(&7), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_hint_ignores_hint() {
        let mut set: SortedSet<u32> = [10, 30].into_iter().collect();
        assert_eq!(set.insert_hint(0, 20), 1);
        assert_eq!(set.insert_hint(7, 10), 0);
        assert_eq!(set.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn bounds() {
        let set: SortedSet<u32> = stepped_keys(5, 10).into_iter().collect();
        assert_eq!(set.lower_bound(&15), 2);
        assert_eq!(set.upper_bound(&20), 3);
        assert_eq!(set.equal_range(&20), 2..3);
        assert_eq!(set.equal_range(&25), 3..3);
    }

    #[test]
    fn get_returns_stored_representative() {
        let mut set: SortedSet<String, _> =
            SortedSet::with_comparator(ByKey::new(|s: &String| s.len()));
        set.insert("pear".to_string());
        set.insert("fig".to_string());
        assert_eq!(set.insert("plum".to_string()), (1, false));
        assert_eq!(set.get(&"kiwi".to_string()).map(String::as_str), Some("pear"));
        assert_eq!(set.remove(&"abcd".to_string()).as_deref(), Some("pear"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn removal_paths() {
        let mut set: SortedSet<u32> = (0..8).collect();
        assert_eq!(set.remove(&3), Some(3));
        assert_eq!(set.remove(&3), None);
        assert_eq!(set.erase_at(0), 0);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.erase_range(1..3), 1);
        assert_eq!(set.as_slice(), &[1, 5, 6, 7]);
        set.retain(|v| v % 2 == 1);
        assert_eq!(set.as_slice(), &[1, 5, 7]);
        assert_eq!(set.last(), Some(&7));
    }

    #[test]
    #[should_panic(expected = "contract violation: erase range 1..9")]
    fn erase_range_past_end_is_contract_violation() {
        let mut set: SortedSet<u32> = (0..4).collect();
        set.erase_range(1..9);
    }

    #[test]
    fn assign_swap_clear() {
        let mut a = SortedSet::new();
        a.assign([3, 1, 3, 2]);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        let mut b: SortedSet<i32> = SortedSet::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(b.len(), 3);
        b.clear();
        assert!(b.is_empty());
    }

    #[test]
    fn equality_uses_comparator() {
        let cmp = ByFn::new(|a: &i32, b: &i32| a.abs() < b.abs());
        let a: SortedSet<i32, _> = SortedSet::from_values_with_comparator([1, -2, 3], cmp);
        let b: SortedSet<i32, _> = SortedSet::from_values_with_comparator([-1, 2, -3], cmp);
        assert_eq!(a.as_slice(), &[1, -2, 3]);
        assert!(a == b);

        let c: SortedSet<i32> = [1, 2].into_iter().collect();
        let d: SortedSet<i32> = [1, 2, 3].into_iter().collect();
        assert_ne!(c, d);
    }

    #[test]
    fn iteration_and_debug() {
        let set: SortedSet<char> = "banana".chars().collect();
        assert_eq!(set.iter().collect::<String>(), "abn");
        assert_eq!((&set).into_iter().rev().count(), 3);
        assert_eq!(format!("{set:?}"), "{'a', 'b', 'n'}");
        assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), ['a', 'b', 'n']);
    }

    #[test]
    fn small_storage() {
        let mut set: SmallSortedSet<u16, 3> = SmallSortedSet::default();
        set.extend([9, 3, 9, 1]);
        assert_eq!(set.as_slice(), &[1, 3, 9]);
        let inner = set.into_inner();
        assert!(!inner.spilled());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strictly_ascending_without_duplicates(
                values in proptest::collection::vec(any::<i16>(), 0..120),
            ) {
                let mut set = SortedSet::new();
                for v in &values {
                    set.insert(*v);
                }
                prop_assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
                let mut expected = values.clone();
                expected.sort();
                expected.dedup();
                prop_assert_eq!(set.as_slice(), expected.as_slice());
            }
        }
    }
}
