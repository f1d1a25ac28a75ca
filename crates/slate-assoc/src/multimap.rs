//! A sorted-vector map that allows repeated keys.

use std::fmt;
use std::ops::Range;

use slate_core::{Comparator, Less, Sequence};
use smallvec::SmallVec;

use crate::engine::{First, Ordered};
use crate::iter::{Iter, IterMut, Keys, Values, ValuesMut};

/// A map from `K` to any number of `V`, stored as `(K, V)` pairs sorted by
/// key.
///
/// Entries with equivalent keys sit next to each other in insertion order:
/// [`insert`](Self::insert) always lands after the existing run. That makes
/// [`get_all`](Self::get_all) a plain slice.
///
/// ```
/// use slate_assoc::SortedMultimap;
///
/// let mut tags = SortedMultimap::new();
/// tags.insert("fruit", "pear");
/// tags.insert("veg", "leek");
/// tags.insert("fruit", "fig");
///
/// let fruit: Vec<_> = tags.get_all(&"fruit").iter().map(|(_, v)| *v).collect();
/// assert_eq!(fruit, ["pear", "fig"]);
/// assert_eq!(tags.count(&"fruit"), 2);
/// ```
pub struct SortedMultimap<K, V, C = Less, S = Vec<(K, V)>> {
    core: Ordered<(K, V), First, C, S>,
}

/// A [`SortedMultimap`] holding up to `N` entries inline.
pub type SmallSortedMultimap<K, V, const N: usize> =
    SortedMultimap<K, V, Less, SmallVec<[(K, V); N]>>;

impl<K, V> SortedMultimap<K, V> {
    /// An empty multimap ordered ascending by `Ord`.
    pub fn new() -> Self {
        Self {
            core: Ordered::from_parts(Vec::new(), Less),
        }
    }

    /// An empty multimap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: Ordered::from_parts(Vec::with_capacity(capacity), Less),
        }
    }
}

impl<K, V, C, S> SortedMultimap<K, V, C, S> {
    /// The comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        self.core.comparator()
    }

    /// Consumes the multimap, returning its sorted storage.
    pub fn into_inner(self) -> S {
        self.core.into_inner()
    }
}

impl<K, V, C, S> SortedMultimap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    /// An empty multimap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            core: Ordered::new(cmp),
        }
    }

    /// An empty multimap ordered by `cmp` with room for `capacity` entries.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            core: Ordered::with_capacity(capacity, cmp),
        }
    }

    /// Builds from pairs in any order; equal keys keep their relative order.
    pub fn from_pairs_with_comparator(pairs: impl IntoIterator<Item = (K, V)>, cmp: C) -> Self {
        Self {
            core: Ordered::from_unsorted(pairs.into_iter().collect(), cmp, false),
        }
    }

    /// Number of entries, counting every repeat.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// The entries, sorted by key.
    pub fn as_slice(&self) -> &[(K, V)] {
        self.core.as_slice()
    }

    /// Inserts after any entries already under `key` and returns the new
    /// entry's position.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.core.insert_equal((key, value))
    }

    /// Same as [`insert`](Self::insert). The hint is accepted for
    /// call-site compatibility and not consulted.
    pub fn insert_hint(&mut self, _hint: usize, key: K, value: V) -> usize {
        self.insert(key, value)
    }

    /// Position of the first entry under `key`.
    pub fn find(&self, key: &K) -> Option<usize> {
        self.core.find(key)
    }

    /// Whether any entry is under `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.core.find(key).is_some()
    }

    /// Number of entries under `key`.
    pub fn count(&self, key: &K) -> usize {
        self.core.count(key)
    }

    /// First position whose key is not ordered before `key`.
    pub fn lower_bound(&self, key: &K) -> usize {
        self.core.lower_bound(key)
    }

    /// First position whose key is ordered after `key`.
    pub fn upper_bound(&self, key: &K) -> usize {
        self.core.upper_bound(key)
    }

    /// Positions of the entries under `key`.
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        self.core.equal_range(key)
    }

    /// The entries under `key`, in insertion order.
    pub fn equal_range_slice(&self, key: &K) -> &[(K, V)] {
        let range = self.core.equal_range(key);
        &self.core.as_slice()[range]
    }

    /// Alias of [`equal_range_slice`](Self::equal_range_slice).
    pub fn get_all(&self, key: &K) -> &[(K, V)] {
        self.equal_range_slice(key)
    }

    /// The values under `key`, mutably, in insertion order.
    pub fn get_all_mut(&mut self, key: &K) -> ValuesMut<'_, K, V> {
        let range = self.core.equal_range(key);
        ValuesMut::new(&mut self.core.as_mut_slice()[range])
    }

    /// Removes every entry under `key` and returns how many there were.
    pub fn remove_all(&mut self, key: &K) -> usize {
        self.core.remove_equal(key)
    }

    /// Removes the entry at `pos` and returns the position now occupied by
    /// its successor.
    pub fn erase_at(&mut self, pos: usize) -> usize {
        self.core.take_at(pos);
        pos
    }

    /// Removes the entries in `range` and returns the position following
    /// them.
    pub fn erase_range(&mut self, range: Range<usize>) -> usize {
        self.core.erase_range(range)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        self.core.retain(|(k, v)| keep(k, v));
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Reserves room for `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.core.reserve(additional);
    }

    /// Exchanges contents, comparators included, with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Replaces the contents with `pairs`.
    pub fn assign(&mut self, pairs: impl IntoIterator<Item = (K, V)>) {
        self.clear();
        self.extend(pairs);
    }

    /// Entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.core.as_slice())
    }

    /// Entries in key order with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.core.as_mut_slice())
    }

    /// Keys in order, repeats included.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.core.as_slice())
    }

    /// Values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.core.as_slice())
    }

    /// Mutable values in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.core.as_mut_slice())
    }

    /// The first entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.core.as_slice().first().map(|(k, v)| (k, v))
    }

    /// The last entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.core.as_slice().last().map(|(k, v)| (k, v))
    }
}

impl<K, V, C: Clone, S: Clone> Clone for SortedMultimap<K, V, C, S> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<K, V, C, S> Default for SortedMultimap<K, V, C, S>
where
    C: Comparator<K> + Default,
    S: Sequence<(K, V)>,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Equal when both hold the same number of entries and each pair at the
/// same position has keys equivalent under `self`'s comparator and equal
/// values. This is the rule [`SortedSet`](crate::SortedSet) uses too.
impl<K, V, C, S> PartialEq for SortedMultimap<K, V, C, S>
where
    V: PartialEq,
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    fn eq(&self, other: &Self) -> bool {
        let cmp = self.comparator();
        self.len() == other.len()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|((ka, va), (kb, vb))| cmp.equivalent(ka, kb) && va == vb)
    }
}

impl<K, V, C, S> Eq for SortedMultimap<K, V, C, S>
where
    V: Eq,
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
}

impl<K, V, C, S> fmt::Debug for SortedMultimap<K, V, C, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, S> FromIterator<(K, V)> for SortedMultimap<K, V, C, S>
where
    C: Comparator<K> + Default,
    S: Sequence<(K, V)>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs_with_comparator(iter, C::default())
    }
}

impl<K, V, C, S> Extend<(K, V)> for SortedMultimap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, C, S> IntoIterator for SortedMultimap<K, V, C, S>
where
    S: IntoIterator<Item = (K, V)>,
{
    type Item = (K, V);
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, K, V, C, S> IntoIterator for &'a SortedMultimap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C, S> IntoIterator for &'a mut SortedMultimap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
