//! A unique-key map stored as a sorted vector of pairs.

use std::fmt;
use std::ops::{Index, Range, RangeBounds};

use slate_core::{contract, Comparator, Less, Sequence};
use smallvec::SmallVec;

use crate::engine::{First, Ordered};
use crate::iter::{Iter, IterMut, Keys, Values, ValuesMut};

/// A map from `K` to `V` kept as one contiguous run of `(K, V)` pairs sorted
/// by key.
///
/// Lookups are binary searches; inserts and removals shift the tail of the
/// storage, so they are O(n). That trade suits small or read-mostly maps,
/// where the flat layout beats a tree on cache behaviour and memory.
///
/// Keys are ordered by the comparator `C` (default [`Less`], ascending by
/// `Ord`). Storage is any [`Sequence`]: `Vec` by default, or a `SmallVec`
/// through [`SmallSortedMap`].
///
/// Positions returned by the mutating methods are indices into
/// [`as_slice`](Self::as_slice), valid until the next mutation.
///
/// ```
/// use slate_assoc::SortedMap;
///
/// let mut prices = SortedMap::new();
/// prices.insert("pear", 3);
/// prices.insert("apple", 2);
/// assert_eq!(prices.insert("pear", 9), (1, false));
///
/// assert_eq!(prices.get(&"pear"), Some(&3));
/// assert_eq!(prices.keys().copied().collect::<Vec<_>>(), ["apple", "pear"]);
/// ```
pub struct SortedMap<K, V, C = Less, S = Vec<(K, V)>> {
    core: Ordered<(K, V), First, C, S>,
}

/// A [`SortedMap`] holding up to `N` entries inline before spilling to the
/// heap.
pub type SmallSortedMap<K, V, const N: usize> = SortedMap<K, V, Less, SmallVec<[(K, V); N]>>;

impl<K, V> SortedMap<K, V> {
    /// An empty map ordered ascending by `Ord`.
    pub fn new() -> Self {
        Self {
            core: Ordered::from_parts(Vec::new(), Less),
        }
    }

    /// An empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: Ordered::from_parts(Vec::with_capacity(capacity), Less),
        }
    }
}

impl<K, V, C, S> SortedMap<K, V, C, S> {
    /// The comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        self.core.comparator()
    }

    /// Consumes the map, returning its sorted storage.
    pub fn into_inner(self) -> S {
        self.core.into_inner()
    }
}

impl<K, V, C, S> SortedMap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    /// An empty map ordered by `cmp`.
    ///
    /// ```
    /// use slate_assoc::SortedMap;
    /// use slate_core::Greater;
    ///
    /// let mut map: SortedMap<u8, char, Greater> = SortedMap::with_comparator(Greater);
    /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            core: Ordered::new(cmp),
        }
    }

    /// An empty map ordered by `cmp` with room for `capacity` entries.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            core: Ordered::with_capacity(capacity, cmp),
        }
    }

    /// Builds a map from pairs in any order, keeping the first pair seen for
    /// each key.
    pub fn from_pairs_with_comparator(pairs: impl IntoIterator<Item = (K, V)>, cmp: C) -> Self {
        Self {
            core: Ordered::from_unsorted(pairs.into_iter().collect(), cmp, true),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// The entries, sorted by key.
    pub fn as_slice(&self) -> &[(K, V)] {
        self.core.as_slice()
    }

    /// Inserts `value` under `key` unless the key is already present.
    ///
    /// Returns the position of the entry holding `key` and whether an insert
    /// happened. An existing entry is left untouched and `value` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        self.core.insert_unique((key, value))
    }

    /// Like [`insert`](Self::insert), returning only the position. The hint
    /// is accepted for call-site compatibility and not consulted.
    pub fn insert_hint(&mut self, _hint: usize, key: K, value: V) -> usize {
        self.insert(key, value).0
    }

    /// The value under `key`, inserting `V::default()` first if absent.
    ///
    /// ```
    /// use slate_assoc::SortedMap;
    ///
    /// let mut counts: SortedMap<char, u32> = SortedMap::new();
    /// for c in "abca".chars() {
    ///     *counts.get_or_insert_default(c) += 1;
    /// }
    /// assert_eq!(counts[&'a'], 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// The value under `key`, inserting `make()` first if absent.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let mut pos = self.core.lower_bound(&key);
        if !self.core.matches_at(pos, &key) {
            pos = self.core.insert_at(pos, (key, make()));
        }
        &mut self.core.as_mut_slice()[pos].1
    }

    /// Position of the entry with `key`.
    pub fn find(&self, key: &K) -> Option<usize> {
        self.core.find(key)
    }

    /// The value under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let pos = self.core.find(key)?;
        Some(&self.core.as_slice()[pos].1)
    }

    /// The value under `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.core.find(key)?;
        Some(&mut self.core.as_mut_slice()[pos].1)
    }

    /// The stored key and value equivalent to `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let pos = self.core.find(key)?;
        let (k, v) = &self.core.as_slice()[pos];
        Some((k, v))
    }

    /// Whether an entry with `key` exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.core.find(key).is_some()
    }

    /// The value under a key the caller knows is present.
    ///
    /// A missing key is a contract violation.
    pub fn at(&self, key: &K) -> &V {
        let pos = self.core.lower_bound(key);
        contract!(self.core.matches_at(pos, key), "SortedMap::at on a missing key");
        &self.core.as_slice()[pos].1
    }

    /// Mutable form of [`at`](Self::at).
    pub fn at_mut(&mut self, key: &K) -> &mut V {
        let pos = self.core.lower_bound(key);
        contract!(self.core.matches_at(pos, key), "SortedMap::at_mut on a missing key");
        &mut self.core.as_mut_slice()[pos].1
    }

    /// First position whose key is not ordered before `key`.
    pub fn lower_bound(&self, key: &K) -> usize {
        self.core.lower_bound(key)
    }

    /// First position whose key is ordered after `key`.
    pub fn upper_bound(&self, key: &K) -> usize {
        self.core.upper_bound(key)
    }

    /// Positions equivalent to `key`: at most one in a map.
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        self.core.equal_range(key)
    }

    /// `1` if `key` is present, else `0`.
    pub fn count(&self, key: &K) -> usize {
        self.core.count(key)
    }

    /// First position in `range` whose value equals `value`.
    ///
    /// Values are not ordered, so this is a linear scan. The range restricts
    /// the scan only when both of its ends are bounded; `..`, `a..` and `..b`
    /// all search the whole map.
    ///
    /// ```
    /// use slate_assoc::SortedMap;
    ///
    /// let map: SortedMap<u32, &str> = [(1, "x"), (2, "y"), (3, "x")].into_iter().collect();
    /// assert_eq!(map.find_data(&"x", ..), Some(0));
    /// assert_eq!(map.find_data(&"x", 1..3), Some(2));
    /// assert_eq!(map.find_data(&"z", ..), None);
    /// ```
    pub fn find_data(&self, value: &V, range: impl RangeBounds<usize>) -> Option<usize>
    where
        V: PartialEq,
    {
        self.core.position_in(range, |(_, v)| v == value)
    }

    /// Removes the entry with `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.core.remove_unique(key).map(|(_, v)| v)
    }

    /// Removes the entry with `key`, returning the stored pair.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.core.remove_unique(key)
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

    /// Keys in order.
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

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.core.as_slice().first().map(|(k, v)| (k, v))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.core.as_slice().last().map(|(k, v)| (k, v))
    }
}

impl<K, V, C: Clone, S: Clone> Clone for SortedMap<K, V, C, S> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<K, V, C, S> Default for SortedMap<K, V, C, S>
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
impl<K, V, C, S> PartialEq for SortedMap<K, V, C, S>
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

impl<K, V, C, S> Eq for SortedMap<K, V, C, S>
where
    V: Eq,
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
}

impl<K, V, C, S> fmt::Debug for SortedMap<K, V, C, S>
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

impl<K, V, C, S> Index<&K> for SortedMap<K, V, C, S>
where
    C: Comparator<K>,
    S: Sequence<(K, V)>,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.at(key)
    }
}

impl<K, V, C, S> FromIterator<(K, V)> for SortedMap<K, V, C, S>
where
    C: Comparator<K> + Default,
    S: Sequence<(K, V)>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs_with_comparator(iter, C::default())
    }
}

impl<K, V, C, S> Extend<(K, V)> for SortedMap<K, V, C, S>
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

impl<K, V, C, S> IntoIterator for SortedMap<K, V, C, S>
where
    S: IntoIterator<Item = (K, V)>,
{
    type Item = (K, V);
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, K, V, C, S> IntoIterator for &'a SortedMap<K, V, C, S>
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

impl<'a, K, V, C, S> IntoIterator for &'a mut SortedMap<K, V, C, S>
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

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{ByKey, Greater};
    use slate_test_utils::{model_unique, CountingComparator};

    fn sample() -> SortedMap<u32, &'static str> {
        [(5, "five"), (1, "one"), (3, "three")].into_iter().collect()
    }

    #[test]
    fn insert_reports_position_and_novelty() {
        let mut map = SortedMap::new();
        assert_eq!(map.insert(5, 'a'), (0, true));
        assert_eq!(map.insert(1, 'b'), (0, true));
        assert_eq!(map.insert(9, 'c'), (2, true));
        assert_eq!(map.insert(5, 'z'), (1, false));
        assert_eq!(map.get(&5), Some(&'a'));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn insert_hint_ignores_hint() {
        let mut map = sample();
        assert_eq!(map.insert_hint(0, 4, "four"), 2);
        assert_eq!(map.insert_hint(99, 1, "uno"), 0);
        assert_eq!(map[&1], "one");
    }

    #[test]
    fn get_or_insert_default_adds_in_order() {
        let mut map: SortedMap<u32, String> = SortedMap::new();
        map.insert(5, "a".to_string());
        assert!(map.get_or_insert_default(7).is_empty());
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 7]);
        map.get_or_insert_default(5).push('b');
        assert_eq!(map[&5], "ab");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_or_insert_with_runs_only_when_absent() {
        let mut map = sample();
        let mut calls = 0;
        map.get_or_insert_with(3, || {
            calls += 1;
            "new"
        });
        assert_eq!(calls, 0);
        *map.get_or_insert_with(4, || "four") = "FOUR";
        assert_eq!(map.get(&4), Some(&"FOUR"));
    }

    #[test]
    fn lookups() {
        let mut map = sample();
        assert_eq!(map.find(&3), Some(1));
        assert_eq!(map.find(&2), None);
        assert!(map.contains_key(&5));
        assert!(!map.contains_key(&6));
        assert_eq!(map.get_key_value(&1), Some((&1, &"one")));
        *map.get_mut(&1).unwrap() = "uno";
        assert_eq!(*map.at(&1), "uno");
        *map.at_mut(&5) = "cinco";
        assert_eq!(map[&5], "cinco");
        assert_eq!(map.count(&3), 1);
        assert_eq!(map.count(&4), 0);
        assert_eq!(map.equal_range(&4), 2..2);
        assert_eq!(map.lower_bound(&3), 1);
        assert_eq!(map.upper_bound(&3), 2);
    }

    #[test]
    #[should_panic(expected = "contract violation: SortedMap::at on a missing key")]
    fn at_missing_key_is_contract_violation() {
        sample().at(&2);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn index_missing_key_is_contract_violation() {
        let map = sample();
        let _ = &map[&8];
    }

    #[test]
    fn find_data_scans_values() {
        let map: SortedMap<u32, char> = [(1, 'x'), (2, 'y'), (3, 'x'), (4, 'y')].into_iter().collect();
        assert_eq!(map.find_data(&'y', ..), Some(1));
        assert_eq!(map.find_data(&'y', 2..4), Some(3));
        assert_eq!(map.find_data(&'y', 2..=2), None);
        assert_eq!(map.find_data(&'y', 2..), Some(1));
        assert_eq!(map.find_data(&'q', ..), None);
    }

    #[test]
    fn removal() {
        let mut map = sample();
        assert_eq!(map.remove(&3), Some("three"));
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.remove_entry(&1), Some((1, "one")));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn erase_returns_following_position() {
        let mut map: SortedMap<u32, u32> = (0..6).map(|i| (i, i * 10)).collect();
        assert_eq!(map.erase_at(2), 2);
        assert_eq!(map.as_slice()[2], (3, 30));
        assert_eq!(map.erase_range(1..3), 1);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "contract violation: search range 1..5 out of range for length 3")]
    fn find_data_range_past_end_is_contract_violation() {
        sample().find_data(&"one", 1..5);
    }

    #[test]
    #[should_panic(expected = "contract violation: erase position 3 out of range")]
    fn erase_at_end_is_contract_violation() {
        sample().erase_at(3);
    }

    #[test]
    fn retain_clear_assign_swap() {
        let mut map: SortedMap<u32, u32> = (0..10).map(|i| (i, i)).collect();
        map.retain(|k, _| k % 3 == 0);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 3, 6, 9]);

        let mut other = SortedMap::new();
        other.insert(100, 1);
        map.swap(&mut other);
        assert_eq!(map.len(), 1);
        assert_eq!(other.len(), 4);

        map.assign([(2, 2), (1, 1), (2, 9)]);
        assert_eq!(map.as_slice(), &[(1, 1), (2, 2)]);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn iteration() {
        let mut map = sample();
        for (_, v) in map.iter_mut() {
            *v = "seen";
        }
        assert!(map.values().all(|v| *v == "seen"));
        for v in map.values_mut() {
            *v = "again";
        }
        assert_eq!(map.first(), Some((&1, &"again")));
        assert_eq!(map.last(), Some((&5, &"again")));
        let keys: Vec<u32> = (&map).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [1, 3, 5]);
        let owned: Vec<(u32, &str)> = map.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn equality_and_debug() {
        let a = sample();
        let mut b = SortedMap::new();
        b.extend([(3, "three"), (5, "five"), (1, "one")]);
        assert_eq!(a, b);
        b.insert(7, "seven");
        assert_ne!(a, b);
        assert_eq!(format!("{:?}", sample()), r#"{1: "one", 3: "three", 5: "five"}"#);
    }

    #[test]
    fn equality_uses_key_equivalence() {
        let by_abs = ByKey::new(|k: &i32| k.unsigned_abs());
        let a: SortedMap<i32, char, _> =
            SortedMap::from_pairs_with_comparator([(1, 'a'), (-2, 'b')], by_abs);
        let b: SortedMap<i32, char, _> =
            SortedMap::from_pairs_with_comparator([(-1, 'a'), (2, 'b')], by_abs);
        assert_eq!(a, b);
        let c: SortedMap<i32, char, _> =
            SortedMap::from_pairs_with_comparator([(-1, 'a'), (2, 'z')], by_abs);
        assert_ne!(a, c);
    }

    #[test]
    fn clone_is_independent() {
        let a = sample();
        let mut b = a.clone();
        b.remove(&1);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn custom_comparators() {
        let mut desc: SortedMap<i32, (), Greater> = SortedMap::default();
        desc.extend([(1, ()), (-4, ()), (9, ())]);
        assert_eq!(desc.keys().copied().collect::<Vec<_>>(), [9, 1, -4]);

        let by_abs = ByKey::new(|v: &i32| v.unsigned_abs());
        let mut map: SortedMap<i32, char, _> = SortedMap::with_comparator(by_abs);
        map.insert(-3, 'a');
        map.insert(2, 'b');
        assert_eq!(map.insert(3, 'c'), (1, false));
        assert_eq!(map.get(&3), Some(&'a'));
    }

    #[test]
    fn small_storage_spills_transparently() {
        let mut map: SmallSortedMap<u8, u8, 2> = SmallSortedMap::default();
        for k in [4, 2, 8, 6] {
            map.insert(k, k);
        }
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 4, 6, 8]);
        assert!(map.into_inner().spilled());
    }

    #[test]
    fn lookup_is_logarithmic() {
        let cmp = CountingComparator::new(Less);
        let mut map: SortedMap<u32, (), _> =
            SortedMap::with_capacity_and_comparator(1024, cmp.clone());
        map.extend((0..1024u32).map(|k| (k, ())));
        cmp.reset();
        assert!(map.contains_key(&700));
        // log2(1024) = 10 probes, plus the equivalence check.
        assert!(cmp.count() <= 16, "{} comparisons", cmp.count());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_first_insert_wins_model(
                inserts in proptest::collection::vec((0u16..64, any::<u8>()), 0..100),
            ) {
                let mut map = SortedMap::new();
                for (k, v) in &inserts {
                    let existed = map.contains_key(k);
                    let (pos, inserted) = map.insert(*k, *v);
                    prop_assert_eq!(inserted, !existed);
                    prop_assert_eq!(map.as_slice()[pos].0, *k);
                }
                let expected = model_unique(&inserts);
                prop_assert_eq!(map.as_slice(), expected.as_slice());
                prop_assert!(map.keys().zip(map.keys().skip(1)).all(|(a, b)| a < b));
            }

            #[test]
            fn collect_matches_incremental_inserts(
                inserts in proptest::collection::vec((0u16..32, any::<u8>()), 0..60),
            ) {
                let mut incremental = SortedMap::new();
                for (k, v) in &inserts {
                    incremental.insert(*k, *v);
                }
                let collected: SortedMap<u16, u8> = inserts.iter().copied().collect();
                prop_assert_eq!(incremental, collected);
            }
        }
    }
}
