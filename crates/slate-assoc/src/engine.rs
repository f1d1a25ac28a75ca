//! The ordered core shared by the map, multimap and set.
//!
//! [`Ordered`] owns a [`Sequence`] kept sorted under a [`Comparator`] applied
//! to a projected key. It exposes only operations that preserve that order:
//! there is no raw `push` and entries are reachable mutably only through
//! slices the wrappers narrow down to values.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound, Range, RangeBounds};

use slate_core::{contract, Comparator, Sequence};

use crate::search;

/// Projects an entry onto the key it is ordered by.
pub(crate) trait KeyOf<E> {
    type Key: ?Sized;

    fn key_of(entry: &E) -> &Self::Key;
}

/// Orders `(K, V)` pairs by `K`.
pub(crate) struct First;

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;

    fn key_of(entry: &(K, V)) -> &K {
        &entry.0
    }
}

/// Orders elements by themselves.
pub(crate) struct Identity;

impl<T> KeyOf<T> for Identity {
    type Key = T;

    fn key_of(entry: &T) -> &T {
        entry
    }
}

pub(crate) struct Ordered<E, X, C, S> {
    seq: S,
    cmp: C,
    _entry: PhantomData<fn() -> (E, X)>,
}

impl<E, X, C, S> Ordered<E, X, C, S> {
    pub(crate) fn from_parts(seq: S, cmp: C) -> Self {
        Self {
            seq,
            cmp,
            _entry: PhantomData,
        }
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn into_inner(self) -> S {
        self.seq
    }
}

impl<E, X, C, S> Ordered<E, X, C, S>
where
    X: KeyOf<E>,
    C: Comparator<X::Key>,
    S: Sequence<E>,
{
    pub(crate) fn new(cmp: C) -> Self {
        Self::from_parts(S::default(), cmp)
    }

    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self::from_parts(S::with_capacity(capacity), cmp)
    }

    /// Builds from entries in any order with one stable sort.
    ///
    /// With `unique` set, only the first of each run of equivalent keys is
    /// kept, which is what inserting the entries one at a time would leave.
    pub(crate) fn from_unsorted(mut entries: Vec<E>, cmp: C, unique: bool) -> Self {
        entries.sort_by(|a, b| cmp.ordering(X::key_of(a), X::key_of(b)));
        let mut seq = S::with_capacity(entries.len());
        for entry in entries {
            if unique {
                if let Some(last) = seq.as_slice().last() {
                    if !cmp.less(X::key_of(last), X::key_of(&entry)) {
                        continue;
                    }
                }
            }
            seq.push(entry);
        }
        Self::from_parts(seq, cmp)
    }

    pub(crate) fn as_slice(&self) -> &[E] {
        self.seq.as_slice()
    }

    /// Mutable access to the sorted entries. Callers must not change keys.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [E] {
        self.seq.as_mut_slice()
    }

    pub(crate) fn len(&self) -> usize {
        self.seq.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub(crate) fn lower_bound(&self, key: &X::Key) -> usize {
        search::lower_bound(self.as_slice(), key, X::key_of, &self.cmp)
    }

    pub(crate) fn upper_bound(&self, key: &X::Key) -> usize {
        search::upper_bound(self.as_slice(), key, X::key_of, &self.cmp)
    }

    pub(crate) fn equal_range(&self, key: &X::Key) -> Range<usize> {
        search::equal_range(self.as_slice(), key, X::key_of, &self.cmp)
    }

    /// Whether the entry at `pos` is equivalent to `key`, given that `pos`
    /// is `lower_bound(key)`.
    pub(crate) fn matches_at(&self, pos: usize, key: &X::Key) -> bool {
        self.as_slice()
            .get(pos)
            .is_some_and(|entry| !self.cmp.less(key, X::key_of(entry)))
    }

    pub(crate) fn find(&self, key: &X::Key) -> Option<usize> {
        let pos = self.lower_bound(key);
        self.matches_at(pos, key).then_some(pos)
    }

    pub(crate) fn count(&self, key: &X::Key) -> usize {
        self.equal_range(key).len()
    }

    /// Inserts unless an equivalent key is present; either way returns the
    /// position of the entry holding the key.
    pub(crate) fn insert_unique(&mut self, entry: E) -> (usize, bool) {
        let pos = self.lower_bound(X::key_of(&entry));
        if self.matches_at(pos, X::key_of(&entry)) {
            return (pos, false);
        }
        (self.seq.insert_at(pos, entry), true)
    }

    /// Inserts after every equivalent key already present.
    pub(crate) fn insert_equal(&mut self, entry: E) -> usize {
        let pos = self.upper_bound(X::key_of(&entry));
        self.seq.insert_at(pos, entry)
    }

    /// Inserts at a position the caller has already searched for.
    pub(crate) fn insert_at(&mut self, pos: usize, entry: E) -> usize {
        contract!(
            pos <= self.len(),
            "insert position {pos} out of range for length {}",
            self.len()
        );
        contract!(
            self.fits_at(pos, &entry),
            "insert at position {pos} would break the sort order"
        );
        self.seq.insert_at(pos, entry)
    }

    fn fits_at(&self, pos: usize, entry: &E) -> bool {
        let entries = self.as_slice();
        let key = X::key_of(entry);
        let after_prev = pos == 0 || !self.cmp.less(key, X::key_of(&entries[pos - 1]));
        let before_next =
            pos == entries.len() || !self.cmp.less(X::key_of(&entries[pos]), key);
        after_prev && before_next
    }

    pub(crate) fn remove_unique(&mut self, key: &X::Key) -> Option<E> {
        let pos = self.find(key)?;
        Some(self.seq.erase_at(pos))
    }

    /// Removes the whole run of `key` with one range erase.
    pub(crate) fn remove_equal(&mut self, key: &X::Key) -> usize {
        let range = self.equal_range(key);
        let removed = range.len();
        if removed > 0 {
            self.seq.erase_range(range);
        }
        removed
    }

    pub(crate) fn take_at(&mut self, pos: usize) -> E {
        contract!(
            pos < self.len(),
            "erase position {pos} out of range for length {}",
            self.len()
        );
        self.seq.erase_at(pos)
    }

    pub(crate) fn erase_range(&mut self, range: Range<usize>) -> usize {
        contract!(
            range.start <= range.end && range.end <= self.len(),
            "erase range {range:?} out of range for length {}",
            self.len()
        );
        self.seq.erase_range(range)
    }

    /// First position in `range` whose entry satisfies `pred`, scanning
    /// linearly. Only a range bounded at both ends restricts the scan.
    pub(crate) fn position_in(
        &self,
        range: impl RangeBounds<usize>,
        mut pred: impl FnMut(&E) -> bool,
    ) -> Option<usize> {
        let entries = self.as_slice();
        let window = match (range.start_bound(), range.end_bound()) {
            (Bound::Unbounded, _) | (_, Bound::Unbounded) => 0..entries.len(),
            (start, end) => {
                let lo = match start {
                    Bound::Included(&s) => s,
                    Bound::Excluded(&s) => s.saturating_add(1),
                    Bound::Unbounded => 0,
                };
                let hi = match end {
                    Bound::Included(&e) => e.saturating_add(1),
                    Bound::Excluded(&e) => e,
                    Bound::Unbounded => entries.len(),
                };
                contract!(
                    lo <= hi && hi <= entries.len(),
                    "search range {lo}..{hi} out of range for length {}",
                    entries.len()
                );
                lo.min(entries.len())..hi.min(entries.len())
            }
        };
        let offset = window.start;
        entries
            .get(window)?
            .iter()
            .position(|entry| pred(entry))
            .map(|i| offset + i)
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&E) -> bool) {
        self.seq.retain(f);
    }

    pub(crate) fn clear(&mut self) {
        self.seq.clear();
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.seq.reserve(additional);
    }
}

impl<E, X, C: Clone, S: Clone> Clone for Ordered<E, X, C, S> {
    fn clone(&self) -> Self {
        Self::from_parts(self.seq.clone(), self.cmp.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.seq.clone_from(&source.seq);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<E, X, C: fmt::Debug, S: fmt::Debug> fmt::Debug for Ordered<E, X, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordered")
            .field("seq", &self.seq)
            .field("cmp", &self.cmp)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::Less;

    type Core = Ordered<u32, Identity, Less, Vec<u32>>;
    type PairCore = Ordered<(u32, char), First, Less, Vec<(u32, char)>>;

    fn core_of(values: &[u32]) -> Core {
        Core::from_unsorted(values.to_vec(), Less, false)
    }

    #[test]
    fn insert_unique_reports_existing_position() {
        let mut core = Core::new(Less);
        assert_eq!(core.insert_unique(5), (0, true));
        assert_eq!(core.insert_unique(2), (0, true));
        assert_eq!(core.insert_unique(5), (1, false));
        assert_eq!(core.as_slice(), &[2, 5]);
    }

    #[test]
    fn insert_equal_appends_to_run() {
        let mut core = PairCore::new(Less);
        core.insert_equal((1, 'a'));
        core.insert_equal((0, 'z'));
        assert_eq!(core.insert_equal((1, 'b')), 2);
        assert_eq!(core.as_slice(), &[(0, 'z'), (1, 'a'), (1, 'b')]);
    }

    #[test]
    fn from_unsorted_unique_keeps_first() {
        let core = PairCore::from_unsorted(vec![(2, 'a'), (1, 'b'), (2, 'c')], Less, true);
        assert_eq!(core.as_slice(), &[(1, 'b'), (2, 'a')]);
    }

    #[test]
    fn from_unsorted_equal_is_stable() {
        let core = PairCore::from_unsorted(vec![(2, 'a'), (1, 'b'), (2, 'c')], Less, false);
        assert_eq!(core.as_slice(), &[(1, 'b'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn find_and_count() {
        let core = core_of(&[4, 1, 4, 9]);
        assert_eq!(core.find(&4), Some(1));
        assert_eq!(core.find(&5), None);
        assert_eq!(core.find(&10), None);
        assert_eq!(core.count(&4), 2);
        assert_eq!(core.count(&7), 0);
    }

    #[test]
    fn remove_equal_takes_whole_run() {
        let mut core = core_of(&[3, 3, 1, 3, 8]);
        assert_eq!(core.remove_equal(&3), 3);
        assert_eq!(core.as_slice(), &[1, 8]);
        assert_eq!(core.remove_equal(&3), 0);
    }

    #[test]
    fn remove_unique_returns_entry() {
        let mut core = core_of(&[1, 2, 3]);
        assert_eq!(core.remove_unique(&2), Some(2));
        assert_eq!(core.remove_unique(&2), None);
        assert_eq!(core.len(), 2);
    }

    #[test]
    fn erase_range_returns_start() {
        let mut core = core_of(&[1, 2, 3, 4]);
        assert_eq!(core.erase_range(1..3), 1);
        assert_eq!(core.as_slice(), &[1, 4]);
    }

    #[test]
    fn position_in_bounded_window() {
        let core = core_of(&[1, 2, 3, 2]);
        let is_two = |v: &u32| *v == 2;
        assert_eq!(core.position_in(.., is_two), Some(1));
        assert_eq!(core.position_in(2..4, is_two), Some(3));
        assert_eq!(core.position_in(2..=2, is_two), None);
        assert_eq!(core.position_in(2.., is_two), Some(1));
    }

    #[test]
    fn insert_at_checks_order() {
        let mut core = core_of(&[1, 5]);
        let pos = core.lower_bound(&3);
        assert_eq!(core.insert_at(pos, 3), 1);
        assert_eq!(core.as_slice(), &[1, 3, 5]);
    }

    #[test]
    #[should_panic(expected = "contract violation: insert at position 0 would break")]
    fn insert_at_rejects_misplaced_entry() {
        let mut core = core_of(&[1, 5]);
        core.insert_at(0, 9);
    }

    #[test]
    #[should_panic(expected = "contract violation: insert position 3 out of range for length 2")]
    fn insert_at_past_end_is_contract_violation() {
        let mut core = core_of(&[1, 5]);
        core.insert_at(3, 9);
    }

    #[test]
    #[should_panic(expected = "contract violation: search range 2..5 out of range")]
    fn position_in_past_end_is_contract_violation() {
        let core = core_of(&[1, 2, 3]);
        core.position_in(2..=4, |v| *v == 3);
    }

    #[test]
    #[should_panic(expected = "contract violation: erase position 2 out of range")]
    fn take_at_past_end_is_contract_violation() {
        let mut core = core_of(&[1, 5]);
        core.take_at(2);
    }

    #[test]
    #[should_panic(expected = "contract violation: erase range")]
    fn erase_range_past_end_is_contract_violation() {
        let mut core = core_of(&[1, 5]);
        core.erase_range(1..3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unique_inserts_stay_strictly_ascending(
                values in proptest::collection::vec(0u32..50, 0..80),
            ) {
                let mut core = Core::new(Less);
                for v in &values {
                    core.insert_unique(*v);
                }
                prop_assert!(core.as_slice().windows(2).all(|w| w[0] < w[1]));
                for v in &values {
                    prop_assert!(core.find(v).is_some());
                }
            }

            #[test]
            fn bulk_build_matches_one_at_a_time(
                values in proptest::collection::vec((0u32..20, any::<char>()), 0..60),
            ) {
                let mut one_by_one = PairCore::new(Less);
                for v in &values {
                    one_by_one.insert_unique(*v);
                }
                let bulk = PairCore::from_unsorted(values.clone(), Less, true);
                prop_assert_eq!(one_by_one.as_slice(), bulk.as_slice());
            }
        }
    }
}
