//! Borrowing iterators over `(K, V)` entries.
//!
//! Shared by [`SortedMap`](crate::SortedMap) and
//! [`SortedMultimap`](crate::SortedMultimap). All of them walk the sorted
//! entries in key order and never hand out a mutable key.

use std::iter::FusedIterator;
use std::slice;

macro_rules! pair_iter {
    ($(#[$meta:meta])* $name:ident<$lt:lifetime>, $inner:ty, $item:ty, |$e:ident| $map:expr) => {
        $(#[$meta])*
        pub struct $name<$lt, K, V> {
            pub(crate) inner: $inner,
        }

        impl<$lt, K, V> Iterator for $name<$lt, K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$e| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$lt, K, V> DoubleEndedIterator for $name<$lt, K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$e| $map)
            }
        }

        impl<$lt, K, V> ExactSizeIterator for $name<$lt, K, V> {}
        impl<$lt, K, V> FusedIterator for $name<$lt, K, V> {}
    };
}

pair_iter!(
    /// Entries in key order, as `(&K, &V)`.
    #[derive(Clone, Debug)]
    Iter<'a>, slice::Iter<'a, (K, V)>, (&'a K, &'a V), |e| (&e.0, &e.1)
);

pair_iter!(
    /// Entries in key order, with the values mutable.
    #[derive(Debug)]
    IterMut<'a>, slice::IterMut<'a, (K, V)>, (&'a K, &'a mut V), |e| (&e.0, &mut e.1)
);

pair_iter!(
    /// Keys in order.
    #[derive(Clone, Debug)]
    Keys<'a>, slice::Iter<'a, (K, V)>, &'a K, |e| &e.0
);

pair_iter!(
    /// Values in key order.
    #[derive(Clone, Debug)]
    Values<'a>, slice::Iter<'a, (K, V)>, &'a V, |e| &e.1
);

pair_iter!(
    /// Mutable values in key order.
    #[derive(Debug)]
    ValuesMut<'a>, slice::IterMut<'a, (K, V)>, &'a mut V, |e| &mut e.1
);

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(entries: &'a [(K, V)]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(entries: &'a mut [(K, V)]) -> Self {
        Self {
            inner: entries.iter_mut(),
        }
    }
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(entries: &'a [(K, V)]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(entries: &'a [(K, V)]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(crate) fn new(entries: &'a mut [(K, V)]) -> Self {
        Self {
            inner: entries.iter_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterators_walk_both_ends() {
        let entries = [(1, 'a'), (2, 'b'), (3, 'c')];
        let mut it = Iter::new(&entries);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some((&1, &'a')));
        assert_eq!(it.next_back(), Some((&3, &'c')));
        assert_eq!(it.len(), 1);
        assert_eq!(Keys::new(&entries).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(Values::new(&entries).rev().copied().collect::<String>(), "cba");
    }

    #[test]
    fn mutable_iterators_touch_values_only() {
        let mut entries = [(1, 10), (2, 20)];
        for (k, v) in IterMut::new(&mut entries) {
            *v += *k;
        }
        for v in ValuesMut::new(&mut entries) {
            *v *= 2;
        }
        assert_eq!(entries, [(1, 22), (2, 44)]);
    }
}
