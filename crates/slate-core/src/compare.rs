//! Ordering predicates for the sorted containers.
//!
//! A [`Comparator`] answers one question, "does `a` order strictly before
//! `b`?". Two values are *equivalent* when neither orders before the other.
//! Binary search is only correct when the predicate is a strict weak order:
//! irreflexive, asymmetric and transitive, with transitive equivalence.

use std::cmp::Ordering;
use std::fmt;

/// A strict ordering over `T`.
///
/// Implemented by the stock comparators [`Less`], [`Greater`], [`ByFn`] and
/// [`ByKey`]. Containers hold their comparator by value, so stateful
/// comparators are allowed as long as their answers never change while the
/// container is alive.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if neither argument orders before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Three-way form of [`less`](Comparator::less).
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}

/// Ascending order by [`Ord`]. The default for every container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Comparator<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Comparator<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Order by an arbitrary `less-than` closure.
///
/// ```
/// use slate_core::{ByFn, Comparator};
///
/// let by_last_digit = ByFn::new(|a: &u32, b: &u32| a % 10 < b % 10);
/// assert!(by_last_digit.less(&3, &14));
/// assert!(by_last_digit.equivalent(&12, &2));
/// ```
#[derive(Clone, Copy)]
pub struct ByFn<F>(F);

impl<F> ByFn<F> {
    /// Wrap a `less-than` predicate.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for ByFn<F> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for ByFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByFn")
    }
}

/// Ascending order of a key extracted from each value.
///
/// ```
/// use slate_core::{ByKey, Comparator};
///
/// let by_abs = ByKey::new(|v: &i32| v.unsigned_abs());
/// assert!(by_abs.less(&-1, &2));
/// assert!(by_abs.equivalent(&-3, &3));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

impl<F> ByKey<F> {
    /// Wrap a key-extraction function.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<F> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey")
    }
}
