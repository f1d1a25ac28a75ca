//! The growable contiguous storage contract.
//!
//! Sorted containers own exactly one [`Sequence`] and keep it ordered. The
//! trait captures only what they need from it: slice access, positional
//! insert and erase (single and bulk), `clear` and `swap`. Growth strategy is
//! the implementation's business.
//!
//! Any call that inserts or erases may move every element, so positions
//! obtained before the call are meaningless after it.

use std::ops::Range;

use smallvec::{Array, SmallVec};

/// A contiguous, randomly indexable, growable sequence.
///
/// Implemented for [`Vec<T>`] and [`SmallVec<A>`].
pub trait Sequence<T>: Default {
    /// Create an empty sequence with room for at least `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// All elements, in storage order.
    fn as_slice(&self) -> &[T];

    /// All elements, mutably. Callers must not break their own ordering.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Number of elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element.
    fn clear(&mut self);

    /// Reserve room for `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Append at the end. Constant time amortised.
    fn push(&mut self, value: T);

    /// Insert `value` at `pos`, shifting later elements up.
    ///
    /// Returns the position of the new element (always `pos`).
    fn insert_at(&mut self, pos: usize, value: T) -> usize;

    /// Insert every element of `values` starting at `pos`, in order.
    ///
    /// Returns `pos`.
    fn insert_many<I: IntoIterator<Item = T>>(&mut self, pos: usize, values: I) -> usize;

    /// Remove and return the element at `pos`, shifting later elements down.
    fn erase_at(&mut self, pos: usize) -> T;

    /// Remove the elements in `range`.
    ///
    /// Returns the position following the removed range, which after the
    /// shift is `range.start`.
    fn erase_range(&mut self, range: Range<usize>) -> usize;

    /// Keep only the elements for which `keep` returns `true`, preserving
    /// their relative order.
    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F);

    /// Exchange contents with `other`.
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert_at(&mut self, pos: usize, value: T) -> usize {
        self.insert(pos, value);
        pos
    }

    fn insert_many<I: IntoIterator<Item = T>>(&mut self, pos: usize, values: I) -> usize {
        self.splice(pos..pos, values);
        pos
    }

    fn erase_at(&mut self, pos: usize) -> T {
        self.remove(pos)
    }

    fn erase_range(&mut self, range: Range<usize>) -> usize {
        let start = range.start;
        self.drain(range);
        start
    }

    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        Vec::retain(self, keep);
    }
}

impl<A: Array> Sequence<A::Item> for SmallVec<A> {
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }

    fn as_slice(&self) -> &[A::Item] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        self
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }

    fn push(&mut self, value: A::Item) {
        SmallVec::push(self, value);
    }

    fn insert_at(&mut self, pos: usize, value: A::Item) -> usize {
        self.insert(pos, value);
        pos
    }

    fn insert_many<I: IntoIterator<Item = A::Item>>(&mut self, pos: usize, values: I) -> usize {
        SmallVec::insert_many(self, pos, values);
        pos
    }

    fn erase_at(&mut self, pos: usize) -> A::Item {
        self.remove(pos)
    }

    fn erase_range(&mut self, range: Range<usize>) -> usize {
        let start = range.start;
        self.drain(range);
        start
    }

    fn retain<F: FnMut(&A::Item) -> bool>(&mut self, mut keep: F) {
        SmallVec::retain(self, |item| keep(item));
    }
}
