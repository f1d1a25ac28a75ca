//! Sorted-vector associative containers.
//!
//! [`SortedMap`], [`SortedMultimap`] and [`SortedSet`] keep their entries in
//! one contiguous [`Sequence`](slate_core::Sequence), sorted under a
//! [`Comparator`](slate_core::Comparator). Lookups are binary searches over
//! that slice; inserts and removals shift the tail. All three share one
//! ordered core, so search, bounds and erase behave identically across them.
//!
//! Positions are `usize` indices into the sorted entries, with `len()` as the
//! end position. Any insert or erase invalidates positions taken earlier.
//!
//! Precondition failures (an out-of-range position, `at` on a missing key)
//! are reported through [`slate_core::contract!`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod engine;
pub mod iter;
pub mod map;
pub mod multimap;
pub mod search;
pub mod set;

pub use map::{SmallSortedMap, SortedMap};
pub use multimap::{SmallSortedMultimap, SortedMultimap};
pub use set::{SmallSortedSet, SortedSet};
