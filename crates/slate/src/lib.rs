//! Slate: flat sorted containers and non-owning memory views.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Slate sub-crates. For most users, adding `slate` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slate::prelude::*;
//!
//! // A multimap keeps every value, grouped by key in insertion order.
//! let mut payroll = SortedMultimap::new();
//! payroll.insert(47000, "Gail");
//! payroll.insert(27000, "Dave");
//! payroll.insert(47000, "Mary");
//! let band: Vec<_> = payroll.get_all(&47000).iter().map(|(_, n)| *n).collect();
//! assert_eq!(band, ["Gail", "Mary"]);
//!
//! // A map keeps the first value per key.
//! let mut ages: SortedMap<&str, u32> = SortedMap::new();
//! *ages.get_or_insert_default("ada") += 36;
//! assert_eq!(ages.insert("ada", 99), (0, false));
//! assert_eq!(ages[&"ada"], 36);
//!
//! // A view borrows bytes and streams them with a length prefix.
//! let bytes = *b"slate";
//! let view = MemLink::from_slice(&bytes);
//! let mut out = Vec::new();
//! let written = view.write(&mut out)?;
//! assert_eq!(written, view.stream_size());
//! assert_eq!(&out[4..9], b"slate");
//! # Ok::<(), ViewError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`base`] | `slate-core` | Comparators, the storage trait, stream layout, `contract!` |
//! | [`view`] | `slate-view` | `MemLink` and its error type |
//! | [`assoc`] | `slate-assoc` | Sorted map, multimap and set |
//!
//! # Contract checks
//!
//! Precondition violations (linking a null pointer with a length, erasing
//! past the end, `at` on a missing key) panic with a `contract violation:`
//! message in debug builds. Enable the `contract-checks` feature to keep
//! them in release builds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Comparators, storage, stream layout and contract checks (`slate-core`).
///
/// The [`base::Comparator`] and [`base::Sequence`] traits are the extension
/// points for custom orderings and custom storage.
pub use slate_core as base;

/// Non-owning memory views (`slate-view`).
///
/// [`view::MemLink`] borrows a byte range and writes it to streams and
/// files.
pub use slate_view as view;

/// Sorted-vector associative containers (`slate-assoc`).
///
/// [`assoc::SortedMap`], [`assoc::SortedMultimap`] and [`assoc::SortedSet`],
/// plus their inline-storage aliases.
pub use slate_assoc as assoc;

/// Common imports for typical Slate usage.
///
/// ```rust
/// use slate::prelude::*;
/// ```
pub mod prelude {
    // Ordering and storage
    pub use slate_core::{
        ByFn, ByKey, Comparator, Greater, Less, Sequence, StreamConfig, Streamable,
    };

    // Views
    pub use slate_view::{MemLink, ViewError};

    // Containers
    pub use slate_assoc::{
        SmallSortedMap, SmallSortedMultimap, SmallSortedSet, SortedMap, SortedMultimap, SortedSet,
    };
}
