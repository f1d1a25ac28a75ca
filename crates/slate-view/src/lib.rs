//! Non-owning read-only memory views.
//!
//! A [`MemLink`] is a pointer and a size describing bytes that somebody
//! else owns. Linking never copies or allocates, and dropping a view never
//! frees anything. The view can be compared by content, streamed to any
//! `io::Write` with a length prefix, and dumped to a file.
//!
//! # Ownership
//!
//! Views built from safe slices ([`MemLink::from_slice`],
//! [`MemLink::link_slice`]) borrow the slice for `'a`, so the borrow checker
//! keeps the bytes alive. Views built from raw pointers ([`MemLink::link`],
//! [`MemLink::link_range`]) move that responsibility to the caller, which is
//! why those constructors are `unsafe`.
//!
//! This crate is the only one in the workspace that contains `unsafe` code,
//! and all of it sits in the private `raw` module, including the raw-linking
//! methods of [`MemLink`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod link;
mod raw;

pub use error::ViewError;
pub use link::MemLink;
