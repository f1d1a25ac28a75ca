//! Core traits and contract checks for the Slate container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! seams every other Slate crate composes through:
//!
//! - [`contract!`]: the precondition-check layer for programmer errors.
//! - [`Comparator`]: the strict ordering consumed by the sorted containers.
//! - [`Sequence`]: the growable contiguous storage the containers own.
//! - [`Streamable`] and [`StreamConfig`]: the binary stream contract used by
//!   memory views.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod contract;
pub mod sequence;
pub mod stream;

pub use compare::{ByFn, ByKey, Comparator, Greater, Less};
pub use config::{ConfigError, StreamConfig};
pub use sequence::Sequence;
pub use stream::Streamable;
