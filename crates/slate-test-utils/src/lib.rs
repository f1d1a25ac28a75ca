//! Test utilities and mock types for Slate development.
//!
//! Provides an instrumented comparator ([`CountingComparator`]), sinks that
//! fail on demand ([`FailingSink`]), a self-deleting [`ScratchFile`], and
//! reference models the sorted containers are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use slate_core::Comparator;
use tempfile::TempDir;

pub use fixtures::{employees, Employee};

/// Wraps a comparator and counts how many times it is consulted.
///
/// Clones share one counter, so a test can hand a clone to a container and
/// keep another to read [`count`](CountingComparator::count).
#[derive(Clone, Debug, Default)]
pub struct CountingComparator<C> {
    inner: C,
    calls: Arc<AtomicUsize>,
}

impl<C> CountingComparator<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Comparisons made since creation or the last [`reset`](Self::reset).
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for CountingComparator<C> {
    fn less(&self, a: &T, b: &T) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.less(a, b)
    }
}

/// A sink that accepts `capacity` bytes and then fails every write.
///
/// With `short == true` the failure is a zero-length write, which
/// `write_all` reports as [`io::ErrorKind::WriteZero`]; otherwise it is an
/// explicit [`io::ErrorKind::Other`] error.
#[derive(Debug)]
pub struct FailingSink {
    pub written: Vec<u8>,
    capacity: usize,
    short: bool,
}

impl FailingSink {
    pub fn erroring_after(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
            short: false,
        }
    }

    pub fn short_after(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
            short: true,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.capacity - self.written.len();
        if room == 0 {
            if self.short {
                return Ok(0);
            }
            return Err(io::Error::other("sink full"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A file path inside a fresh temporary directory. The directory and
/// everything in it are removed on drop.
#[derive(Debug)]
pub struct ScratchFile {
    dir: TempDir,
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(tag: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix("slate-")
            .tempdir()
            .expect("failed to create scratch directory");
        let path = dir.path().join(format!("{tag}.bin"));
        Self { dir, path }
    }

    /// The file path. Nothing is created there until a test writes it.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory holding [`path`](Self::path).
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Reference model for a unique-key map: the first insert of each key wins,
/// later ones are ignored, and the result is sorted by key.
pub fn model_unique<K: Ord + Clone, V: Clone>(inserts: &[(K, V)]) -> Vec<(K, V)> {
    let mut out: Vec<(K, V)> = Vec::new();
    for (k, v) in inserts {
        if !out.iter().any(|(ok, _)| ok == k) {
            out.push((k.clone(), v.clone()));
        }
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

/// Reference model for a multimap: a stable sort by key keeps equal keys in
/// insertion order.
pub fn model_multi<K: Ord + Clone, V: Clone>(inserts: &[(K, V)]) -> Vec<(K, V)> {
    let mut out = inserts.to_vec();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}
