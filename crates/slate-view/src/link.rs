//! The [`MemLink`] memory view.

use std::fmt;
use std::fs::OpenOptions;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};
use std::marker::PhantomData;
use std::ops::{Deref, Range};
use std::path::Path;
use std::ptr;

use log::{debug, trace};
use slate_core::contract;
use slate_core::stream::{write_padding, write_u32_le};
use slate_core::{StreamConfig, Streamable};

use crate::error::ViewError;
use crate::raw;

/// A read-only pointer to a sized block of memory owned by someone else.
///
/// The pointer is null exactly when the size is zero. Copying a view copies
/// the link, never the bytes.
///
/// ```
/// use slate_view::MemLink;
///
/// let buf = vec![7u8; 46];
/// let mut a = MemLink::new();
/// a.link_slice(&buf);
/// assert_eq!(a.size(), 46);
///
/// let b = a;
/// assert_eq!(b.get(34), a.get(34));
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy)]
pub struct MemLink<'a> {
    /// First linked byte, or null for an empty view.
    pub(crate) ptr: *const u8,
    /// Number of visible bytes.
    pub(crate) len: usize,
    _bytes: PhantomData<&'a [u8]>,
}

impl<'a> MemLink<'a> {
    /// Permission bits used by [`write_file`](MemLink::write_file).
    pub const DEFAULT_FILE_MODE: u32 = 0o644;

    /// An empty view.
    pub const fn new() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _bytes: PhantomData,
        }
    }

    /// A view of `bytes`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        let mut link = Self::new();
        link.link_slice(bytes);
        link
    }

    /// Link to `bytes`, replacing the current link.
    ///
    /// An empty slice produces an empty (null) view.
    pub fn link_slice(&mut self, bytes: &'a [u8]) {
        if bytes.is_empty() {
            self.unlink();
        } else {
            self.ptr = bytes.as_ptr();
            self.len = bytes.len();
        }
    }

    /// Link to whatever `other` is linked to.
    pub fn link_view(&mut self, other: &MemLink<'a>) {
        self.ptr = other.ptr;
        self.len = other.len;
    }

    /// Reset to the empty view. The referenced memory is not touched.
    pub fn unlink(&mut self) {
        self.ptr = ptr::null();
        self.len = 0;
    }

    /// Number of linked bytes.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias for [`size`](MemLink::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Largest size the view can report without relinking. Equal to
    /// [`size`](MemLink::size) for a read-only view.
    pub fn max_size(&self) -> usize {
        self.len
    }

    /// Bytes available for reading. Equal to [`size`](MemLink::size).
    pub fn readable_size(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes are linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The linked pointer, null for an empty view.
    pub fn data(&self) -> *const u8 {
        self.ptr
    }

    /// The linked bytes.
    pub fn as_slice(&self) -> &'a [u8] {
        raw::linked_bytes(self)
    }

    /// Begin and end pointers of the linked range.
    pub fn as_ptr_range(&self) -> Range<*const u8> {
        self.ptr..self.iat(self.len)
    }

    /// Pointer to byte `i`; `i == size()` yields the end pointer.
    ///
    /// `i > size()` is a contract violation.
    pub fn iat(&self, i: usize) -> *const u8 {
        contract!(i <= self.len, "MemLink::iat({i}) past size {}", self.len);
        self.ptr.wrapping_add(i)
    }

    /// Byte `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<u8> {
        self.as_slice().get(i).copied()
    }

    /// Iterate over the linked bytes.
    pub fn iter(&self) -> std::slice::Iter<'a, u8> {
        self.as_slice().iter()
    }

    /// Shrink the visible size to `n`. No effect if `n >= size()`.
    ///
    /// The pointer is kept, so a later [`resize`](MemLink::resize) can grow
    /// the view back.
    pub fn truncate(&mut self, n: usize) {
        if n < self.len {
            self.len = n;
        }
    }

    /// Exchange links with `other`.
    pub fn swap(&mut self, other: &mut MemLink<'a>) {
        std::mem::swap(self, other);
    }

    /// Bytes [`write`](MemLink::write) will emit: the `u32` length prefix
    /// plus the data, rounded up to the default alignment.
    pub fn stream_size(&self) -> usize {
        self.stream_size_with(&StreamConfig::default())
    }

    /// [`stream_size`](MemLink::stream_size) for an explicit layout.
    ///
    /// A config that fails [`StreamConfig::validate`] is a contract
    /// violation, matching the error [`write_with`](MemLink::write_with)
    /// returns for it.
    pub fn stream_size_with(&self, config: &StreamConfig) -> usize {
        contract!(
            config.validate().is_ok(),
            "stream_size_with on invalid alignment {}",
            config.align
        );
        config.padded_len(StreamConfig::PREFIX_LEN.saturating_add(self.len))
    }

    /// Write the length prefix, the raw bytes and alignment padding to
    /// `sink`. Returns the number of bytes written, which always equals
    /// [`stream_size`](MemLink::stream_size).
    pub fn write(&self, sink: &mut dyn Write) -> Result<usize, ViewError> {
        self.write_with(sink, &StreamConfig::default())
    }

    /// [`write`](MemLink::write) for an explicit layout.
    ///
    /// Fails with [`ViewError::InvalidConfig`] or [`ViewError::TooLarge`]
    /// before writing anything.
    pub fn write_with(&self, sink: &mut dyn Write, config: &StreamConfig) -> Result<usize, ViewError> {
        config.validate()?;
        let prefix = u32::try_from(self.len).map_err(|_| ViewError::TooLarge { len: self.len })?;
        write_u32_le(sink, prefix)?;
        sink.write_all(self.as_slice())?;
        let written = StreamConfig::PREFIX_LEN + self.len;
        let pad = write_padding(sink, written, config)?;
        trace!("streamed view: {} data bytes, {pad} padding", self.len);
        Ok(written + pad)
    }

    /// Views are read-only: reading one from a stream is a contract
    /// violation. With contract checks compiled out this does nothing.
    pub fn read(&mut self, _source: &mut dyn Read) -> Result<(), ViewError> {
        contract!(false, "MemLink is a read-only object");
        Ok(())
    }

    /// Write a `len=N [hex bytes]` debugging form to `out`.
    pub fn text_write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "len={} [", self.len)?;
        for (i, b) in self.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{b:02x}")?;
        }
        out.write_char(']')
    }

    /// Write the raw bytes (no length prefix) to a new file at `path`,
    /// created with mode `0o644`.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ViewError> {
        self.write_file_with_mode(path, Self::DEFAULT_FILE_MODE)
    }

    /// Write the raw bytes to `path`, creating or truncating it. `mode` is
    /// the permission set for a newly created file (Unix only; subject to
    /// the process umask).
    pub fn write_file_with_mode<P: AsRef<Path>>(&self, path: P, mode: u32) -> Result<(), ViewError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path).map_err(|e| {
            debug!("open {} failed: {e}", path.display());
            ViewError::file("open", path, e)
        })?;
        file.write_all(self.as_slice()).map_err(|e| {
            debug!("write {} failed after open: {e}", path.display());
            ViewError::file("write", path, e)
        })?;
        debug!("wrote {} bytes to {}", self.len, path.display());
        Ok(())
    }
}

impl MemLink<'static> {
    /// A view of a static byte array.
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl Default for MemLink<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> From<&'a [u8]> for MemLink<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for MemLink<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for MemLink<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::from_slice(bytes)
    }
}

impl Deref for MemLink<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for MemLink<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &MemLink<'a> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b> PartialEq<MemLink<'b>> for MemLink<'_> {
    fn eq(&self, other: &MemLink<'b>) -> bool {
        self.len == other.len && (ptr::eq(self.ptr, other.ptr) || self.as_slice() == other.as_slice())
    }
}

impl Eq for MemLink<'_> {}

impl PartialEq<[u8]> for MemLink<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl Hash for MemLink<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for MemLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemLink")
            .field("data", &self.ptr)
            .field("size", &self.len)
            .finish()
    }
}

impl fmt::Display for MemLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text_write(f)
    }
}

impl Streamable for MemLink<'_> {
    fn stream_size(&self) -> usize {
        MemLink::stream_size(self)
    }

    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        match self.write(sink) {
            Ok(_) => Ok(()),
            Err(ViewError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }

    fn read_from(&mut self, source: &mut dyn Read) -> io::Result<()> {
        self.read(source).map_err(io::Error::other)
    }
}
