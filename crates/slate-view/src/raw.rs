//! Low-level primitives behind [`MemLink`].
//!
//! Every `unsafe` item in the crate lives here: the raw-pointer linking
//! methods, slice reconstruction and the `Send`/`Sync` impls. Each `unsafe`
//! block carries a `// SAFETY:` comment stating what the caller guarantees.

#![allow(unsafe_code)]

use slate_core::contract;

use crate::link::MemLink;

/// Reinterpret a linked pointer/size pair as a byte slice.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be valid for reads of `len` bytes for `'a`, and
/// the bytes must not be mutated while the slice is alive.
#[inline]
pub(crate) unsafe fn bytes<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if len == 0 {
        return &[];
    }
    // SAFETY: non-empty views hold a non-null pointer; validity for `len`
    // bytes over `'a` is the caller's linking contract.
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

/// The bytes a view is linked to.
#[inline]
pub(crate) fn linked_bytes<'a>(link: &MemLink<'a>) -> &'a [u8] {
    // SAFETY: every way of setting a `MemLink<'a>`'s fields is either a safe
    // slice borrow for `'a` or an `unsafe` method below whose caller promised
    // validity for `len` bytes over `'a`.
    unsafe { bytes(link.ptr, link.len) }
}

/// Number of bytes between `first` and `last`.
///
/// # Safety
///
/// Both pointers must be derived from the same allocation and
/// `first <= last`.
#[inline]
pub(crate) unsafe fn distance(first: *const u8, last: *const u8) -> usize {
    // SAFETY: same allocation and ordering are the caller's contract.
    let diff = unsafe { last.offset_from(first) };
    diff as usize
}

/// Linking to raw memory. The caller takes over the borrow checker's job of
/// keeping the bytes alive and unmodified for `'a`.
impl<'a> MemLink<'a> {
    /// Link to `len` bytes at `ptr`.
    ///
    /// A null `ptr` with a non-zero `len` is a contract violation. A zero
    /// `len` produces the empty view whatever `ptr` is.
    ///
    /// # Safety
    ///
    /// If `len > 0`, `ptr` must be valid for reads of `len` bytes for all of
    /// `'a`, and nothing may write to those bytes during `'a`.
    pub unsafe fn link(&mut self, ptr: *const u8, len: usize) {
        contract!(!ptr.is_null() || len == 0, "null pointer linked with size {len}");
        if len == 0 {
            self.unlink();
        } else {
            // SAFETY: forwarded to the caller.
            unsafe { self.relink(ptr, len) };
        }
    }

    /// Link to the bytes in `[first, last)`.
    ///
    /// `last` before `first` is a contract violation.
    ///
    /// # Safety
    ///
    /// Both pointers must come from the same allocation, `first <= last`,
    /// and the range must satisfy the contract of [`link`](MemLink::link).
    pub unsafe fn link_range(&mut self, first: *const u8, last: *const u8) {
        contract!(first <= last, "link_range with last before first");
        // SAFETY: forwarded to the caller.
        unsafe {
            let len = distance(first, last);
            self.link(first, len);
        }
    }

    /// Replace both fields without any contract check.
    ///
    /// # Safety
    ///
    /// As for [`link`](MemLink::link), and additionally `ptr` must be
    /// non-null whenever `len > 0`.
    pub unsafe fn relink(&mut self, ptr: *const u8, len: usize) {
        self.ptr = ptr;
        self.len = len;
    }

    /// Change the reported size without reallocating anything.
    ///
    /// Growing exposes bytes past the originally linked extent. This is an
    /// escape hatch for views into buffers known to be larger than their
    /// currently visible prefix. Use [`truncate`](MemLink::truncate) to
    /// shrink safely. A non-zero `n` on an unlinked view is a contract
    /// violation.
    ///
    /// # Safety
    ///
    /// The first `n` bytes at [`data`](MemLink::data) must be valid for
    /// reads for the rest of `'a`.
    pub unsafe fn resize(&mut self, n: usize) {
        contract!(!self.ptr.is_null() || n == 0, "resize({n}) of an unlinked view");
        self.len = n;
    }
}

// SAFETY: a view is semantically a shared `&'a [u8]`: it never writes
// through its pointer and has no interior mutability, so sharing or sending
// it is as safe as sharing or sending the slice.
unsafe impl Send for MemLink<'_> {}
// SAFETY: see the `Send` impl above.
unsafe impl Sync for MemLink<'_> {}
