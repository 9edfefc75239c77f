//! The block header.
//!
//! Every block in the arena — free or allocated — is prefixed by a
//! [`Header`]. The header's `next` field doubles as the allocated-sentinel:
//! a block is a free-list member iff `next != Header::ALLOCATED`, which is
//! also exactly when `is_free` is true (§3's invariant, enforced by
//! construction rather than checked at runtime).

use core::mem;

/// Fixed-size bookkeeping record at the start of every block.
pub(crate) struct Header {
    /// Next free block, or [`Header::ALLOCATED`] if this block is in use.
    pub(crate) next: *mut Header,
    /// Payload byte count: usable free bytes, or (for an allocated block)
    /// padding + the one reverse-offset byte + the user's requested bytes.
    pub(crate) size: usize,
    /// Redundant status flag, used for double-free detection in `free`.
    pub(crate) is_free: bool,
}

impl Header {
    /// Byte size of a header, i.e. how much every block's bookkeeping
    /// costs before its payload starts.
    pub(crate) const SIZE: usize = mem::size_of::<Header>();

    /// Sentinel value for `next` marking a block as allocated (not a
    /// free-list member). This is never a real header address: headers
    /// always live inside the caller's buffer, and a `usize::MAX` address
    /// cannot be, since the buffer plus a header would overflow the
    /// address space first.
    pub(crate) const ALLOCATED: *mut Header = usize::MAX as *mut Header;

    /// Terminator for the end of the free list (an empty list, or the
    /// last free block's `next`).
    pub(crate) const END_OF_LIST: *mut Header = core::ptr::null_mut();

    pub(crate) fn new_free(size: usize, next: *mut Header) -> Self {
        Self {
            next,
            size,
            is_free: true,
        }
    }

    pub(crate) fn new_allocated(size: usize) -> Self {
        Self {
            next: Self::ALLOCATED,
            size,
            is_free: false,
        }
    }

    /// Reads `next` through a raw pointer without requiring `ptr` to
    /// already point at a valid `Header` — every bit pattern is a valid
    /// `*mut Header`, so this never risks the validity UB a `&Header`
    /// reference over unvalidated memory would.
    ///
    /// # Safety
    /// `ptr` must be non-null, aligned for `Header`, and the `next`
    /// field's bytes must lie within a single live allocation.
    pub(crate) unsafe fn read_next(ptr: *const Header) -> *mut Header {
        unsafe { core::ptr::addr_of!((*ptr).next).read_unaligned() }
    }

    /// Reads `size` through a raw pointer. See [`Self::read_next`] for why
    /// this avoids forming a `&Header`.
    ///
    /// # Safety
    /// Same requirements as [`Self::read_next`], for the `size` field.
    pub(crate) unsafe fn read_size(ptr: *const Header) -> usize {
        unsafe { core::ptr::addr_of!((*ptr).size).read_unaligned() }
    }

    /// Reads `is_free` as a raw byte rather than `bool`: a `bool` read
    /// requires the byte to already be a valid `0`/`1`, which is exactly
    /// what cannot be assumed about memory recovered from an unvalidated
    /// caller pointer.
    ///
    /// # Safety
    /// Same requirements as [`Self::read_next`], for the `is_free` field.
    pub(crate) unsafe fn read_is_free(ptr: *const Header) -> bool {
        // SAFETY: forwarded from the caller of this function.
        let byte_ptr = unsafe { core::ptr::addr_of!((*ptr).is_free) } as *const u8;
        // SAFETY: forwarded from the caller of this function.
        unsafe { byte_ptr.read() != 0 }
    }
}

/// Read-only accessors for walking the free list from tests, kept out of
/// the non-test build rather than making the fields themselves public.
#[cfg(test)]
impl Header {
    pub(crate) fn is_free(&self) -> bool {
        self.is_free
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn next(&self) -> *mut Header {
        self.next
    }
}
