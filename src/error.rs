//! Error taxonomy for `Arena::free` (spec §7).
//!
//! `init` and `allocate` fail by returning `None` — there is no degraded
//! state to describe, just "try again with different inputs" — so only
//! `free` gets a real error enum.

/// Why `Arena::free` refused a pointer. Freeing `None` is *not* one of
/// these: it is `Ok(())`, matching "free(null) is a no-op" (§8 property 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FreeError {
    /// The pointer does not lie within `[buffer_base, buffer_base + buffer_size)`.
    #[error("pointer is outside the arena's buffer range")]
    OutOfRange,
    /// The reconstructed header's `next` is not the allocated sentinel:
    /// either a foreign pointer, or a corrupted header.
    #[error("pointer is not a live allocation of this arena")]
    NotAllocated,
    /// The reconstructed header's `is_free` was already true.
    #[error("double free")]
    DoubleFree,
}
