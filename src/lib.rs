//! # fixedheap - a fixed-region heap allocator
//!
//! Given a caller-supplied contiguous byte buffer, [`Arena`](arena::Arena)
//! services variable-size `allocate`/`free` requests entirely within that
//! region. It never calls the host allocator, never grows, and never
//! outlives the buffer it was handed — the buffer is the heap.
//!
//! ## Overview
//!
//! ```text
//!   Caller-owned buffer:
//!
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ [hdr][ A, allocated ][hdr][  free  ][hdr][ B, allocated ][hdr][free]│
//!   └──────────────────────────────────────────────────────────────────┘
//!
//!   Free blocks are threaded into a singly linked list through the
//!   buffer itself; `allocate` walks it best-fit, `free` walks it once
//!   more to coalesce with any physically adjacent neighbors.
//! ```
//!
//! ## Crate structure
//!
//! ```text
//!   fixedheap
//!   ├── align   - MAX_ALIGN and the align_up!/align_up rounding helpers
//!   ├── header  - block header layout (internal)
//!   ├── error   - FreeError, the taxonomy of free() failures
//!   ├── arena   - Arena: init / allocate / free / fragmentation
//!   └── logger  - injectable Logger trait (feature `logging`)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use fixedheap::Arena;
//!
//! let mut buf = [0u8; 4096];
//! let mut arena = Arena::init(&mut buf).expect("buffer too small");
//!
//! let ptr = arena.allocate(64).expect("out of memory");
//! unsafe {
//!     ptr.as_ptr().write_bytes(0xAB, 64);
//! }
//! arena.free(Some(ptr)).expect("not a live allocation");
//! ```
//!
//! ## Features
//!
//! - `logging` (default off): adds [`Arena::init_with_logger`](arena::Arena::init_with_logger)
//!   and the [`Logger`](logger::Logger) trait, plus a [`LogCrate`](logger::LogCrate)
//!   adapter forwarding to the `log` crate.
//! - `stats` (default off): adds [`Arena::fragmentation`](arena::Arena::fragmentation).
//!
//! ## Limitations
//!
//! - **Single-threaded only**: `Arena` is neither `Send` nor `Sync`.
//! - **No resize**: an allocation's size is fixed for its lifetime.
//! - **No per-request alignment**: every pointer is aligned to
//!   [`align::MAX_ALIGN`], never less, never more.
//! - **No growth, no compaction, no multi-arena coordination.**
//!
//! ## Safety
//!
//! `Arena` manages raw memory inside the caller's buffer directly; the
//! public API (`init`/`allocate`/`free`) is entirely safe to call, but the
//! pointer `allocate` returns is a raw `NonNull<u8>` and writing through it
//! is the caller's responsibility, as with any allocator.
#![cfg_attr(not(test), no_std)]

pub mod align;
pub mod arena;
pub mod error;
mod header;
#[cfg(feature = "logging")]
pub mod logger;

pub use arena::Arena;
pub use error::FreeError;
#[cfg(feature = "logging")]
pub use logger::{LogCrate, Logger, NoopLogger};
