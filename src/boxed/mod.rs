//! Heap-resident optional values. [`MaybeBox`] owns a single [`Maybe`](crate::maybe::Maybe) in
//! memory obtained from a [`RawAlloc`], defaulting to the [`Global`] allocator.

mod alloc;
mod maybe_box;

pub use alloc::*;
pub use maybe_box::*;
