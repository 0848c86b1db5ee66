use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::AllocError;

/// A source of raw memory for [`MaybeBox`](super::MaybeBox).
///
/// # Safety
/// Implementors must return pointers to memory that is valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()` and not aliased by any other live
/// allocation, until it is passed back to [`RawAlloc::deallocate`].
pub unsafe trait RawAlloc {
    /// Allocates memory for `layout`, returning an [`AllocError`] if none is available.
    ///
    /// # Safety
    /// `layout` must have a non-zero size.
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Returns memory obtained from [`RawAlloc::allocate`].
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate` on this allocator with the same `layout`, and
    /// must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global allocator, as used by [`Box`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

// SAFETY: Memory comes straight from the global allocator, which upholds the same contract.
unsafe impl RawAlloc for Global {
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        // SAFETY: The caller guarantees a non-zero size.
        NonNull::new(unsafe { alloc::alloc(layout) }).ok_or(AllocError::new(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: The caller guarantees that ptr was allocated here with the same layout.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
