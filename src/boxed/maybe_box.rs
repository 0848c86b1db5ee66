use std::alloc::Layout;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use log::warn;

use super::{Global, RawAlloc};
use crate::error::AllocError;
use crate::maybe::Maybe;

/// An exclusively owned, heap-allocated [`Maybe<T>`].
///
/// A MaybeBox starts out holding whatever it was created with ([`MaybeBox::new`] creates one
/// holding `Nothing`) and dereferences to the contained [`Maybe`], so all of its methods are
/// available. Allocation failure is reported as an [`AllocError`] instead of aborting.
///
/// When dropped (or [released](MaybeBox::release)), the payload is dropped first if there is
/// one, then the container's memory is returned to the allocator. A `Nothing` never drops a
/// payload.
///
/// The allocator is a type parameter, defaulting to [`Global`]. Zero-sized `Maybe<T>` layouts are
/// never passed to it.
///
/// # Examples
/// ```
/// # use algebraic_lib::boxed::MaybeBox;
/// # use algebraic_lib::maybe::Maybe;
/// let mut boxed = MaybeBox::<String>::new()?;
/// assert!(boxed.is_nothing());
///
/// boxed.replace(String::from("owned"));
/// assert_eq!(*boxed, Maybe::just(String::from("owned")));
/// # Ok::<(), algebraic_lib::error::AllocError>(())
/// ```
pub struct MaybeBox<T, A: RawAlloc = Global> {
    pub(crate) ptr: NonNull<Maybe<T>>,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<Maybe<T>>,
}

impl<T> MaybeBox<T> {
    /// Allocates a MaybeBox holding `Nothing` in the global allocator.
    pub fn new() -> Result<MaybeBox<T>, AllocError> {
        MaybeBox::new_in(Global)
    }

    /// Allocates a MaybeBox holding `Just(value)` in the global allocator.
    pub fn just(value: T) -> Result<MaybeBox<T>, AllocError> {
        MaybeBox::just_in(value, Global)
    }
}

impl<T, A: RawAlloc> MaybeBox<T, A> {
    /// Allocates a MaybeBox holding `Nothing` with the provided allocator.
    pub fn new_in(alloc: A) -> Result<MaybeBox<T, A>, AllocError> {
        MaybeBox::with_value_in(Maybe::Nothing, alloc)
    }

    /// Allocates a MaybeBox holding `Just(value)` with the provided allocator.
    ///
    /// On failure, `value` is dropped along with the allocator.
    pub fn just_in(value: T, alloc: A) -> Result<MaybeBox<T, A>, AllocError> {
        MaybeBox::with_value_in(Maybe::Just(value), alloc)
    }

    fn with_value_in(value: Maybe<T>, alloc: A) -> Result<MaybeBox<T, A>, AllocError> {
        let ptr = Self::make_ptr(&alloc)?;

        // SAFETY: ptr is either freshly allocated for a Maybe<T> or dangling for a zero-sized one,
        // both of which are valid for a single write.
        unsafe { ptr.as_ptr().write(value) };

        Ok(MaybeBox {
            ptr,
            alloc,
            _phantom: PhantomData,
        })
    }

    /// Drops the payload, if there is one, leaving `Nothing` in the container. The container
    /// itself stays allocated.
    pub fn clear(&mut self) {
        drop(self.take());
    }

    /// Moves the contained [`Maybe`] out and returns the container's memory to the allocator.
    pub fn into_inner(self) -> Maybe<T> {
        let this = ManuallyDrop::new(self);

        // SAFETY: ptr is initialized and is never read again after this, because self is wrapped
        // in ManuallyDrop.
        let value = unsafe { this.ptr.as_ptr().read() };
        // SAFETY: The value has been moved out, leaving only the allocation.
        unsafe { this.dealloc() };
        // SAFETY: The allocator is read exactly once and this isn't dropped.
        drop(unsafe { ptr::read(&this.alloc) });

        value
    }

    /// Drops the payload (if present) and then frees the container. Equivalent to dropping the
    /// MaybeBox, but explicit at the call site.
    pub fn release(self) {
        drop(self);
    }

    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    pub(crate) const fn layout() -> Layout {
        Layout::new::<Maybe<T>>()
    }

    /// A helper function to obtain memory for a single `Maybe<T>`. Returns a dangling pointer for
    /// a zero-sized layout.
    pub(crate) fn make_ptr(alloc: &A) -> Result<NonNull<Maybe<T>>, AllocError> {
        let layout = Self::layout();
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        match unsafe { alloc.allocate(layout) } {
            Ok(ptr) => Ok(ptr.cast()),
            Err(err) => {
                warn!("{err}");
                Err(err)
            },
        }
    }

    /// Returns the container's memory without touching its contents.
    ///
    /// # Safety
    /// The contents must have already been dropped or moved out, and ptr must not be used again.
    pub(crate) unsafe fn dealloc(&self) {
        drop(DeallocGuard::new(self));
    }
}

/// Frees a MaybeBox's allocation when dropped, including while unwinding from a panicking
/// payload drop.
struct DeallocGuard<'a, A: RawAlloc> {
    ptr: NonNull<u8>,
    layout: Layout,
    alloc: &'a A,
}

impl<'a, A: RawAlloc> DeallocGuard<'a, A> {
    fn new<T>(owner: &'a MaybeBox<T, A>) -> DeallocGuard<'a, A> {
        DeallocGuard {
            ptr: owner.ptr.cast(),
            layout: MaybeBox::<T, A>::layout(),
            alloc: &owner.alloc,
        }
    }
}

impl<A: RawAlloc> Drop for DeallocGuard<'_, A> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: ptr was allocated by alloc with this layout, zero-sized layouts are never
            // allocated and are guarded against. Guards are only created once the contents are
            // about to be dropped or have been moved out.
            unsafe { self.alloc.deallocate(self.ptr, self.layout) }
        }
    }
}

impl<T, A: RawAlloc> Deref for MaybeBox<T, A> {
    type Target = Maybe<T>;

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and initialized for as long as self is alive.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T, A: RawAlloc> DerefMut for MaybeBox<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: ptr is valid and initialized, and self is borrowed mutably.
        unsafe { self.ptr.as_mut() }
    }
}

impl<T, A: RawAlloc> Drop for MaybeBox<T, A> {
    fn drop(&mut self) {
        let _guard = DeallocGuard::new(self);

        // SAFETY: The contents are initialized and dropped exactly once. The guard frees the
        // allocation afterwards, even if this panics.
        unsafe { ptr::drop_in_place(self.ptr.as_ptr()) };
    }
}

impl<T: Debug, A: RawAlloc> Debug for MaybeBox<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaybeBox").field(&**self).finish()
    }
}

impl<T: PartialEq, A: RawAlloc> PartialEq for MaybeBox<T, A> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: RawAlloc> Eq for MaybeBox<T, A> {}

// SAFETY: MaybeBox owns its contents exclusively, so it is as thread-safe as T and A.
unsafe impl<T: Send, A: RawAlloc + Send> Send for MaybeBox<T, A> {}

// SAFETY: Shared access only hands out shared references to T and A.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for MaybeBox<T, A> {}
