// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

/// Allocation backend used by [`GrowVec`](crate::GrowVec).
///
/// The vector only ever needs two primitives: one that allocates or grows a
/// block, and one that releases it.
///
/// # Safety
///
/// Implementations must uphold the following, since `GrowVec` writes through
/// the returned pointers without further checks:
///
/// - A `Some(ptr)` returned by [`realloc`](RawAlloc::realloc) points to a block
///   valid for reads and writes of `new_layout.size()` bytes, aligned to
///   `new_layout.align()`, and not aliased by any other live block.
/// - When `current` is `Some`, a successful `realloc` preserves the first
///   `min(old.size(), new.size())` bytes of the old block, and the old pointer
///   must no longer be used.
/// - A `None` result leaves `current` untouched and still owned by the caller.
/// - [`free`](RawAlloc::free) accepts every block previously returned by the
///   same allocator, together with the layout it was requested with.
pub unsafe trait RawAlloc {
    /// Allocates a block for `new_layout`, or grows `current` into one.
    ///
    /// Returns `None` when the request cannot be satisfied.
    ///
    /// # Safety
    ///
    /// - `new_layout.size()` must be non-zero.
    /// - If `current` is `Some((ptr, layout))`, `ptr` must have been returned by
    ///   this allocator for `layout`, and `layout.align() == new_layout.align()`.
    unsafe fn realloc(
        &self,
        current: Option<(NonNull<u8>, Layout)>,
        new_layout: Layout,
    ) -> Option<NonNull<u8>>;

    /// Releases `current`. `None` is a no-op.
    ///
    /// # Safety
    ///
    /// If `current` is `Some((ptr, layout))`, `ptr` must have been returned by
    /// this allocator for `layout` and must not be used afterwards.
    unsafe fn free(&self, current: Option<(NonNull<u8>, Layout)>);
}

// SAFETY: forwards to `A`, which upholds the contract.
unsafe impl<A> RawAlloc for &A
where
    A: RawAlloc + ?Sized,
{
    #[inline]
    unsafe fn realloc(
        &self,
        current: Option<(NonNull<u8>, Layout)>,
        new_layout: Layout,
    ) -> Option<NonNull<u8>> {
        // SAFETY (PRECONDITIONS ARE MET): caller upholds the contract of `A::realloc`
        unsafe { (**self).realloc(current, new_layout) }
    }

    #[inline]
    unsafe fn free(&self, current: Option<(NonNull<u8>, Layout)>) {
        // SAFETY (PRECONDITIONS ARE MET): caller upholds the contract of `A::free`
        unsafe { (**self).free(current) }
    }
}

/// Rule deciding the new capacity when the current one is insufficient.
///
/// Implementations must grow geometrically (by a constant factor strictly
/// greater than 1) so that repeated `push()` stays amortized O(1). The result
/// is combined with the requested minimum through `max`, so a policy may
/// return less than `required` without breaking memory safety, it only loses
/// the amortization.
pub trait GrowthPolicy {
    /// Returns the capacity to grow to, given the current capacity and the
    /// minimum the caller asked for (`required > current`).
    ///
    /// Must not panic; saturate on arithmetic overflow.
    fn next_capacity(current: usize, required: usize) -> usize;
}
