// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc, realloc};
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::RawAlloc;

/// Rust's global allocator.
///
/// This is the default allocator of [`GrowVec`](crate::GrowVec). Allocation
/// failure is reported as `None` rather than through `handle_alloc_error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemAlloc;

// SAFETY: `alloc`, `realloc` and `dealloc` implement the global allocator
// contract, which is a superset of `RawAlloc`'s.
unsafe impl RawAlloc for SystemAlloc {
    #[inline]
    unsafe fn realloc(
        &self,
        current: Option<(NonNull<u8>, Layout)>,
        new_layout: Layout,
    ) -> Option<NonNull<u8>> {
        debug_assert!(new_layout.size() != 0, "SystemAlloc: zero-sized request");

        let ptr = match current {
            None => {
                // SAFETY (PRECONDITIONS ARE MET): new_layout has non-zero size
                unsafe { alloc(new_layout) }
            }
            Some((ptr, layout)) => {
                debug_assert_eq!(layout.align(), new_layout.align());

                // SAFETY (PRECONDITIONS ARE MET): ptr was allocated by the global
                // allocator with `layout`, the new size is non-zero and was
                // validated by `Layout` (does not overflow isize when rounded).
                unsafe { realloc(ptr.as_ptr(), layout, new_layout.size()) }
            }
        };

        NonNull::new(ptr)
    }

    #[inline]
    unsafe fn free(&self, current: Option<(NonNull<u8>, Layout)>) {
        if let Some((ptr, layout)) = current {
            // SAFETY (PRECONDITIONS ARE MET): ptr was allocated by the global
            // allocator with `layout`
            unsafe { dealloc(ptr.as_ptr(), layout) }
        }
    }
}
