// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::RawAlloc;

/// C `realloc` / `free` from the platform libc.
///
/// Requests whose alignment exceeds [`Malloc::MAX_ALIGN`] are refused (`None`),
/// since plain `malloc` gives no stronger guarantee.
///
/// Only available on unix targets with the `malloc` feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Malloc;

impl Malloc {
    /// Alignment guaranteed by `malloc` on every supported unix libc.
    pub const MAX_ALIGN: usize = 2 * core::mem::size_of::<usize>();
}

// SAFETY: `realloc(NULL, n)` behaves as `malloc(n)`, a failed `realloc` leaves
// the original block untouched, and `free` accepts any block from either.
// Alignment is checked against what malloc guarantees.
unsafe impl RawAlloc for Malloc {
    unsafe fn realloc(
        &self,
        current: Option<(NonNull<u8>, Layout)>,
        new_layout: Layout,
    ) -> Option<NonNull<u8>> {
        if new_layout.align() > Self::MAX_ALIGN {
            return None;
        }

        let old = current.map_or(core::ptr::null_mut(), |(ptr, _)| ptr.as_ptr());

        // SAFETY (PRECONDITIONS ARE MET): old is either null or a live block
        // returned by this allocator
        let ptr = unsafe { libc::realloc(old.cast(), new_layout.size()) };

        NonNull::new(ptr.cast())
    }

    unsafe fn free(&self, current: Option<(NonNull<u8>, Layout)>) {
        if let Some((ptr, _)) = current {
            // SAFETY (PRECONDITIONS ARE MET): ptr is a live block returned by
            // this allocator
            unsafe { libc::free(ptr.as_ptr().cast()) }
        }
    }
}
