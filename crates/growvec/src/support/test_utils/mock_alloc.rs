// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::system::SystemAlloc;
use crate::traits::RawAlloc;

/// Configurable behaviour for [`MockAlloc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocBehaviour {
    /// Normal operation (delegates to [`SystemAlloc`]).
    None,
    /// Always fail realloc.
    FailAlways,
    /// Fail realloc on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthRealloc(usize),
}

/// Mock allocator for testing.
///
/// Wraps [`SystemAlloc`] but allows simulating allocation failures via
/// [`MockAllocBehaviour`], and counts calls so tests can verify that blocks are
/// released exactly once.
///
/// Interior mutability lets a vector borrow the mock (`GrowVec::new_in(&mock)`)
/// while the test keeps inspecting and reconfiguring it.
#[derive(Debug)]
pub struct MockAlloc {
    inner: SystemAlloc,
    behaviour: Cell<MockAllocBehaviour>,
    realloc_count: Cell<usize>,
    free_count: Cell<usize>,
    live_allocations: Cell<usize>,
    last_request: Cell<Option<Layout>>,
}

impl MockAlloc {
    /// Creates a new mock allocator with the specified behaviour.
    pub fn new(behaviour: MockAllocBehaviour) -> Self {
        Self {
            inner: SystemAlloc,
            behaviour: Cell::new(behaviour),
            realloc_count: Cell::new(0),
            free_count: Cell::new(0),
            live_allocations: Cell::new(0),
            last_request: Cell::new(None),
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&self, behaviour: MockAllocBehaviour) {
        self.behaviour.set(behaviour);
    }

    /// Resets the realloc and free counters.
    ///
    /// `live_allocations` is not reset, it tracks real memory.
    pub fn reset_count(&self) {
        self.realloc_count.set(0);
        self.free_count.set(0);
    }

    /// Returns how many times `realloc` was called, failures included.
    pub fn realloc_count(&self) -> usize {
        self.realloc_count.get()
    }

    /// Returns how many blocks were passed to `free` (`None` is not counted).
    pub fn free_count(&self) -> usize {
        self.free_count.get()
    }

    /// Returns how many blocks are currently allocated and not yet freed.
    pub fn live_allocations(&self) -> usize {
        self.live_allocations.get()
    }

    /// Returns the layout of the most recent `realloc` request.
    pub fn last_request(&self) -> Option<Layout> {
        self.last_request.get()
    }
}

impl Default for MockAlloc {
    fn default() -> Self {
        Self::new(MockAllocBehaviour::None)
    }
}

// SAFETY: every successful path delegates to SystemAlloc; failures return
// None without touching `current`.
unsafe impl RawAlloc for MockAlloc {
    unsafe fn realloc(
        &self,
        current: Option<(NonNull<u8>, Layout)>,
        new_layout: Layout,
    ) -> Option<NonNull<u8>> {
        let call = self.realloc_count.get() + 1;
        self.realloc_count.set(call);
        self.last_request.set(Some(new_layout));

        let fail = match self.behaviour.get() {
            MockAllocBehaviour::None => false,
            MockAllocBehaviour::FailAlways => true,
            MockAllocBehaviour::FailAtNthRealloc(n) => call == n,
        };

        if fail {
            return None;
        }

        let is_fresh = current.is_none();

        // SAFETY (PRECONDITIONS ARE MET): caller upholds the RawAlloc contract
        let ptr = unsafe { self.inner.realloc(current, new_layout) }?;

        if is_fresh {
            self.live_allocations.set(self.live_allocations.get() + 1);
        }

        Some(ptr)
    }

    unsafe fn free(&self, current: Option<(NonNull<u8>, Layout)>) {
        if current.is_some() {
            self.free_count.set(self.free_count.get() + 1);
            self.live_allocations.set(self.live_allocations.get() - 1);
        }

        // SAFETY (PRECONDITIONS ARE MET): caller upholds the RawAlloc contract
        unsafe { self.inner.free(current) }
    }
}
