// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::RawAlloc;
use crate::test_utils::{MockAlloc, MockAllocBehaviour};

fn layout() -> Layout {
    Layout::array::<u32>(8).expect("Failed to build layout")
}

#[test]
fn test_mock_alloc_behaviour_none() {
    let mock = MockAlloc::new(MockAllocBehaviour::None);

    unsafe {
        let ptr = mock.realloc(None, layout());
        assert!(ptr.is_some());
        mock.free(ptr.map(|p| (p, layout())));
    }

    assert_eq!(mock.realloc_count(), 1);
    assert_eq!(mock.free_count(), 1);
    assert_eq!(mock.live_allocations(), 0);
}

#[test]
fn test_mock_alloc_behaviour_fail_always() {
    let mock = MockAlloc::new(MockAllocBehaviour::FailAlways);

    for _ in 0..3 {
        let ptr = unsafe { mock.realloc(None, layout()) };
        assert!(ptr.is_none());
    }

    assert_eq!(mock.realloc_count(), 3);
    assert_eq!(mock.live_allocations(), 0);
}

#[test]
fn test_mock_alloc_behaviour_fail_at_nth_realloc() {
    let mock = MockAlloc::new(MockAllocBehaviour::FailAtNthRealloc(2));
    let small = layout();
    let large = Layout::array::<u32>(64).expect("Failed to build layout");

    unsafe {
        // First call succeeds
        let ptr = mock.realloc(None, small).expect("Failed to allocate");

        // Second call fails, original block still valid
        assert!(mock.realloc(Some((ptr, small)), large).is_none());
        ptr.as_ptr().write(0xFF);

        // Third call succeeds
        let grown = mock
            .realloc(Some((ptr, small)), large)
            .expect("Failed to grow");
        assert_eq!(grown.as_ptr().read(), 0xFF);

        mock.free(Some((grown, large)));
    }

    assert_eq!(mock.realloc_count(), 3);
    assert_eq!(mock.live_allocations(), 0);
}

#[test]
fn test_mock_alloc_grow_is_not_a_new_allocation() {
    let mock = MockAlloc::default();
    let small = layout();
    let large = Layout::array::<u32>(64).expect("Failed to build layout");

    unsafe {
        let ptr = mock.realloc(None, small).expect("Failed to allocate");
        let grown = mock
            .realloc(Some((ptr, small)), large)
            .expect("Failed to grow");

        assert_eq!(mock.live_allocations(), 1);
        mock.free(Some((grown, large)));
    }

    assert_eq!(mock.live_allocations(), 0);
}

#[test]
fn test_mock_alloc_free_none_is_not_counted() {
    let mock = MockAlloc::default();

    unsafe { mock.free(None) };

    assert_eq!(mock.free_count(), 0);
}

#[test]
fn test_mock_alloc_last_request() {
    let mock = MockAlloc::new(MockAllocBehaviour::FailAlways);
    assert_eq!(mock.last_request(), None);

    unsafe { mock.realloc(None, layout()) };

    assert_eq!(mock.last_request(), Some(layout()));
}

#[test]
fn test_mock_alloc_change_behaviour() {
    let mock = MockAlloc::new(MockAllocBehaviour::None);

    // Change behaviour
    mock.change_behaviour(MockAllocBehaviour::FailAlways);
    assert!(unsafe { mock.realloc(None, layout()) }.is_none());

    // Change back
    mock.change_behaviour(MockAllocBehaviour::None);
    let ptr = unsafe { mock.realloc(None, layout()) };
    assert!(ptr.is_some());

    unsafe { mock.free(ptr.map(|p| (p, layout()))) };
}

#[test]
fn test_mock_alloc_reset_count() {
    let mock = MockAlloc::default();

    unsafe {
        let ptr = mock.realloc(None, layout());
        mock.free(ptr.map(|p| (p, layout())));
    }
    assert_eq!(mock.realloc_count(), 1);

    mock.reset_count();

    assert_eq!(mock.realloc_count(), 0);
    assert_eq!(mock.free_count(), 0);
}
