// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod scenarios_tests {
    use growvec::test_utils::{MockAlloc, MockAllocBehaviour};
    use growvec::{GrowVec, GrowVecError};

    type IntVec = GrowVec<i32>;

    #[test]
    fn test_init_release() {
        let mut vec = IntVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);

        vec.release();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn test_push_pop_1000() {
        let mut vec = IntVec::new();

        for i in 0..1000 {
            assert!(vec.push(i).is_ok());
        }
        assert_eq!(vec.len(), 1000);

        for i in (0..1000).rev() {
            assert_eq!(vec.pop(), Ok(i));
        }
        assert_eq!(vec.len(), 0);

        assert_eq!(vec.pop(), Err(GrowVecError::EmptyPop));

        vec.release();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn test_reserve() {
        let mut vec = IntVec::new();

        vec.reserve(10).expect("Failed to reserve(10)");

        assert_eq!(vec.capacity(), 10);
        assert!(vec.is_empty());
    }

    #[test]
    fn test_reserve_large() {
        let mut vec = IntVec::new();

        vec.reserve(10_000).expect("Failed to reserve(10_000)");

        assert_eq!(vec.capacity(), 10_000);
    }

    #[test]
    fn test_reserve_grow() {
        let mut vec = IntVec::new();

        vec.reserve(20).expect("Failed to reserve(20)");

        assert!(vec.capacity() >= 20);
    }

    #[test]
    fn test_release_after_pushes() {
        let mut vec = IntVec::new();
        for i in 0..100 {
            vec.push(i).expect("Failed to push");
        }

        vec.release();

        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn test_push_and_access() {
        let mut vec = IntVec::new();
        for i in 0..10 {
            assert!(vec.push(i).is_ok());
        }

        assert_eq!(vec.len(), 10);
        for (i, value) in vec.iter().enumerate() {
            assert_eq!(*value, i as i32);
        }
    }

    #[test]
    fn test_reserve_overflow() {
        let mut vec = IntVec::new();
        vec.push(1).expect("Failed to push(1)");

        let result = vec.reserve(usize::MAX / core::mem::size_of::<i32>() + 1);

        assert!(matches!(result, Err(GrowVecError::CapacityOverflow { .. })));
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.as_slice(), &[1]);
    }

    #[test]
    fn test_allocation_failure_is_recoverable() {
        let mock = MockAlloc::new(MockAllocBehaviour::FailAtNthRealloc(1));
        let mut vec: GrowVec<i32, _> = GrowVec::new_in(&mock);

        assert_eq!(
            vec.push(1),
            Err(GrowVecError::AllocationFailure { new_capacity: 8 })
        );
        assert_eq!(vec.capacity(), 0);

        // Caller retries
        assert_eq!(vec.push(1), Ok(()));
        assert_eq!(vec.as_slice(), &[1]);
    }

    #[test]
    fn test_one_allocator_many_vectors() {
        let mock = MockAlloc::default();

        {
            let mut a: GrowVec<u8, _> = GrowVec::new_in(&mock);
            let mut b: GrowVec<u64, _> = GrowVec::new_in(&mock);

            a.push(1).expect("Failed to push(1)");
            b.push(2).expect("Failed to push(2)");

            assert_eq!(mock.live_allocations(), 2);
        }

        assert_eq!(mock.live_allocations(), 0);
        assert_eq!(mock.free_count(), 2);
    }
}
