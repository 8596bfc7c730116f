// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::GrowVecError;
use crate::policy::Amortized;
use crate::system::SystemAlloc;
use crate::traits::{GrowthPolicy, RawAlloc};

/// Growable contiguous vector with fallible reservation.
///
/// Capacity grows only through [`reserve()`](GrowVec::reserve), either
/// explicitly or implicitly from [`push()`](GrowVec::push), and never shrinks
/// except through [`release()`](GrowVec::release) (also run on drop).
///
/// # Type Parameters
///
/// - `T`: The element type.
/// - `A`: The allocator, [`SystemAlloc`] by default.
/// - `P`: The growth policy, [`Amortized`] by default.
///
/// # Example
///
/// ```rust
/// use growvec::{GrowVec, GrowVecError};
///
/// fn example() -> Result<(), GrowVecError> {
///     let mut vec = GrowVec::new();
///     vec.push(1u8)?;
///     vec.push(2u8)?;
///
///     assert_eq!(vec.len(), 2);
///     assert_eq!(vec.capacity(), 8);
///
///     assert_eq!(vec.pop()?, 2);
///     assert_eq!(vec.pop()?, 1);
///     assert_eq!(vec.pop(), Err(GrowVecError::EmptyPop));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowVec<T, A = SystemAlloc, P = Amortized>
where
    A: RawAlloc,
    P: GrowthPolicy,
{
    data: NonNull<T>,
    len: usize,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<(T, fn() -> P)>,
}

// SAFETY: GrowVec exclusively owns its buffer, like Vec<T>.
unsafe impl<T, A, P> Send for GrowVec<T, A, P>
where
    T: Send,
    A: RawAlloc + Send,
    P: GrowthPolicy,
{
}

// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T, A, P> Sync for GrowVec<T, A, P>
where
    T: Sync,
    A: RawAlloc + Sync,
    P: GrowthPolicy,
{
}

impl<T> GrowVec<T> {
    /// Creates a new empty `GrowVec` backed by the global allocator.
    ///
    /// Does not allocate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::GrowVec;
    ///
    /// let vec: GrowVec<u32> = GrowVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self::new_in(SystemAlloc)
    }

    /// Creates a `GrowVec` backed by the global allocator, with room for at
    /// least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Same as [`reserve()`](GrowVec::reserve).
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        Self::with_capacity_in(capacity, SystemAlloc)
    }
}

impl<T, A, P> GrowVec<T, A, P>
where
    A: RawAlloc,
    P: GrowthPolicy,
{
    /// Creates a new empty `GrowVec` backed by `alloc`.
    ///
    /// Does not allocate.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Creates a `GrowVec` backed by `alloc`, with room for at least
    /// `capacity` elements.
    ///
    /// # Errors
    ///
    /// Same as [`reserve()`](GrowVec::reserve).
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, GrowVecError> {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;

        Ok(vec)
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is dangling while no allocation is held, and is invalidated
    /// by any growth.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    ///
    /// The pointer is dangling while no allocation is held, and is invalidated
    /// by any growth.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Returns an immutable slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): data is aligned and non-null, and
        // [0, len) is initialized
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): data is aligned and non-null, and
        // [0, len) is initialized and exclusively borrowed
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Ensures the capacity is at least `min_capacity`.
    ///
    /// Does nothing if the current capacity is sufficient. Otherwise grows to
    /// `max(min_capacity, P::next_capacity(capacity, min_capacity))`, moving
    /// the existing elements to the new buffer if the allocator relocates it.
    ///
    /// # Errors
    ///
    /// - [`GrowVecError::CapacityOverflow`] if the new capacity, in bytes,
    ///   exceeds `isize::MAX`. The allocator is not called.
    /// - [`GrowVecError::AllocationFailure`] if the allocator returns `None`.
    ///
    /// On error the vector is left untouched and keeps its allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec: GrowVec<u32> = GrowVec::new();
    ///
    ///     // Requests above the growth floor are honored exactly
    ///     vec.reserve(10)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///
    ///     // Already satisfied: no-op
    ///     vec.reserve(4)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    #[inline]
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), GrowVecError> {
        if self.capacity >= min_capacity {
            return Ok(());
        }

        self.grow_to(min_capacity)
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) -> Result<(), GrowVecError> {
        let new_capacity = P::next_capacity(self.capacity, min_capacity).max(min_capacity);

        // Zero-sized elements never touch the allocator.
        if mem::size_of::<T>() == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_capacity).map_err(|_| {
            GrowVecError::CapacityOverflow {
                requested: new_capacity,
            }
        })?;

        // SAFETY (PRECONDITIONS ARE MET): new_layout is non-zero sized (T is not
        // a ZST and new_capacity > capacity >= 0), current_memory() describes
        // the block this allocator returned, and both share align_of::<T>().
        let ptr = unsafe { self.alloc.realloc(self.current_memory(), new_layout) }.ok_or(
            GrowVecError::AllocationFailure { new_capacity },
        )?;

        self.data = ptr.cast();
        self.capacity = new_capacity;

        Ok(())
    }

    /// Appends `value` to the end of the vector, growing it if needed.
    ///
    /// # Errors
    ///
    /// Same as [`reserve()`](GrowVec::reserve). On error `value` is dropped
    /// and the vector is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec = GrowVec::new();
    ///     for i in 0..10 {
    ///         vec.push(i)?;
    ///     }
    ///
    ///     assert_eq!(vec.len(), 10);
    ///     assert_eq!(vec[9], 9);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), GrowVecError> {
        let required = self
            .len
            .checked_add(1)
            .ok_or(GrowVecError::CapacityOverflow {
                requested: usize::MAX,
            })?;

        self.reserve(required)?;

        // SAFETY (PRECONDITIONS ARE MET): reserve guarantees capacity > len, so
        // slot `len` is allocated and uninitialized
        unsafe { self.data.as_ptr().add(self.len).write(value) };
        self.len = required;

        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// Capacity is never reduced.
    ///
    /// # Errors
    ///
    /// Returns [`GrowVecError::EmptyPop`] if the vector is empty.
    pub fn pop(&mut self) -> Result<T, GrowVecError> {
        if self.len == 0 {
            return Err(GrowVecError::EmptyPop);
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot `len` was initialized and is now
        // outside [0, len), so it is read exactly once
        Ok(unsafe { self.data.as_ptr().add(self.len).read() })
    }

    /// Drops every element and frees the allocation.
    ///
    /// The vector is reset to the empty state and can be reused. Releasing an
    /// empty vector is a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growvec::{GrowVec, GrowVecError};
    ///
    /// fn example() -> Result<(), GrowVecError> {
    ///     let mut vec = GrowVec::new();
    ///     vec.push(String::from("a"))?;
    ///
    ///     vec.release();
    ///     assert_eq!(vec.len(), 0);
    ///     assert_eq!(vec.capacity(), 0);
    ///
    ///     // Reusable
    ///     vec.push(String::from("b"))?;
    ///     assert_eq!(vec.len(), 1);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn release(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.len);

        // Reset len first: a panicking Drop must not lead to a double drop.
        self.len = 0;

        // SAFETY (PRECONDITIONS ARE MET): [0, len) was initialized and is no
        // longer reachable
        unsafe { ptr::drop_in_place(live) };

        let current = self.current_memory();

        self.data = NonNull::dangling();
        self.capacity = 0;

        // SAFETY (PRECONDITIONS ARE MET): current describes the block this
        // allocator returned, and nothing references it anymore
        unsafe { self.alloc.free(current) };
    }

    /// Block currently held, as handed to the allocator.
    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if mem::size_of::<T>() == 0 || self.capacity == 0 {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): this exact layout was validated by
        // Layout::array when the block was obtained
        let layout = unsafe {
            Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            )
        };

        Some((self.data.cast(), layout))
    }

    #[cfg(test)]
    pub(crate) unsafe fn __unsafe_force_len_and_capacity_for_tests(
        &mut self,
        len: usize,
        capacity: usize,
    ) {
        self.len = len;
        self.capacity = capacity;
    }
}

impl<T, A, P> Drop for GrowVec<T, A, P>
where
    A: RawAlloc,
    P: GrowthPolicy,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, A, P> Default for GrowVec<T, A, P>
where
    A: RawAlloc + Default,
    P: GrowthPolicy,
{
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A, P> core::fmt::Debug for GrowVec<T, A, P>
where
    T: core::fmt::Debug,
    A: RawAlloc,
    P: GrowthPolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T, A, P> Deref for GrowVec<T, A, P>
where
    A: RawAlloc,
    P: GrowthPolicy,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A, P> DerefMut for GrowVec<T, A, P>
where
    A: RawAlloc,
    P: GrowthPolicy,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
