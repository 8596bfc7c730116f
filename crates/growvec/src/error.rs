// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growvec.

use thiserror::Error;

/// Error type for `GrowVec` operations.
///
/// Every variant is recoverable: the operation that returned it did not mutate
/// the vector.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowVecError {
    /// The requested capacity, in bytes, exceeds what a single allocation can
    /// hold (`isize::MAX`), or the element count itself overflowed `usize`.
    ///
    /// Detected before the allocator is called.
    #[error("capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Element count that could not be represented.
        requested: usize,
    },

    /// The allocator could not provide the requested capacity.
    ///
    /// The previous allocation, if any, is still owned by the vector.
    #[error("allocation failed for a capacity of {new_capacity} elements")]
    AllocationFailure {
        /// Element count the vector attempted to grow to.
        new_capacity: usize,
    },

    /// Attempted to pop from a vector with no elements.
    #[error("cannot pop from an empty vector")]
    EmptyPop,
}
