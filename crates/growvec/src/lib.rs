// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous vector with fallible, overflow-checked reservation.
//!
//! `GrowVec<T, A, P>` owns a single heap allocation obtained from an injected
//! [`RawAlloc`] and grows it according to a [`GrowthPolicy`]. Unlike `Vec<T>`,
//! nothing here panics or aborts on allocation exhaustion or size overflow:
//! every failure is returned as a [`GrowVecError`] and leaves the vector
//! exactly as it was before the call.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) push**: capacity grows geometrically (`1.5x + 8` by default)
//! - **Overflow-checked**: the byte size of the requested capacity is validated
//!   before the allocator is ever called
//! - **All-or-nothing**: a failed `reserve()` or `push()` mutates nothing, and the
//!   previous allocation stays owned by the vector
//! - **Single release**: the allocation is freed exactly once, either by
//!   `release()` or on drop
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::<i32>::new();
//!
//!     for i in 0..10 {
//!         vec.push(i)?;
//!     }
//!     assert_eq!(vec.len(), 10);
//!
//!     assert_eq!(vec.pop()?, 9);
//!     assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
//!
//!     vec.release();
//!     assert_eq!(vec.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Explicit Capacity
//!
//! ```rust
//! use growvec::{GrowVec, GrowVecError};
//!
//! fn example() -> Result<(), GrowVecError> {
//!     let mut vec = GrowVec::<u64>::new();
//!     vec.reserve(10)?;
//!     assert_eq!(vec.capacity(), 10);
//!
//!     // Absurd requests fail instead of aborting
//!     assert!(matches!(
//!         vec.reserve(usize::MAX),
//!         Err(GrowVecError::CapacityOverflow { .. })
//!     ));
//!     assert_eq!(vec.capacity(), 10);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! growvec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! ```rust,ignore
//! use growvec::GrowVec;
//! use growvec::test_utils::{MockAlloc, MockAllocBehaviour};
//!
//! let mock = MockAlloc::new(MockAllocBehaviour::FailAlways);
//! let mut vec = GrowVec::<u8, _>::new_in(&mock);
//!
//! assert!(vec.push(1).is_err());
//! assert_eq!(mock.realloc_count(), 1);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod grow_vec;
mod policy;
mod support;
mod system;
mod traits;

#[cfg(all(unix, feature = "malloc"))]
mod malloc;

pub use error::GrowVecError;
pub use grow_vec::GrowVec;
pub use policy::{Amortized, PowerOfTwo};
pub use system::SystemAlloc;
pub use traits::{GrowthPolicy, RawAlloc};

#[cfg(all(unix, feature = "malloc"))]
pub use malloc::Malloc;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
