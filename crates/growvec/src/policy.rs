// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth policies for [`GrowVec`](crate::GrowVec).

use crate::traits::GrowthPolicy;

/// Grows by half of the current capacity plus a fixed floor.
///
/// `next = current + current / 2 + 8`, so growth starts at 8 slots from an
/// empty vector and converges to a factor of 1.5.
///
/// ```rust
/// use growvec::{Amortized, GrowthPolicy};
///
/// assert_eq!(Amortized::next_capacity(0, 1), 8);
/// assert_eq!(Amortized::next_capacity(8, 9), 20);
/// assert_eq!(Amortized::next_capacity(20, 21), 38);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amortized;

impl Amortized {
    /// Additive floor applied on every growth step.
    pub const MIN_INCREMENT: usize = 8;
}

impl GrowthPolicy for Amortized {
    #[inline]
    fn next_capacity(current: usize, _required: usize) -> usize {
        current
            .saturating_add(current / 2)
            .saturating_add(Self::MIN_INCREMENT)
    }
}

/// Rounds the requested capacity up to the next power of two
/// (1 → 2 → 4 → 8 → 16...).
///
/// Saturates to `usize::MAX` when no power of two can represent the request,
/// which the vector then rejects as an overflow.
///
/// ```rust
/// use growvec::{GrowthPolicy, PowerOfTwo};
///
/// assert_eq!(PowerOfTwo::next_capacity(0, 1), 1);
/// assert_eq!(PowerOfTwo::next_capacity(4, 5), 8);
/// assert_eq!(PowerOfTwo::next_capacity(0, 10), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerOfTwo;

impl GrowthPolicy for PowerOfTwo {
    #[inline]
    fn next_capacity(_current: usize, required: usize) -> usize {
        required.checked_next_power_of_two().unwrap_or(usize::MAX)
    }
}
