// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for exercising `GrowVec` failure paths.

mod mock_alloc;

pub use mock_alloc::{MockAlloc, MockAllocBehaviour};
