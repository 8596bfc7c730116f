// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Minimal round trip: push, pop, release.
//!
//! Run with `cargo run -p growvec --example simple`.

use growvec::{GrowVec, GrowVecError};

type IntVec = GrowVec<i32>;

fn main() -> Result<(), GrowVecError> {
    let mut vec = IntVec::new();

    vec.push(12)?;
    println!("pushed 12: len={} capacity={}", vec.len(), vec.capacity());

    let value = vec.pop()?;
    println!("popped {value}: len={} capacity={}", vec.len(), vec.capacity());

    match vec.pop() {
        Ok(value) => println!("unexpected value {value}"),
        Err(error) => println!("second pop: {error}"),
    }

    vec.release();
    println!("released: len={} capacity={}", vec.len(), vec.capacity());

    Ok(())
}
