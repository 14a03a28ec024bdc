// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Small helpers shared across the SIV crates.
//!
//! - [`constant_time_eq`]: tag comparison without data-dependent early exits
//! - [`is_slice_zeroized`]: verification helper for wiped buffers
//! - [`is_spare_capacity_zeroized`]: verification helper for truncated
//!   vectors (`test-utils` feature)
//! - [`hex_to_bytes`]: test vector decoding (`test-utils` feature)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
mod hex;
#[cfg(feature = "test-utils")]
mod spare;

use subtle::ConstantTimeEq;

#[cfg(feature = "test-utils")]
pub use hex::hex_to_bytes;
#[cfg(feature = "test-utils")]
pub use spare::is_spare_capacity_zeroized;

/// Compares two byte slices in constant time.
///
/// The running time depends only on the lengths, never on where the
/// first differing byte is. Slices of different length compare unequal.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

/// Returns `true` if every byte of `slice` is zero.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().fold(0u8, |acc, b| acc | b) == 0
}
