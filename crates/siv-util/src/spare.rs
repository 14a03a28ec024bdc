// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::is_slice_zeroized;

/// Returns `true` if the first `len` bytes past `vec.len()` are zero.
///
/// Used to check that data written and then truncated away was wiped
/// first.
///
/// # Safety
///
/// Those `len` bytes must lie within `vec.capacity()` and must have been
/// initialized by an earlier write (a `truncate` keeps them in place).
pub unsafe fn is_spare_capacity_zeroized(vec: &Vec<u8>, len: usize) -> bool {
    assert!(
        vec.len() + len <= vec.capacity(),
        "is_spare_capacity_zeroized: {len} bytes exceed the spare capacity"
    );

    // SAFETY: in bounds per the assert, initialized per the caller contract
    let spare = unsafe { core::slice::from_raw_parts(vec.as_ptr().add(vec.len()), len) };
    is_slice_zeroized(spare)
}
