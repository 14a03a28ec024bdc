// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::block::{xor, xor_in_place};
use crate::consts::{ONE_BLOCK, ZERO_BLOCK};

#[test]
fn xor_with_zero_is_identity() {
    let a: [u8; 16] = core::array::from_fn(|i| i as u8 * 17);
    assert_eq!(xor(&a, &ZERO_BLOCK), a);
}

#[test]
fn xor_with_self_is_zero() {
    let a: [u8; 16] = core::array::from_fn(|i| 0xf0 ^ i as u8);
    assert_eq!(xor(&a, &a), ZERO_BLOCK);
}

#[test]
fn xor_in_place_matches_xor() {
    let a: [u8; 16] = core::array::from_fn(|i| i as u8);
    let b: [u8; 16] = core::array::from_fn(|i| 0xff - i as u8);

    let mut dst = a;
    xor_in_place(&mut dst, &b);

    assert_eq!(dst, xor(&a, &b));
    assert_eq!(dst, [0xff; 16]);
}

#[test]
fn one_block_is_big_endian_one() {
    assert_eq!(u128::from_be_bytes(ONE_BLOCK), 1);
}
