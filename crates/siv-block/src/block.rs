// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::BLOCK_SIZE;

/// A single 128-bit block.
pub type Block = [u8; BLOCK_SIZE];

/// `dst ^= src`
#[inline]
pub fn xor_in_place(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Returns `a ^ b`.
#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_in_place(&mut out, b);
    out
}
