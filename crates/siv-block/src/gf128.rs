// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GF(2^128) operations on big-endian blocks.

use crate::block::Block;
use crate::consts::RB;

const RB_WORD: u128 = u128::from_be_bytes(RB);

/// Doubles `block` in GF(2^128) (RFC 5297 §2.3).
///
/// Shifts the 128-bit big-endian value left by one bit and, if the bit
/// shifted out was set, reduces by XOR-ing [`RB`]. Runs in constant time.
#[inline]
pub fn dbl(block: &Block) -> Block {
    let v = u128::from_be_bytes(*block);
    // all-ones when the MSB is set, zero otherwise
    let carry = 0u128.wrapping_sub(v >> 127);

    ((v << 1) ^ (carry & RB_WORD)).to_be_bytes()
}

/// Bytewise AND of `block` and `mask`.
#[inline]
pub fn mask(block: &Block, mask: &Block) -> Block {
    let mut out = *block;
    for (o, m) in out.iter_mut().zip(mask.iter()) {
        *o &= m;
    }
    out
}
