// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::block::Block;

/// Block size in bytes (AES, CMAC and S2V all work on 128-bit blocks)
pub const BLOCK_SIZE: usize = 16;

/// The all-zero block
pub const ZERO_BLOCK: Block = [0u8; BLOCK_SIZE];

/// The 128-bit big-endian integer 1, used by S2V for an empty AAD list
pub const ONE_BLOCK: Block = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Reduction constant for doubling in GF(2^128): x^128 = x^7 + x^2 + x + 1
pub const RB: Block = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x87,
];

/// Synthetic IV to CTR IV mask: 1^64 || 0^1 || 1^31 || 0^1 || 1^31 (RFC 5297 §2.6)
///
/// Clears the top bit of the last two 32-bit words so that 32-bit and
/// 64-bit counter implementations agree on the keystream.
pub const IV_MASK: Block = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0x7f, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff,
];
