// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::block::Block;
use crate::consts::{BLOCK_SIZE, ZERO_BLOCK};

const PAD_OCTET: u8 = 0x80;

/// Pads a final partial block: `data || 0x80 || 0x00*` up to 16 bytes.
///
/// # Panics
///
/// `data` must be shorter than [`BLOCK_SIZE`]. Full blocks are never
/// padded; passing one is a caller bug.
#[inline]
pub fn pad(data: &[u8]) -> Block {
    assert!(
        data.len() < BLOCK_SIZE,
        "pad: input must be shorter than one block (got {} bytes)",
        data.len()
    );

    let mut out = ZERO_BLOCK;
    out[..data.len()].copy_from_slice(data);
    out[data.len()] = PAD_OCTET;
    out
}
