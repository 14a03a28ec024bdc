// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use siv_util::hex_to_bytes;

use crate::block::{Block, xor};
use crate::consts::{IV_MASK, RB, ZERO_BLOCK};
use crate::gf128::{dbl, mask};

fn block(hex: &str) -> Block {
    hex_to_bytes(hex)
        .try_into()
        .expect("Failed to convert hex into a 16-byte block")
}

/// Byte-by-byte shift with an explicit branch, used as reference.
fn reference_dbl(input: &Block) -> Block {
    let mut out = [0u8; 16];
    let mut carry = 0u8;
    for i in (0..16).rev() {
        out[i] = (input[i] << 1) | carry;
        carry = input[i] >> 7;
    }
    if input[0] & 0x80 != 0 {
        out[15] ^= 0x87;
    }
    out
}

// RFC 5297 A.1: dbl(CMAC(K, <zero>))
#[test]
fn dbl_rfc5297_msb_clear() {
    let input = block("0e04dfaf c1efbf04 01405828 59bf073a");
    let expected = block("1c09bf5f 83df7e08 0280b050 b37e0e74");

    assert_eq!(dbl(&input), expected);
}

// RFC 5297 A.1: dbl of the folded AD value
#[test]
fn dbl_rfc5297_msb_set() {
    let input = block("edf09de8 76c642ee 4d78bce4 ceedfc4f");
    let expected = block("dbe13bd0 ed8c85dc 9af179c9 9ddbf819");

    assert_eq!(dbl(&input), expected);
}

#[test]
fn dbl_of_zero_is_zero() {
    assert_eq!(dbl(&ZERO_BLOCK), ZERO_BLOCK);
}

#[test]
fn dbl_of_top_bit_is_reduction_constant() {
    let mut top = ZERO_BLOCK;
    top[0] = 0x80;

    assert_eq!(dbl(&top), RB);
}

#[test]
fn dbl_carries_across_bytes() {
    let mut input = ZERO_BLOCK;
    input[15] = 0x80;

    let mut expected = ZERO_BLOCK;
    expected[14] = 0x01;

    assert_eq!(dbl(&input), expected);
}

#[test]
fn mask_rfc5297_iv() {
    let v = block("85632d07 c6e8f37f 950acd32 0a2ecc93");
    let expected = block("85632d07 c6e8f37f 150acd32 0a2ecc93");

    assert_eq!(mask(&v, &IV_MASK), expected);
}

#[test]
fn mask_clears_exactly_two_bits() {
    let masked = mask(&[0xff; 16], &IV_MASK);
    let cleared: u32 = masked.iter().map(|b| b.count_zeros()).sum();

    assert_eq!(cleared, 2);
    assert_eq!(masked[8], 0x7f);
    assert_eq!(masked[12], 0x7f);
}

proptest! {
    #[test]
    fn dbl_is_linear(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        prop_assert_eq!(xor(&dbl(&a), &dbl(&b)), dbl(&xor(&a, &b)));
    }

    #[test]
    fn dbl_matches_reference(a in any::<[u8; 16]>()) {
        prop_assert_eq!(dbl(&a), reference_dbl(&a));
    }

    #[test]
    fn mask_is_idempotent(a in any::<[u8; 16]>()) {
        let once = mask(&a, &IV_MASK);
        prop_assert_eq!(mask(&once, &IV_MASK), once);
    }
}
