// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

/// Decodes a hex string into bytes.
///
/// Whitespace is ignored so that vectors can be copied from RFC text
/// as-is (`"85632d07 c6e8f37f"`).
///
/// # Panics
///
/// Panics on non-hex characters or an odd number of digits. Intended for
/// test vectors only.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(nibble)
        .collect();

    assert!(
        digits.len() % 2 == 0,
        "hex_to_bytes: odd number of hex digits ({})",
        digits.len()
    );

    digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}

fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("hex_to_bytes: invalid hex character {:?}", c as char),
    }
}
