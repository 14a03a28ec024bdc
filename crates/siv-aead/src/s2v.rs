// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! S2V: string-to-vector (RFC 5297 §2.4).

use zeroize::Zeroize;

use siv_block::{BLOCK_SIZE, Block, BlockCipher, ONE_BLOCK, ZERO_BLOCK, dbl, pad, xor_in_place};
use siv_cmac::Cmac;

/// CMAC of a single string, reusing the context's subkeys.
fn mac_of<C: BlockCipher>(mac: &mut Cmac<C>, data: &[u8]) -> Block {
    mac.reset();
    mac.update(data).expect("infallible: context was just reset");
    mac.sum()
}

/// Folds the ordered associated data and `message` into a synthetic IV.
///
/// `mac` must be keyed with the MAC half of the SIV key; it is reset for
/// every string and left finalized on return.
///
/// - no associated data: `V = CMAC(<one>)`
/// - otherwise `D = CMAC(<zero>)`, then `D = dbl(D) ^ CMAC(S_i)` for each
///   element in order
/// - `|message| >= 16`: `V = CMAC(message xorend D)`
/// - `|message| < 16`: `V = CMAC(dbl(D) ^ pad(message))`
pub fn s2v<C, A>(mac: &mut Cmac<C>, aad: &[A], message: &[u8]) -> Block
where
    C: BlockCipher,
    A: AsRef<[u8]>,
{
    if aad.is_empty() {
        return mac_of(mac, &ONE_BLOCK);
    }

    let mut d = mac_of(mac, &ZERO_BLOCK);
    for element in aad {
        let mut mac_i = mac_of(mac, element.as_ref());
        d = dbl(&d);
        xor_in_place(&mut d, &mac_i);
        mac_i.zeroize();
    }

    mac.reset();

    if message.len() >= BLOCK_SIZE {
        // xorend: D lands on the last 16 bytes, the head is fed untouched
        let (head, tail) = message.split_at(message.len() - BLOCK_SIZE);
        let mut last: Block = tail.try_into().expect("infallible: tail is exactly one block");
        xor_in_place(&mut last, &d);

        mac.update(head).expect("infallible: context was just reset");
        mac.update(&last).expect("infallible: context not finalized");
        last.zeroize();
    } else {
        let mut t = dbl(&d);
        xor_in_place(&mut t, &pad(message));

        mac.update(&t).expect("infallible: context was just reset");
        t.zeroize();
    }

    d.zeroize();
    mac.sum()
}
