// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use siv_util::hex_to_bytes;

use super::support::{CountingCipher, RFC4493_MESSAGE, rfc4493_aes};
use crate::cmac::Cmac;
use crate::subkeys::Subkeys;

// RFC 4493 §4, subkey generation
#[test]
fn rfc4493_subkeys() {
    let subkeys = Subkeys::derive(&rfc4493_aes());

    assert_eq!(
        subkeys.k1().to_vec(),
        hex_to_bytes("fbeed618 35713366 7c85e08f 7236a8de")
    );
    assert_eq!(
        subkeys.k2().to_vec(),
        hex_to_bytes("f7ddac30 6ae266cc f90bc11e e46d513b")
    );
}

#[test]
fn derivation_costs_one_encryption() {
    let cipher = CountingCipher::new(rfc4493_aes());
    let _subkeys = Subkeys::derive(&cipher);

    assert_eq!(cipher.calls(), 1);
}

#[test]
fn reset_does_not_rederive() {
    let message = hex_to_bytes(RFC4493_MESSAGE);
    let mut mac = Cmac::with_cipher(CountingCipher::new(rfc4493_aes()));
    assert_eq!(mac.cipher().calls(), 1);

    // 64 bytes: 3 chained blocks + final block
    mac.update(&message).expect("Failed to update(..)");
    let first = mac.sum();
    assert_eq!(mac.cipher().calls(), 1 + 4);

    mac.reset();
    mac.update(&message).expect("Failed to update(..)");
    let second = mac.sum();
    assert_eq!(mac.cipher().calls(), 1 + 4 + 4);

    assert_eq!(first, second);
}

#[test]
fn shared_subkeys_match_fresh_derivation() {
    let message = hex_to_bytes(RFC4493_MESSAGE);

    let mut fresh = Cmac::with_cipher(rfc4493_aes());
    let shared = fresh.subkeys().clone();
    let mut reused = Cmac::with_subkeys(CountingCipher::new(rfc4493_aes()), shared);

    fresh.update(&message[..40]).expect("Failed to update(..)");
    reused.update(&message[..40]).expect("Failed to update(..)");

    assert_eq!(fresh.sum(), reused.sum());
    // 40 bytes: 2 chained blocks + final block, no derivation
    assert_eq!(reused.cipher().calls(), 3);
}

#[test]
fn debug_does_not_leak_subkeys() {
    let subkeys = Subkeys::derive(&rfc4493_aes());
    assert_eq!(format!("{subkeys:?}"), "Subkeys { [protected] }");
}
