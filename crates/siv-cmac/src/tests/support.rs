// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for the block cipher seam.

use core::cell::Cell;

use siv_block::{Aes, Block, BlockCipher};
use siv_util::hex_to_bytes;

/// RFC 4493 example key
pub(crate) const RFC4493_KEY: &str = "2b7e1516 28aed2a6 abf71588 09cf4f3c";

/// RFC 4493 example message (64 bytes, truncated per example)
pub(crate) const RFC4493_MESSAGE: &str = "6bc1bee2 2e409f96 e93d7e11 7393172a
     ae2d8a57 1e03ac9c 9eb76fac 45af8e51
     30c81c46 a35ce411 e5fbc119 1a0a52ef
     f69f2445 df4f9b17 ad2b417b e66c3710";

pub(crate) fn rfc4493_aes() -> Aes {
    Aes::new(&hex_to_bytes(RFC4493_KEY)).expect("Failed to Aes::new(..)")
}

/// AES wrapper counting block encryptions.
pub(crate) struct CountingCipher {
    inner: Aes,
    calls: Cell<usize>,
}

impl CountingCipher {
    pub fn new(inner: Aes) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl BlockCipher for CountingCipher {
    fn encrypt_block(&self, block: &mut Block) {
        self.calls.set(self.calls.get() + 1);
        self.inner.encrypt_block(block);
    }
}
