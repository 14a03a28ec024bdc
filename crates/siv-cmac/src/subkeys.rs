// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CMAC subkey generation (RFC 4493 §2.3).

use zeroize::Zeroize;

use siv_block::{Block, BlockCipher, ZERO_BLOCK, dbl};

/// CMAC subkeys `K1` and `K2`.
///
/// Derived once per key and never mutated afterwards. Cloning is cheap,
/// so one derivation can back several contexts keyed with the same key.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Subkeys {
    k1: Block,
    k2: Block,
}

impl Subkeys {
    /// `L = E(K, 0^128)`, `K1 = dbl(L)`, `K2 = dbl(K1)`
    pub fn derive<C: BlockCipher>(cipher: &C) -> Self {
        let mut l = ZERO_BLOCK;
        cipher.encrypt_block(&mut l);

        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        l.zeroize();

        Self { k1, k2 }
    }

    /// Subkey for a complete final block.
    pub fn k1(&self) -> &Block {
        &self.k1
    }

    /// Subkey for a padded final block.
    pub fn k2(&self) -> &Block {
        &self.k2
    }
}

impl core::fmt::Debug for Subkeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Subkeys {{ [protected] }}")
    }
}
