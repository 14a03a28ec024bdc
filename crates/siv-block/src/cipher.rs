// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-block encryption seam.
//!
//! CMAC and S2V only ever need the forward direction of the block cipher,
//! so the seam is one method. The AES rounds themselves come from the
//! RustCrypto `aes` crate.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::block::Block;
use crate::error::BlockError;

/// A 128-bit block cipher, forward direction only.
pub trait BlockCipher {
    /// Encrypts `block` in place under the cipher's fixed key.
    fn encrypt_block(&self, block: &mut Block);
}

/// AES with the key size selected at construction.
///
/// Round keys are wiped on drop (`aes/zeroize`).
#[derive(Clone)]
pub enum Aes {
    /// AES-128 (16-byte key)
    Aes128(Aes128),
    /// AES-192 (24-byte key)
    Aes192(Aes192),
    /// AES-256 (32-byte key)
    Aes256(Aes256),
}

impl Aes {
    /// Builds the AES variant matching `key.len()`.
    pub fn new(key: &[u8]) -> Result<Self, BlockError> {
        match key.len() {
            16 => Ok(Self::Aes128(Aes128::new(GenericArray::from_slice(key)))),
            24 => Ok(Self::Aes192(Aes192::new(GenericArray::from_slice(key)))),
            32 => Ok(Self::Aes256(Aes256::new(GenericArray::from_slice(key)))),
            len => {
                tracing::debug!(len, "rejected AES key size");
                Err(BlockError::UnsupportedKeySize { len })
            }
        }
    }

    /// Key size in bytes.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Aes128(_) => 16,
            Self::Aes192(_) => 24,
            Self::Aes256(_) => 32,
        }
    }
}

impl BlockCipher for Aes {
    #[inline]
    fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes{} {{ [protected] }}", self.key_size() * 8)
    }
}
