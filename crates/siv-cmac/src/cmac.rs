// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming CMAC context.
//!
//! ```text
//! Fresh ──update──▶ Accumulating ──sum──▶ Finalized
//!   ▲                                         │
//!   └──────────────────reset──────────────────┘
//! ```

use zeroize::Zeroize;

use siv_block::{Aes, BLOCK_SIZE, Block, BlockCipher, ZERO_BLOCK, pad, xor_in_place};
use siv_util::constant_time_eq;

use crate::error::CmacError;
use crate::subkeys::Subkeys;

/// CMAC tag size in bytes
pub const MAC_SIZE: usize = BLOCK_SIZE;

/// Pending input capacity: one held-back block plus one being filled
const TAIL_SIZE: usize = 2 * BLOCK_SIZE;

/// CBC-MAC step: `state = E(state ^ block)`
#[inline]
fn chain<C: BlockCipher>(cipher: &C, state: &mut Block, block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    for (s, b) in state.iter_mut().zip(block.iter()) {
        *s ^= b;
    }
    cipher.encrypt_block(state);
}

/// CMAC context over a 128-bit block cipher (AES by default).
pub struct Cmac<C: BlockCipher = Aes> {
    cipher: C,
    subkeys: Subkeys,
    /// CBC-MAC chaining value
    pub(crate) state: Block,
    /// Unprocessed input, `tail[..tail_len]`; never more than 31 bytes
    /// between calls
    pub(crate) tail: [u8; TAIL_SIZE],
    pub(crate) tail_len: usize,
    had_data: bool,
    finalized: bool,
}

impl Cmac<Aes> {
    /// Creates an AES-CMAC context. `key` must be 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CmacError> {
        let cipher = Aes::new(key)?;
        Ok(Self::with_cipher(cipher))
    }
}

impl<C: BlockCipher> Cmac<C> {
    /// Creates a context over `cipher`, deriving fresh subkeys.
    pub fn with_cipher(cipher: C) -> Self {
        let subkeys = Subkeys::derive(&cipher);
        Self::with_subkeys(cipher, subkeys)
    }

    /// Creates a context reusing subkeys already derived for `cipher`'s key.
    ///
    /// Passing subkeys derived under a different key yields wrong tags.
    pub fn with_subkeys(cipher: C, subkeys: Subkeys) -> Self {
        Self {
            cipher,
            subkeys,
            state: ZERO_BLOCK,
            tail: [0u8; TAIL_SIZE],
            tail_len: 0,
            had_data: false,
            finalized: false,
        }
    }

    /// Subkeys of this context, for sharing with other contexts.
    pub fn subkeys(&self) -> &Subkeys {
        &self.subkeys
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// `true` once [`sum`](Self::sum) ran and until [`reset`](Self::reset).
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn pending(&self) -> &[u8] {
        &self.tail[..self.tail_len]
    }

    /// Absorbs `data`.
    ///
    /// Every complete block except the most recent one is chained right
    /// away; the remainder stays in a fixed tail until [`sum`](Self::sum).
    /// No heap memory is involved.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CmacError> {
        if self.finalized {
            tracing::debug!(len = data.len(), "rejected CMAC update after finalization");
            return Err(CmacError::InvalidState);
        }

        if data.is_empty() {
            return Ok(());
        }

        self.had_data = true;

        let take = (TAIL_SIZE - self.tail_len).min(data.len());
        self.tail[self.tail_len..self.tail_len + take].copy_from_slice(&data[..take]);
        self.tail_len += take;
        let mut data = &data[take..];

        if data.is_empty() {
            // Keep one full block back: sum() picks K1 or K2 from it
            if self.tail_len == TAIL_SIZE {
                chain(&self.cipher, &mut self.state, &self.tail[..BLOCK_SIZE]);
                self.tail.copy_within(BLOCK_SIZE.., 0);
                self.tail[BLOCK_SIZE..].zeroize();
                self.tail_len = BLOCK_SIZE;
            }
            return Ok(());
        }

        // Tail is full and more input follows: neither tail block is last
        chain(&self.cipher, &mut self.state, &self.tail[..BLOCK_SIZE]);
        chain(&self.cipher, &mut self.state, &self.tail[BLOCK_SIZE..]);
        self.tail.zeroize();

        while data.len() >= TAIL_SIZE {
            chain(&self.cipher, &mut self.state, &data[..BLOCK_SIZE]);
            data = &data[BLOCK_SIZE..];
        }

        self.tail[..data.len()].copy_from_slice(data);
        self.tail_len = data.len();

        Ok(())
    }

    /// Finalizes and returns the tag.
    ///
    /// The chaining state is not consumed, so calling `sum` again before
    /// [`reset`](Self::reset) returns the same tag.
    pub fn sum(&mut self) -> Block {
        let mut state = self.state;
        let pending = self.pending();

        let (mut last, subkey) = if !self.had_data {
            (pad(&[]), self.subkeys.k2())
        } else if pending.len() == BLOCK_SIZE {
            let block: Block = pending
                .try_into()
                .expect("infallible: pending is exactly one block");
            (block, self.subkeys.k1())
        } else if pending.len() > BLOCK_SIZE {
            chain(&self.cipher, &mut state, &pending[..BLOCK_SIZE]);
            (pad(&pending[BLOCK_SIZE..]), self.subkeys.k2())
        } else {
            (pad(pending), self.subkeys.k2())
        };

        xor_in_place(&mut last, subkey);
        xor_in_place(&mut last, &state);
        self.cipher.encrypt_block(&mut last);
        state.zeroize();

        self.finalized = true;
        last
    }

    /// Finalizes and compares against `tag` in constant time.
    pub fn verify(&mut self, tag: &[u8]) -> bool {
        let mut expected = self.sum();
        let ok = constant_time_eq(&expected, tag);
        expected.zeroize();
        ok
    }

    /// Returns to the fresh state. Subkeys are kept.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.tail.zeroize();
        self.tail_len = 0;
        self.had_data = false;
        self.finalized = false;
    }
}

impl<C: BlockCipher> Drop for Cmac<C> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.tail.zeroize();
        self.tail_len = 0;
    }
}

impl<C: BlockCipher> core::fmt::Debug for Cmac<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Cmac {{ [protected] }}")
    }
}

#[cfg(feature = "std")]
impl<C: BlockCipher> std::io::Write for Cmac<C> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf).map_err(std::io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// One-shot AES-CMAC of `data` under `key`.
pub fn cmac(key: &[u8], data: &[u8]) -> Result<Block, CmacError> {
    let mut mac = Cmac::new(key)?;
    mac.update(data)?;
    Ok(mac.sum())
}
