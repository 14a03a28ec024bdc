// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-SIV seal/open (RFC 5297 §2.6, §2.7).

use alloc::vec::Vec;

use zeroize::Zeroize;

use siv_block::{Aes, Block, IV_MASK, mask};
use siv_cmac::Cmac;
use siv_util::constant_time_eq;

use crate::consts::{KEY_SIZES, NONCE_SIZE, TAG_SIZE};
use crate::ctr::apply_keystream;
use crate::error::SivError;
use crate::s2v::s2v;

/// Deterministic AES-SIV.
///
/// Holds a CMAC context keyed with the first key half (subkeys derived
/// once) and an AES cipher keyed with the second half for CTR. Methods take
/// `&mut self` because the CMAC context is reused across calls; concurrent
/// callers need one instance each or a lock around every call.
pub struct SivAead {
    mac: Cmac<Aes>,
    enc: Aes,
    key_size: usize,
}

impl SivAead {
    /// Creates an AES-SIV instance. `key` must be 32, 48 or 64 bytes; the
    /// first half keys S2V, the second half keys CTR.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        let len = key.len();
        if !KEY_SIZES.contains(&len) {
            tracing::debug!(len, "rejected SIV key size");
            return Err(SivError::UnsupportedKeySize { len });
        }

        let (mac_key, enc_key) = key.split_at(len / 2);
        let mac = Cmac::new(mac_key).expect("infallible: SIV key half is an AES key");
        let enc = Aes::new(enc_key).expect("infallible: SIV key half is an AES key");

        Ok(Self {
            mac,
            enc,
            key_size: len,
        })
    }

    /// Key size in bytes (32, 48 or 64).
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// Always 0: the IV is synthesized from the input.
    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Ciphertext expansion in bytes (the synthetic IV).
    pub fn overhead(&self) -> usize {
        TAG_SIZE
    }

    /// Encrypts `plaintext` bound to the ordered `aad` list.
    ///
    /// Returns `V || C`, `16 + plaintext.len()` bytes.
    pub fn seal<A: AsRef<[u8]>>(&mut self, aad: &[A], plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(TAG_SIZE + plaintext.len());
        self.seal_into(&mut out, aad, plaintext);
        out
    }

    /// Like [`seal`](Self::seal) but appends `V || C` to `dst`.
    pub fn seal_into<A: AsRef<[u8]>>(
        &mut self,
        dst: &mut Vec<u8>,
        aad: &[A],
        plaintext: &[u8],
    ) {
        let mut v = s2v(&mut self.mac, aad, plaintext);
        let mut iv = mask(&v, &IV_MASK);

        dst.reserve(TAG_SIZE + plaintext.len());
        dst.extend_from_slice(&v);
        let start = dst.len();
        dst.extend_from_slice(plaintext);
        apply_keystream(&self.enc, &iv, &mut dst[start..]);

        v.zeroize();
        iv.zeroize();
    }

    /// Decrypts and authenticates `input` (`V || C`) against the ordered
    /// `aad` list.
    ///
    /// Inputs under 16 bytes fail with
    /// [`InvalidCiphertextLength`](SivError::InvalidCiphertextLength); a
    /// bare 16-byte `V` opens to an empty plaintext. On failure no plaintext
    /// is returned; the tentative plaintext is zeroized.
    pub fn open<A: AsRef<[u8]>>(
        &mut self,
        aad: &[A],
        input: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        let mut out = Vec::with_capacity(input.len().saturating_sub(TAG_SIZE));
        self.open_into(&mut out, aad, input)?;
        Ok(out)
    }

    /// Like [`open`](Self::open) but appends the plaintext to `dst`.
    ///
    /// `dst` is left as it was on failure.
    pub fn open_into<A: AsRef<[u8]>>(
        &mut self,
        dst: &mut Vec<u8>,
        aad: &[A],
        input: &[u8],
    ) -> Result<(), SivError> {
        if input.len() < TAG_SIZE {
            tracing::debug!(len = input.len(), "rejected SIV ciphertext length");
            return Err(SivError::InvalidCiphertextLength { len: input.len() });
        }

        let (v, body) = input.split_at(TAG_SIZE);
        let v: &Block = v.try_into().expect("infallible: split at TAG_SIZE");
        let mut iv = mask(v, &IV_MASK);

        let start = dst.len();
        dst.extend_from_slice(body);
        apply_keystream(&self.enc, &iv, &mut dst[start..]);
        iv.zeroize();

        let mut expected = s2v(&mut self.mac, aad, &dst[start..]);
        let authentic = constant_time_eq(&expected, v);
        expected.zeroize();

        if !authentic {
            dst[start..].zeroize();
            dst.truncate(start);
            tracing::debug!(len = input.len(), "SIV integrity check failed");
            return Err(SivError::IntegrityError);
        }

        Ok(())
    }

    /// Single-AAD encryption with a conventional AEAD call shape.
    ///
    /// `nonce` must be empty. `aad` is always one element, even when empty.
    pub fn encrypt(
        &mut self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        check_nonce(nonce)?;
        Ok(self.seal(&[aad], plaintext))
    }

    /// Single-AAD decryption with a conventional AEAD call shape.
    ///
    /// `nonce` must be empty. `aad` is always one element, even when empty.
    pub fn decrypt(
        &mut self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        check_nonce(nonce)?;
        self.open(&[aad], ciphertext)
    }
}

fn check_nonce(nonce: &[u8]) -> Result<(), SivError> {
    if nonce.len() != NONCE_SIZE {
        tracing::debug!(len = nonce.len(), "rejected nonce for SIV");
        return Err(SivError::NonceNotSupported { len: nonce.len() });
    }
    Ok(())
}

impl core::fmt::Debug for SivAead {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SivAead {{ [protected] }}")
    }
}
