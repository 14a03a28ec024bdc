// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::consts::TAG_SIZE;

/// SIV error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SivError {
    /// Key length is not 32, 48 or 64 bytes
    #[error("unsupported SIV key size: {len} bytes (expected 32, 48 or 64)")]
    UnsupportedKeySize {
        /// Rejected key length in bytes
        len: usize,
    },

    /// Input too short to hold a synthetic IV (under 16 bytes)
    ///
    /// A 16-byte input is not rejected here: it is the sealing of an empty
    /// plaintext and is authenticated like any other input.
    #[error("invalid ciphertext length: {len} bytes (expected at least {TAG_SIZE})")]
    InvalidCiphertextLength {
        /// Rejected input length in bytes
        len: usize,
    },

    /// Synthetic IV mismatch: ciphertext, associated data or key is wrong
    #[error("integrity check failed: synthetic IV mismatch")]
    IntegrityError,

    /// A non-empty nonce was passed to a single-AAD entry point
    #[error("nonce not supported: SIV derives its IV internally (got {len} bytes)")]
    NonceNotSupported {
        /// Rejected nonce length in bytes
        len: usize,
    },
}
