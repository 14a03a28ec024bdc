// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Block cipher construction error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// Key length is not an AES key length (16, 24 or 32 bytes)
    #[error("unsupported AES key size: {len} bytes (expected 16, 24 or 32)")]
    UnsupportedKeySize {
        /// Rejected key length in bytes
        len: usize,
    },
}
