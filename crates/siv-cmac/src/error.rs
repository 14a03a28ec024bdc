// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use siv_block::BlockError;
use thiserror::Error;

/// CMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmacError {
    /// Key length is not an AES key length (16, 24 or 32 bytes)
    #[error("unsupported CMAC key size: {len} bytes (expected 16, 24 or 32)")]
    UnsupportedKeySize {
        /// Rejected key length in bytes
        len: usize,
    },

    /// Input was written after finalization without an intervening reset
    #[error("CMAC context already finalized, reset() is required")]
    InvalidState,
}

impl From<BlockError> for CmacError {
    fn from(err: BlockError) -> Self {
        match err {
            BlockError::UnsupportedKeySize { len } => Self::UnsupportedKeySize { len },
        }
    }
}
