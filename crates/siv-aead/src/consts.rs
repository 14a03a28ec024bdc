// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use siv_block::BLOCK_SIZE;

/// Synthetic IV (authentication tag) size in bytes
pub const TAG_SIZE: usize = BLOCK_SIZE;

/// SIV takes no external nonce
pub const NONCE_SIZE: usize = 0;

/// Accepted key sizes: AES-SIV-256, AES-SIV-384 and AES-SIV-512
pub const KEY_SIZES: [usize; 3] = [32, 48, 64];
