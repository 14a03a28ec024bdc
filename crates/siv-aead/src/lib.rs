// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic AES-SIV per RFC 5297.
//!
//! The key is split into a MAC half (S2V over AES-CMAC) and an encryption
//! half (AES-CTR). S2V folds the ordered associated data and the plaintext
//! into a synthetic IV `V`, which is both the authentication tag and,
//! masked, the CTR initial counter block.
//!
//! Wire format: `V (16 bytes) || CTR(plaintext)`.
//!
//! Sealing is deterministic: equal key, associated data and plaintext give
//! equal ciphertexts. No nonce is taken; a caller wanting probabilistic
//! encryption passes a random value as the last associated data element.
//!
//! References:
//! - RFC 5297: Synthetic Initialization Vector (SIV) Authenticated Encryption
//!   <https://datatracker.ietf.org/doc/html/rfc5297>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod ctr;
mod error;
mod s2v;
mod siv;

pub use consts::{KEY_SIZES, NONCE_SIZE, TAG_SIZE};
pub use error::SivError;
pub use s2v::s2v;
pub use siv::SivAead;
