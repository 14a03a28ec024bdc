// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 128-bit block primitives used by CMAC and SIV.
//!
//! - [`dbl`]: multiplication by `x` in GF(2^128), constant time (RFC 5297 §2.3)
//! - [`mask`]: bytewise AND used to derive the CTR IV from a synthetic IV
//! - [`pad`]: `10*` padding of a final partial block
//! - [`BlockCipher`]: the single-block encrypt seam, implemented by [`Aes`]
//!
//! References:
//! - RFC 4493: The AES-CMAC Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc4493>
//! - RFC 5297: Synthetic Initialization Vector (SIV) Authenticated Encryption
//!   <https://datatracker.ietf.org/doc/html/rfc5297>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod block;
mod cipher;
mod consts;
mod error;
mod gf128;
mod padding;

pub use block::{Block, xor, xor_in_place};
pub use cipher::{Aes, BlockCipher};
pub use consts::{BLOCK_SIZE, IV_MASK, ONE_BLOCK, RB, ZERO_BLOCK};
pub use error::BlockError;
pub use gf128::{dbl, mask};
pub use padding::pad;
