// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CMAC per RFC 4493.
//!
//! A [`Cmac`] context derives its subkeys once and can be [`reset`](Cmac::reset)
//! for any number of independent messages. Complete blocks are chained
//! straight from the caller's input; at most 31 pending bytes live in a
//! fixed tail, and the last block is always held back so finalization can
//! pick `K1` (complete block) or `K2` (padded block). Nothing is allocated.
//!
//! Subkeys, chaining state and buffered input are zeroized on reset and drop.
//!
//! References:
//! - RFC 4493: The AES-CMAC Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc4493>

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cmac;
mod error;
mod subkeys;

pub use cmac::{Cmac, MAC_SIZE, cmac};
pub use error::CmacError;
pub use subkeys::Subkeys;

pub use siv_block::{Aes, Block, BlockCipher};
