// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Deterministic AES-SIV authenticated encryption in Rust.</em></p>
//!
//! ---
//!
//! `siv` implements AES-SIV (RFC 5297) on top of a streaming AES-CMAC
//! (RFC 4493). Sealing the same plaintext with the same key and associated
//! data always yields the same ciphertext, and reusing "nonces" cannot leak
//! anything beyond equality of messages.
//!
//! # Features
//!
//! - 🔐 **Misuse resistant**: no nonce to get wrong, the IV is synthesized
//! - 📚 **Vector associated data**: any number of ordered AAD elements
//! - 🌊 **Streaming CMAC**: reusable subkeys, `reset` between messages
//! - 🧹 **Zeroization**: subkeys, chaining state and rejected plaintext are wiped
//! - 📦 **`no_std` compatible**: only `alloc` is required
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! siv = { version = "0.1.0-rc.1", features = ["std"] }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use siv::aead::{SivAead, SivError, TAG_SIZE};
//!
//! fn main() -> Result<(), SivError> {
//!     let key = [0x42u8; 32];
//!     let mut siv = SivAead::new(&key)?;
//!
//!     let sealed = siv.seal(&[b"header".as_slice(), b"context".as_slice()], b"secret");
//!     assert_eq!(sealed.len(), TAG_SIZE + 6);
//!
//!     let opened = siv.open(&[b"header".as_slice(), b"context".as_slice()], &sealed)?;
//!     assert_eq!(opened, b"secret");
//!
//!     // Any change to the associated data is an integrity failure
//!     let tampered = siv.open(&[b"header".as_slice()], &sealed);
//!     assert_eq!(tampered, Err(SivError::IntegrityError));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Standalone CMAC
//!
//! ```rust
//! use siv::cmac::{Cmac, CmacError};
//!
//! fn main() -> Result<(), CmacError> {
//!     let mut mac = Cmac::new(&[0u8; 16])?;
//!     mac.update(b"first ")?;
//!     mac.update(b"message")?;
//!     let tag = mac.sum();
//!
//!     // Subkeys survive reset
//!     mac.reset();
//!     mac.update(b"first message")?;
//!     assert_eq!(mac.sum(), tag);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Contents |
//! |---|---|---|
//! | [`aead`] | `siv-aead` | `SivAead`, `s2v` |
//! | [`cmac`] | `siv-cmac` | `Cmac`, `Subkeys` |
//! | [`block`] | `siv-block` | `dbl`, `pad`, `mask`, `Aes` |
//! | [`util`] | `siv-util` | constant-time comparison |
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use siv_aead as aead;
pub use siv_block as block;
pub use siv_cmac as cmac;
pub use siv_util as util;
