// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CTR keystream with a full 128-bit big-endian counter (RFC 5297 §2.5).

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{InnerIvInit, StreamCipher, StreamCipherCoreWrapper};
use aes::{Aes128, Aes192, Aes256};
use ctr::{CtrCore, flavors};

use siv_block::{Aes, Block};

/// XORs the CTR keystream starting at counter block `iv` into `data`.
pub(crate) fn apply_keystream(cipher: &Aes, iv: &Block, data: &mut [u8]) {
    let iv = GenericArray::from_slice(iv);

    // The wrapper only offers key-based init; the core takes an expanded cipher
    match cipher {
        Aes::Aes128(c) => {
            let core = CtrCore::<Aes128, flavors::Ctr128BE>::inner_iv_init(c.clone(), iv);
            StreamCipherCoreWrapper::from_core(core).apply_keystream(data);
        }
        Aes::Aes192(c) => {
            let core = CtrCore::<Aes192, flavors::Ctr128BE>::inner_iv_init(c.clone(), iv);
            StreamCipherCoreWrapper::from_core(core).apply_keystream(data);
        }
        Aes::Aes256(c) => {
            let core = CtrCore::<Aes256, flavors::Ctr128BE>::inner_iv_init(c.clone(), iv);
            StreamCipherCoreWrapper::from_core(core).apply_keystream(data);
        }
    }
}
