// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use alloy_primitives::{Address, Signature, eip191_hash_message, hex};
use k256::ecdsa::SigningKey;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct TestWallet {
    key: SigningKey,
    pub address: Address,
}

impl TestWallet {
    pub fn from_seed(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).unwrap();
        let address = Address::from_private_key(&key);
        Self { key, address }
    }

    pub fn lowercase_address(&self) -> String {
        format!("{:#x}", self.address)
    }

    pub fn checksummed_address(&self) -> String {
        self.address.to_checksum(None)
    }

    /// `personal_sign` of the text, hex-encoded with a `0x` prefix
    pub fn sign(&self, text: &str) -> String {
        let prehash = eip191_hash_message(text);
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(prehash.as_slice())
            .unwrap();

        hex::encode_prefixed(Signature::from((signature, recovery_id)).as_bytes())
    }
}

/// Flips one bit inside the `r` component
pub fn tamper_signature(signature: &str) -> String {
    let mut bytes = hex::decode(signature).unwrap();
    bytes[10] ^= 0x01;
    hex::encode_prefixed(bytes)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
