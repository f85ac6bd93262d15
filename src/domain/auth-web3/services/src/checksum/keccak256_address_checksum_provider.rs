// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use alloy_primitives::keccak256;
use siwe_auth::{AddressChecksumError, AddressChecksumProvider, strip_evm_address_prefix};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// EIP-55 encoding over the Keccak-256 digest of the lower-cased hex digits:
/// a letter is upper-cased when its digest nibble is 8 or above.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keccak256AddressChecksumProvider;

impl AddressChecksumProvider for Keccak256AddressChecksumProvider {
    fn provider_name(&self) -> &'static str {
        "keccak256"
    }

    fn try_checksum(&self, address: &str) -> Result<String, AddressChecksumError> {
        let digits = strip_evm_address_prefix(address)?.to_ascii_lowercase();
        let digest = keccak256(digits.as_bytes());

        let mut checksummed = String::with_capacity(2 + digits.len());
        checksummed.push_str("0x");

        for (i, c) in digits.chars().enumerate() {
            let byte = digest[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

            if c.is_ascii_alphabetic() && nibble >= 8 {
                checksummed.push(c.to_ascii_uppercase());
            } else {
                checksummed.push(c);
            }
        }

        Ok(checksummed)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
