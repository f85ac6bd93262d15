// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use siwe_auth::{AddressChecksumError, AddressChecksumProvider, parse_evm_wallet_address};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Delegates to the address type's own EIP-55 routine
#[derive(Debug, Default, Clone, Copy)]
pub struct AlloyAddressChecksumProvider;

impl AddressChecksumProvider for AlloyAddressChecksumProvider {
    fn provider_name(&self) -> &'static str {
        "alloy"
    }

    fn try_checksum(&self, address: &str) -> Result<String, AddressChecksumError> {
        let address = parse_evm_wallet_address(address)?;
        Ok(address.to_checksum(None))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
