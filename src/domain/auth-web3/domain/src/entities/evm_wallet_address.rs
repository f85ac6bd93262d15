// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type EvmWalletAddress = alloy_primitives::Address;

pub const EVM_WALLET_ADDRESS_HEX_LENGTH: usize = 40;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Returns the 40 hex digits of an address written with or without the `0x`
/// prefix, in their original letter case.
pub fn strip_evm_address_prefix(value: &str) -> Result<&str, NotAnAddressError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);

    if digits.len() == EVM_WALLET_ADDRESS_HEX_LENGTH
        && digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        Ok(digits)
    } else {
        Err(NotAnAddressError {
            value: value.to_string(),
        })
    }
}

pub fn parse_evm_wallet_address(value: &str) -> Result<EvmWalletAddress, NotAnAddressError> {
    let digits = strip_evm_address_prefix(value)?;

    EvmWalletAddress::from_str(digits).map_err(|_| NotAnAddressError {
        value: value.to_string(),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not an EVM wallet address: '{value}'")]
pub struct NotAnAddressError {
    pub value: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
