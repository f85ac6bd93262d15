// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::NotAnAddressError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Mixed-case (EIP-55) address encoding.
///
/// Checksumming is a display and comparison concern, not a security gate: the
/// infallible [`AddressChecksumProvider::checksum`] returns its input unchanged
/// when encoding is impossible.
pub trait AddressChecksumProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Accepts 40 hex digits in any case, with or without the `0x` prefix, and
    /// returns the `0x`-prefixed checksummed form
    fn try_checksum(&self, address: &str) -> Result<String, AddressChecksumError>;

    fn checksum(&self, address: &str) -> String {
        self.try_checksum(address)
            .unwrap_or_else(|_| address.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressChecksumError {
    #[error(transparent)]
    NotAnAddress(#[from] NotAnAddressError),

    #[error("Checksum provider '{provider}' cannot encode addresses")]
    Unavailable { provider: &'static str },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
