// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use siwe_auth::{AddressChecksumError, AddressChecksumProvider};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Last resort when no working hash routine is available: every address is
/// left exactly as given.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughAddressChecksumProvider;

impl AddressChecksumProvider for PassthroughAddressChecksumProvider {
    fn provider_name(&self) -> &'static str {
        "passthrough"
    }

    fn try_checksum(&self, _address: &str) -> Result<String, AddressChecksumError> {
        Err(AddressChecksumError::Unavailable {
            provider: self.provider_name(),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
