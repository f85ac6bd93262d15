// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use siwe_auth::{AddressChecksumError, AddressChecksumProvider};

use crate::{
    AlloyAddressChecksumProvider,
    Keccak256AddressChecksumProvider,
    PassthroughAddressChecksumProvider,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Published EIP-55 vector used to probe candidate providers
pub const CHECKSUM_PROBE_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The provider chosen once at startup: the first candidate that reproduces
/// the probe vector, else the passthrough.
pub struct SelectedAddressChecksumProvider {
    inner: Arc<dyn AddressChecksumProvider>,
}

#[dill::component(pub)]
#[dill::interface(dyn AddressChecksumProvider)]
#[dill::scope(dill::Singleton)]
impl SelectedAddressChecksumProvider {
    fn new() -> Self {
        Self::select([
            Arc::new(Keccak256AddressChecksumProvider) as Arc<dyn AddressChecksumProvider>,
            Arc::new(AlloyAddressChecksumProvider),
        ])
    }
}

impl SelectedAddressChecksumProvider {
    pub fn select(
        candidates: impl IntoIterator<Item = Arc<dyn AddressChecksumProvider>>,
    ) -> Self {
        let probe_input = CHECKSUM_PROBE_ADDRESS.to_ascii_lowercase();

        for (i, candidate) in candidates.into_iter().enumerate() {
            match candidate.try_checksum(&probe_input) {
                Ok(checksummed) if checksummed == CHECKSUM_PROBE_ADDRESS => {
                    if i == 0 {
                        tracing::debug!(
                            provider = candidate.provider_name(),
                            "Selected address checksum provider"
                        );
                    } else {
                        tracing::warn!(
                            provider = candidate.provider_name(),
                            "Primary address checksum provider unusable, selected a fallback"
                        );
                    }
                    return Self { inner: candidate };
                }
                Ok(checksummed) => {
                    tracing::warn!(
                        provider = candidate.provider_name(),
                        %checksummed,
                        "Address checksum provider failed the probe vector"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        provider = candidate.provider_name(),
                        error = %err,
                        "Address checksum provider is unavailable"
                    );
                }
            }
        }

        tracing::warn!("No address checksum provider available, addresses will not be checksummed");

        Self {
            inner: Arc::new(PassthroughAddressChecksumProvider),
        }
    }
}

impl AddressChecksumProvider for SelectedAddressChecksumProvider {
    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn try_checksum(&self, address: &str) -> Result<String, AddressChecksumError> {
        self.inner.try_checksum(address)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
