// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use internal_error::InternalError;
use siwe_auth::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Assembles a challenge from the caller's request and the relying party's
/// own policy.
pub struct Eip4361MessageBuilder<'a> {
    relying_party: &'a RelyingParty,
    checksum_provider: &'a dyn AddressChecksumProvider,
    statement: Option<&'a str>,
}

impl<'a> Eip4361MessageBuilder<'a> {
    pub fn new(
        relying_party: &'a RelyingParty,
        checksum_provider: &'a dyn AddressChecksumProvider,
    ) -> Self {
        Self {
            relying_party,
            checksum_provider,
            statement: None,
        }
    }

    pub fn with_statement(mut self, statement: Option<&'a str>) -> Self {
        self.statement = statement.filter(|s| !s.is_empty());
        self
    }

    /// `issued_at` is truncated to whole seconds, the wire precision
    pub fn build(
        &self,
        request: &IssueChallengeRequest,
        nonce: Eip4361Nonce,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Eip4361Message, IssueChallengeError> {
        let address = request
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(MissingAddressError)?;

        let digits = strip_evm_address_prefix(address).map_err(InvalidMessageError::from)?;
        let address = self
            .checksum_provider
            .try_checksum(address)
            .unwrap_or_else(|_| format!("0x{digits}"));

        // Blank means absent
        let chain_id = match request.chain_id.as_deref().filter(|c| !c.trim().is_empty()) {
            None => Eip4361ChainId::mainnet(),
            Some(value) => Eip4361ChainId::try_new(value).map_err(|_| {
                InvalidMessageError::InvalidChainId {
                    value: value.to_string(),
                }
            })?,
        };

        let issued_at = issued_at.trunc_subsecs(0);
        let expiration_time = issued_at
            .checked_add_signed(ttl)
            .filter(|expiration_time| *expiration_time > issued_at)
            .map_or_else(
                || InternalError::bail(format!("Unusable challenge TTL: {ttl}")),
                Ok,
            )?;

        Ok(Eip4361Message {
            domain: self.relying_party.domain().to_string(),
            address,
            statement: self.statement.map(str::to_string),
            uri: self.relying_party.uri(),
            version: EIP_4361_VERSION.to_string(),
            chain_id,
            nonce,
            issued_at,
            expiration_time,
            not_before: None,
            request_id: None,
            resources: Vec::new(),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
