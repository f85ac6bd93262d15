// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::Eip4361ChainId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Signer of a challenge that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Checksummed form of the recovered signer address
    pub address: String,
    pub chain_id: Eip4361ChainId,
}

impl VerifiedIdentity {
    /// Case-independent key for looking up the account bound to this wallet
    pub fn provider_identity_key(&self) -> String {
        self.address.to_ascii_lowercase()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
