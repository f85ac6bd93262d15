// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Checks that a parsed challenge is within its validity window and was
/// signed by the wallet it names.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
pub trait Web3SignatureVerifier: Send + Sync {
    fn verify(&self, message: &Eip4361Message, raw_signature: &str) -> SignatureVerdict;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureVerdict {
    /// Carries the recovered signer
    Verified(EvmWalletAddress),
    Expired {
        expiration_time: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    Malformed(InvalidMessageError),
    BadSignature(InvalidSignatureError),
}

impl SignatureVerdict {
    pub fn into_result(self) -> Result<EvmWalletAddress, VerifyChallengeError> {
        match self {
            Self::Verified(address) => Ok(address),
            Self::Expired {
                expiration_time,
                now,
            } => Err(ExpiredMessageError {
                expiration_time,
                now,
            }
            .into()),
            Self::Malformed(e) => Err(e.into()),
            Self::BadSignature(e) => Err(e.into()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
