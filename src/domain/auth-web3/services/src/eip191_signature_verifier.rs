// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Signature;
use siwe_auth::*;
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Recovers the signer of the canonical challenge text from a 65-byte
/// `personal_sign` (EIP-191) signature.
#[dill::component(pub)]
#[dill::interface(dyn Web3SignatureVerifier)]
pub struct Eip191SignatureVerifier {
    time_source: Arc<dyn SystemTimeSource>,
}

impl Web3SignatureVerifier for Eip191SignatureVerifier {
    fn verify(&self, message: &Eip4361Message, raw_signature: &str) -> SignatureVerdict {
        let now = self.time_source.now();

        if now >= message.expiration_time {
            return SignatureVerdict::Expired {
                expiration_time: message.expiration_time,
                now,
            };
        }

        if let Some(not_before) = message.not_before
            && now < not_before
        {
            return SignatureVerdict::Malformed(InvalidMessageError::NotYetValid { not_before });
        }

        let claimed_address = match parse_evm_wallet_address(&message.address) {
            Ok(address) => address,
            Err(e) => return SignatureVerdict::Malformed(e.into()),
        };

        let signature = match Signature::from_str(raw_signature.trim()) {
            Ok(signature) => signature,
            Err(e) => {
                return SignatureVerdict::BadSignature(InvalidSignatureError::new(format!(
                    "Cannot decode signature: {e}"
                )));
            }
        };

        let recovered_address =
            match signature.recover_address_from_msg(message.canonical_text().as_bytes()) {
                Ok(address) => address,
                Err(e) => {
                    return SignatureVerdict::BadSignature(InvalidSignatureError::new(format!(
                        "Cannot recover signer: {e}"
                    )));
                }
            };

        if recovered_address != claimed_address {
            return SignatureVerdict::BadSignature(InvalidSignatureError::new(
                "Signer does not match the address in the message",
            ));
        }

        SignatureVerdict::Verified(recovered_address)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
