// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use internal_error::{InternalError, ResultIntoInternal};
use siwe_auth::*;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Translates wallet sign-in calls between their JSON shape and the
/// challenge service. Failures leave as a bare error code; details stay in
/// the logs.
#[async_trait::async_trait]
pub trait Web3WalletAuthHandler: Send + Sync {
    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        request: IssueChallengeRequestDto,
    ) -> IssueChallengeResponseDto;

    async fn verify_challenge(
        &self,
        session_id: &SessionId,
        request: VerifyChallengeRequestDto,
    ) -> VerifyChallengeResponseDto;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Web3WalletAuthAdapter {
    challenge_service: Arc<dyn Web3ChallengeService>,
}

#[component(pub)]
#[interface(dyn Web3WalletAuthHandler)]
impl Web3WalletAuthAdapter {
    pub fn new(challenge_service: Arc<dyn Web3ChallengeService>) -> Self {
        Self { challenge_service }
    }

    /// Body-in, body-out form of [`Web3WalletAuthHandler::issue_challenge`]
    pub async fn issue_challenge_json(
        &self,
        session_id: &SessionId,
        request_json: &str,
    ) -> Result<String, InternalError> {
        let response = match serde_json::from_str::<IssueChallengeRequestDto>(request_json) {
            Ok(request) => self.issue_challenge(session_id, request).await,
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable issue challenge request");
                IssueChallengeResponseDto::Failure(Web3AuthErrorCode::InvalidMessage.into())
            }
        };

        serde_json::to_string(&response).int_err()
    }

    /// Body-in, body-out form of [`Web3WalletAuthHandler::verify_challenge`]
    pub async fn verify_challenge_json(
        &self,
        session_id: &SessionId,
        request_json: &str,
    ) -> Result<String, InternalError> {
        let response = match serde_json::from_str::<VerifyChallengeRequestDto>(request_json) {
            Ok(request) => self.verify_challenge(session_id, request).await,
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable verify challenge request");
                VerifyChallengeResponseDto::Failure(Web3AuthErrorCode::InvalidMessage.into())
            }
        };

        serde_json::to_string(&response).int_err()
    }
}

#[async_trait::async_trait]
impl Web3WalletAuthHandler for Web3WalletAuthAdapter {
    #[tracing::instrument(level = "info", name = "Web3WalletAuthAdapter::issue_challenge", skip_all)]
    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        request: IssueChallengeRequestDto,
    ) -> IssueChallengeResponseDto {
        let request = IssueChallengeRequest {
            address: request.address,
            chain_id: request.chain_id.map(Into::into),
        };

        match self
            .challenge_service
            .issue_challenge(session_id, request)
            .await
        {
            Ok(message) => IssueChallengeResponseDto::Challenge {
                message: message.canonical_text(),
            },
            Err(IssueChallengeError::Internal(e)) => {
                log_internal_error(&e);
                IssueChallengeResponseDto::Failure(Web3AuthErrorCode::InternalError.into())
            }
            Err(e) => IssueChallengeResponseDto::Failure(e.code().into()),
        }
    }

    #[tracing::instrument(level = "info", name = "Web3WalletAuthAdapter::verify_challenge", skip_all)]
    async fn verify_challenge(
        &self,
        session_id: &SessionId,
        request: VerifyChallengeRequestDto,
    ) -> VerifyChallengeResponseDto {
        let claimed_account = request.eth_account;
        let request = VerifyChallengeRequest {
            eth_message: request.eth_message,
            eth_signature: request.eth_signature,
        };

        match self
            .challenge_service
            .verify_challenge(session_id, request)
            .await
        {
            Ok(identity) => {
                let provider_identity_key = identity.provider_identity_key();

                if let Some(claimed_account) = claimed_account
                    && !claimed_account.eq_ignore_ascii_case(&identity.address)
                {
                    tracing::warn!(
                        %claimed_account,
                        verified_address = %identity.address,
                        "Caller-supplied account overridden by the verified signer"
                    );
                }

                VerifyChallengeResponseDto::Verified {
                    address: identity.address,
                    provider_identity_key,
                }
            }
            Err(VerifyChallengeError::Internal(e)) => {
                log_internal_error(&e);
                VerifyChallengeResponseDto::Failure(Web3AuthErrorCode::InternalError.into())
            }
            Err(e) => VerifyChallengeResponseDto::Failure(e.code().into()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn log_internal_error(e: &InternalError) {
    tracing::error!(error = ?e, error_msg = %e.reason(), "Unhandled error");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
