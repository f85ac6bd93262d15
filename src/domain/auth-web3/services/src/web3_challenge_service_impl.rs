// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::{ErrorIntoInternal, InternalError, ResultIntoInternal};
use siwe_auth::*;
use time_source::SystemTimeSource;

use crate::{Eip4361BindingValidator, Eip4361MessageBuilder};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Web3ChallengeServiceImpl {
    nonce_repo: Arc<dyn Web3AuthNonceRepository>,
    signature_verifier: Arc<dyn Web3SignatureVerifier>,
    checksum_provider: Arc<dyn AddressChecksumProvider>,
    time_source: Arc<dyn SystemTimeSource>,
    config: Arc<Web3AuthConfig>,
    relying_party: Result<RelyingParty, UnusableBaseUrlError>,
    config_error: Option<ConfigError>,
}

#[dill::component(pub)]
#[dill::interface(dyn Web3ChallengeService)]
impl Web3ChallengeServiceImpl {
    fn new(
        nonce_repo: Arc<dyn Web3AuthNonceRepository>,
        signature_verifier: Arc<dyn Web3SignatureVerifier>,
        checksum_provider: Arc<dyn AddressChecksumProvider>,
        time_source: Arc<dyn SystemTimeSource>,
        config: Arc<Web3AuthConfig>,
    ) -> Self {
        let relying_party = RelyingParty::from_base_url(&config.base_url);

        if let Err(e) = &relying_party {
            tracing::error!(error = %e, "Relying party cannot be derived, challenges will be refused");
        }

        let config_error = config.validate().err();
        if let Some(e) = &config_error {
            tracing::error!(error = %e, "Sign-in configuration is unusable, challenges will be refused");
        }

        Self {
            nonce_repo,
            signature_verifier,
            checksum_provider,
            time_source,
            config,
            relying_party,
            config_error,
        }
    }

    fn ensure_config_usable(&self) -> Result<(), InternalError> {
        match &self.config_error {
            Some(e) => Err(e.clone().int_err()),
            None => Ok(()),
        }
    }

    fn relying_party(&self) -> Result<&RelyingParty, InvalidDomainError> {
        self.relying_party
            .as_ref()
            .map_err(|e| InvalidDomainError::Misconfigured(e.clone()))
    }

    async fn verify_challenge_impl(
        &self,
        session_id: &SessionId,
        request: VerifyChallengeRequest,
    ) -> Result<VerifiedIdentity, VerifyChallengeError> {
        let eth_message = non_blank(request.eth_message).ok_or(MissingMessageError)?;
        let eth_signature = non_blank(request.eth_signature).ok_or(MissingSignatureError)?;

        self.ensure_config_usable()?;

        // From here on every outcome leaves the session without a nonce
        let session_nonce = self
            .nonce_repo
            .consume_nonce(session_id)
            .await
            .int_err()?
            .map(|entity| entity.nonce);

        let message = Eip4361Message::parse(&eth_message)?;

        Eip4361BindingValidator::new(self.relying_party()?)
            .validate(&message, session_nonce.as_ref())?;

        let signer = self
            .signature_verifier
            .verify(&message, &eth_signature)
            .into_result()?;

        Ok(VerifiedIdentity {
            address: self.checksum_provider.checksum(&format!("{signer:#x}")),
            chain_id: message.chain_id,
        })
    }
}

#[async_trait::async_trait]
impl Web3ChallengeService for Web3ChallengeServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%session_id))]
    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        request: IssueChallengeRequest,
    ) -> Result<Eip4361Message, IssueChallengeError> {
        self.ensure_config_usable()?;
        let relying_party = self.relying_party()?;

        let message = Eip4361MessageBuilder::new(relying_party, self.checksum_provider.as_ref())
            .with_statement(self.config.statement.as_deref())
            .build(
                &request,
                Eip4361Nonce::generate(),
                self.time_source.now(),
                self.config.challenge_ttl(),
            )?;

        self.nonce_repo
            .set_nonce(&Web3AuthNonceEntity {
                session_id: session_id.clone(),
                nonce: message.nonce.clone(),
                expires_at: message.expiration_time,
            })
            .await
            .int_err()?;

        tracing::debug!(
            address = %message.address,
            chain_id = %message.chain_id,
            expiration_time = %message.expiration_time,
            "Issued sign-in challenge"
        );

        Ok(message)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%session_id))]
    async fn verify_challenge(
        &self,
        session_id: &SessionId,
        request: VerifyChallengeRequest,
    ) -> Result<VerifiedIdentity, VerifyChallengeError> {
        let res = self.verify_challenge_impl(session_id, request).await;

        match &res {
            Ok(identity) => {
                tracing::debug!(address = %identity.address, "Sign-in challenge verified");
            }
            Err(VerifyChallengeError::Internal(_)) => {}
            Err(e) => {
                tracing::warn!(code = %e.code(), reason = %e, "Sign-in challenge rejected");
            }
        }

        res
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn cleanup_expired_nonces(&self) -> Result<(), InternalError> {
        let now = self.time_source.now();

        self.nonce_repo.cleanup_expired_nonces(now).await.int_err()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
