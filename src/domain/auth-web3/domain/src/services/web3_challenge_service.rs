// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Challenge-response authentication of an EVM wallet: the relying party
/// issues an EIP-4361 message bound to a session and a single-use nonce, the
/// wallet signs it, and the signed message is verified back into an identity.
#[async_trait::async_trait]
pub trait Web3ChallengeService: Send + Sync {
    /// Issues a fresh challenge, replacing any nonce previously outstanding
    /// for the session
    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        request: IssueChallengeRequest,
    ) -> Result<Eip4361Message, IssueChallengeError>;

    /// Verifies the signed challenge. Any attempt that gets past the presence
    /// checks consumes the session's nonce, successful or not.
    async fn verify_challenge(
        &self,
        session_id: &SessionId,
        request: VerifyChallengeRequest,
    ) -> Result<VerifiedIdentity, VerifyChallengeError>;

    async fn cleanup_expired_nonces(&self) -> Result<(), InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueChallengeRequest {
    pub address: Option<String>,
    /// Decimal chain id, mainnet when absent
    pub chain_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyChallengeRequest {
    pub eth_message: Option<String>,
    pub eth_signature: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum IssueChallengeError {
    #[error(transparent)]
    MissingAddress(#[from] MissingAddressError),

    #[error(transparent)]
    InvalidMessage(#[from] InvalidMessageError),

    #[error(transparent)]
    InvalidDomain(#[from] InvalidDomainError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl IssueChallengeError {
    pub fn code(&self) -> Web3AuthErrorCode {
        match self {
            Self::MissingAddress(_) => Web3AuthErrorCode::MissingAddress,
            Self::InvalidMessage(_) => Web3AuthErrorCode::InvalidMessage,
            Self::InvalidDomain(_) => Web3AuthErrorCode::InvalidDomain,
            Self::Internal(_) => Web3AuthErrorCode::InternalError,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum VerifyChallengeError {
    #[error(transparent)]
    MissingMessage(#[from] MissingMessageError),

    #[error(transparent)]
    MissingSignature(#[from] MissingSignatureError),

    #[error(transparent)]
    InvalidMessage(#[from] InvalidMessageError),

    #[error(transparent)]
    InvalidDomain(#[from] InvalidDomainError),

    #[error(transparent)]
    InvalidUri(#[from] InvalidUriError),

    #[error(transparent)]
    InvalidNonce(#[from] InvalidNonceError),

    #[error(transparent)]
    ExpiredMessage(#[from] ExpiredMessageError),

    #[error(transparent)]
    InvalidSignature(#[from] InvalidSignatureError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl VerifyChallengeError {
    pub fn code(&self) -> Web3AuthErrorCode {
        match self {
            Self::MissingMessage(_) => Web3AuthErrorCode::MissingMessage,
            Self::MissingSignature(_) => Web3AuthErrorCode::MissingSignature,
            Self::InvalidMessage(_) => Web3AuthErrorCode::InvalidMessage,
            Self::InvalidDomain(_) => Web3AuthErrorCode::InvalidDomain,
            Self::InvalidUri(_) => Web3AuthErrorCode::InvalidUri,
            Self::InvalidNonce(_) => Web3AuthErrorCode::InvalidNonce,
            Self::ExpiredMessage(_) => Web3AuthErrorCode::ExpiredMessage,
            Self::InvalidSignature(_) => Web3AuthErrorCode::InvalidSignature,
            Self::Internal(_) => Web3AuthErrorCode::InternalError,
        }
    }
}

impl From<Eip4361ParseError> for VerifyChallengeError {
    fn from(e: Eip4361ParseError) -> Self {
        Self::InvalidMessage(e.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
