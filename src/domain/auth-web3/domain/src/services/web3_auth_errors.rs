// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Eip4361ParseError, NotAnAddressError, UnusableBaseUrlError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Stable, machine-readable reason of a failed challenge operation.
/// This is the only part of an error that crosses the service boundary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Web3AuthErrorCode {
    MissingAddress,
    MissingMessage,
    MissingSignature,
    InvalidDomain,
    InvalidUri,
    InvalidNonce,
    ExpiredMessage,
    InvalidMessage,
    InvalidSignature,
    InternalError,
}

impl Web3AuthErrorCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Wallet address is required")]
pub struct MissingAddressError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Signed message is required")]
pub struct MissingMessageError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Signature is required")]
pub struct MissingSignatureError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDomainError {
    #[error(transparent)]
    Misconfigured(#[from] UnusableBaseUrlError),

    #[error("Domain '{actual}' does not match '{expected}'")]
    Mismatch { expected: String, actual: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("URI '{uri}' is not served by '{expected}': {reason}")]
pub struct InvalidUriError {
    pub uri: String,
    pub expected: String,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNonceError {
    #[error("No outstanding nonce for the session")]
    Absent,

    #[error("Nonce does not match the one issued for the session")]
    Mismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Message expired at {expiration_time}, now is {now}")]
pub struct ExpiredMessageError {
    pub expiration_time: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMessageError {
    #[error(transparent)]
    Parse(#[from] Eip4361ParseError),

    #[error(transparent)]
    InvalidAddress(#[from] NotAnAddressError),

    #[error("Invalid chain id: '{value}'")]
    InvalidChainId { value: String },

    #[error("Message is not valid before {not_before}")]
    NotYetValid { not_before: DateTime<Utc> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid signature: {reason}")]
pub struct InvalidSignatureError {
    pub reason: String,
}

impl InvalidSignatureError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
