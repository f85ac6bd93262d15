// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use siwe_auth::Web3AuthErrorCode;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Issue challenge
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueChallengeRequestDto {
    #[serde(default, alias = "eth_account")]
    pub address: Option<String>,
    #[serde(default, alias = "chain_id")]
    pub chain_id: Option<ChainIdDto>,
}

/// Wallets and front-ends send the chain id either way
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChainIdDto {
    Number(u64),
    Text(String),
}

impl From<ChainIdDto> for String {
    fn from(value: ChainIdDto) -> Self {
        match value {
            ChainIdDto::Number(n) => n.to_string(),
            ChainIdDto::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IssueChallengeResponseDto {
    Challenge { message: String },
    Failure(FailureDto),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Verify challenge
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyChallengeRequestDto {
    #[serde(default)]
    pub eth_message: Option<String>,
    #[serde(default)]
    pub eth_signature: Option<String>,
    /// Address the caller claims to act for. Never trusted.
    #[serde(default)]
    pub eth_account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerifyChallengeResponseDto {
    Verified {
        address: String,
        provider_identity_key: String,
    },
    Failure(FailureDto),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDto {
    pub error: Web3AuthErrorCode,
}

impl From<Web3AuthErrorCode> for FailureDto {
    fn from(error: Web3AuthErrorCode) -> Self {
        Self { error }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
