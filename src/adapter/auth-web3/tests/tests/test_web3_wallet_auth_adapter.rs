// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use alloy_primitives::{Address, Signature, eip191_hash_message, hex};
use chrono::{TimeZone, Utc};
use internal_error::InternalError;
use k256::ecdsa::SigningKey;
use pretty_assertions::assert_eq;
use siwe_auth::*;
use siwe_auth_adapter::*;
use siwe_auth_inmem::InMemoryWeb3AuthNonceRepository;
use time_source::{SystemTimeSource, SystemTimeSourceStub};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_issue_challenge_json() {
    let harness = AdapterHarness::new();

    let response = harness
        .adapter
        .issue_challenge_json(
            &harness.session_id,
            r#"{"address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "chainId": 137}"#,
        )
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();

    let message = response["message"].as_str().unwrap();
    assert!(message.starts_with(
        "forum.example.com wants you to sign in with your Ethereum account:\n0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\n"
    ));
    assert!(message.contains("\nChain ID: 137\n"));
    assert!(message.contains("\nIssued At: 2050-03-01T10:00:00Z\n"));
    assert!(message.ends_with("\nExpiration Time: 2050-03-01T10:05:00Z"));
}

#[test_log::test(tokio::test)]
async fn test_issue_challenge_chain_id_as_text() {
    let harness = AdapterHarness::new();

    let response = harness
        .adapter
        .issue_challenge(
            &harness.session_id,
            IssueChallengeRequestDto {
                address: Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".to_string()),
                chain_id: Some(ChainIdDto::Text("10".to_string())),
            },
        )
        .await;

    let IssueChallengeResponseDto::Challenge { message } = response else {
        panic!("Unexpected response: {response:?}");
    };
    assert!(message.contains("\nChain ID: 10\n"));
}

#[test_log::test(tokio::test)]
async fn test_issue_challenge_form_field_names() {
    let harness = AdapterHarness::new();

    let response = harness
        .adapter
        .issue_challenge_json(
            &harness.session_id,
            r#"{"eth_account": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "chain_id": "5"}"#,
        )
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();

    assert!(
        response["message"]
            .as_str()
            .unwrap()
            .contains("\nChain ID: 5\n")
    );
}

#[test_log::test(tokio::test)]
async fn test_issue_challenge_blank_chain_id_means_mainnet() {
    let harness = AdapterHarness::new();

    for request_json in [
        r#"{"eth_account": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "chain_id": ""}"#,
        r#"{"address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "chainId": "  "}"#,
    ] {
        let response = harness
            .adapter
            .issue_challenge_json(&harness.session_id, request_json)
            .await
            .unwrap();
        let response: serde_json::Value = serde_json::from_str(&response).unwrap();

        let message = response["message"].as_str().unwrap_or_default();
        assert!(
            message.contains("\nChain ID: 1\n"),
            "request: {request_json}, response: {response}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_issue_challenge_failures_expose_only_code() {
    let harness = AdapterHarness::new();

    for (request_json, expected) in [
        (r#"{}"#, r#"{"error":"missing_address"}"#),
        (r#"{"address": "  "}"#, r#"{"error":"missing_address"}"#),
        (r#"{"address": "0x12"}"#, r#"{"error":"invalid_message"}"#),
        (
            r#"{"address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", "chainId": "mainnet"}"#,
            r#"{"error":"invalid_message"}"#,
        ),
        (r#"not json"#, r#"{"error":"invalid_message"}"#),
    ] {
        assert_eq!(
            harness
                .adapter
                .issue_challenge_json(&harness.session_id, request_json)
                .await
                .unwrap(),
            expected,
            "request: {request_json}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_verify_overrides_claimed_account() {
    let harness = AdapterHarness::new();
    let wallet = SigningKey::from_slice(&[7; 32]).unwrap();
    let wallet_address = Address::from_private_key(&wallet);

    let message = harness.issue(&format!("{wallet_address:#x}")).await;
    let signature = sign(&wallet, &message);

    let response = harness
        .adapter
        .verify_challenge(
            &harness.session_id,
            VerifyChallengeRequestDto {
                eth_message: Some(message),
                eth_signature: Some(signature),
                eth_account: Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string()),
            },
        )
        .await;

    assert_eq!(
        response,
        VerifyChallengeResponseDto::Verified {
            address: wallet_address.to_checksum(None),
            provider_identity_key: format!("{wallet_address:#x}"),
        }
    );
}

#[test_log::test(tokio::test)]
async fn test_verify_json_round_trip() {
    let harness = AdapterHarness::new();
    let wallet = SigningKey::from_slice(&[7; 32]).unwrap();
    let wallet_address = Address::from_private_key(&wallet);

    let message = harness.issue(&format!("{wallet_address:#x}")).await;
    let request_json = serde_json::json!({
        "eth_message": message,
        "eth_signature": sign(&wallet, &message),
    })
    .to_string();

    let response = harness
        .adapter
        .verify_challenge_json(&harness.session_id, &request_json)
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();

    assert_eq!(
        response,
        serde_json::json!({
            "address": wallet_address.to_checksum(None),
            "provider_identity_key": format!("{wallet_address:#x}"),
        })
    );

    // Replay
    assert_eq!(
        harness
            .adapter
            .verify_challenge_json(&harness.session_id, &request_json)
            .await
            .unwrap(),
        r#"{"error":"invalid_nonce"}"#
    );
}

#[test_log::test(tokio::test)]
async fn test_verify_failures_expose_only_code() {
    let harness = AdapterHarness::new();

    for (request_json, expected) in [
        (r#"{"eth_signature": "0x00"}"#, r#"{"error":"missing_message"}"#),
        (r#"{"eth_message": "hello"}"#, r#"{"error":"missing_signature"}"#),
        (
            r#"{"eth_message": "hello", "eth_signature": "0x00"}"#,
            r#"{"error":"invalid_message"}"#,
        ),
        (r#""eth_message""#, r#"{"error":"invalid_message"}"#),
    ] {
        assert_eq!(
            harness
                .adapter
                .verify_challenge_json(&harness.session_id, request_json)
                .await
                .unwrap(),
            expected,
            "request: {request_json}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_internal_errors_are_not_leaked() {
    let mut nonce_repo = MockWeb3AuthNonceRepository::new();
    nonce_repo
        .expect_set_nonce()
        .returning(|_| Err(InternalError::new("connection refused: db.internal:5432").into()));

    let harness = AdapterHarness::with_catalog_builder({
        let mut b = dill::CatalogBuilder::new();
        b.add_value(nonce_repo)
            .bind::<dyn Web3AuthNonceRepository, MockWeb3AuthNonceRepository>();
        b
    });

    let response = harness
        .adapter
        .issue_challenge_json(
            &harness.session_id,
            r#"{"address": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"}"#,
        )
        .await
        .unwrap();

    assert_eq!(response, r#"{"error":"internal_error"}"#);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn sign(key: &SigningKey, text: &str) -> String {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(eip191_hash_message(text).as_slice())
        .unwrap();

    hex::encode_prefixed(Signature::from((signature, recovery_id)).as_bytes())
}

struct AdapterHarness {
    adapter: Arc<Web3WalletAuthAdapter>,
    session_id: SessionId,
}

impl AdapterHarness {
    fn new() -> Self {
        let mut b = dill::CatalogBuilder::new();
        b.add::<InMemoryWeb3AuthNonceRepository>();
        Self::with_catalog_builder(b)
    }

    fn with_catalog_builder(mut b: dill::CatalogBuilder) -> Self {
        b.add_value(Web3AuthConfig::sample())
            .add_value(SystemTimeSourceStub::new_set(
                Utc.with_ymd_and_hms(2050, 3, 1, 10, 0, 0).unwrap(),
            ))
            .bind::<dyn SystemTimeSource, SystemTimeSourceStub>();
        siwe_auth_services::register_dependencies(&mut b);
        siwe_auth_adapter::register_dependencies(&mut b);

        let catalog = b.build();

        Self {
            adapter: catalog.get_one().unwrap(),
            session_id: SessionId::try_new("session-4f1c").unwrap(),
        }
    }

    async fn issue(&self, address: &str) -> String {
        match self
            .adapter
            .issue_challenge(
                &self.session_id,
                IssueChallengeRequestDto {
                    address: Some(address.to_string()),
                    chain_id: None,
                },
            )
            .await
        {
            IssueChallengeResponseDto::Challenge { message } => message,
            IssueChallengeResponseDto::Failure(failure) => panic!("Issue failed: {failure:?}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
