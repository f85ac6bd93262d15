// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use assert_matches::assert_matches;
use chrono::{Duration, TimeZone, Utc};
use indoc::indoc;
use pretty_assertions::assert_eq;
use siwe_auth::*;
use siwe_auth_services::*;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const NONCE: &str = "k3Jq8TzR2mWc5YpHnL7vBx4dQe9sFa6G";

fn relying_party(base_url: &str) -> RelyingParty {
    RelyingParty::from_base_url(&Url::parse(base_url).unwrap()).unwrap()
}

fn request(address: Option<&str>, chain_id: Option<&str>) -> IssueChallengeRequest {
    IssueChallengeRequest {
        address: address.map(str::to_string),
        chain_id: chain_id.map(str::to_string),
    }
}

fn build(
    rp: &RelyingParty,
    statement: Option<&str>,
    request: &IssueChallengeRequest,
) -> Result<Eip4361Message, IssueChallengeError> {
    Eip4361MessageBuilder::new(rp, &Keccak256AddressChecksumProvider)
        .with_statement(statement)
        .build(
            request,
            Eip4361Nonce::try_new(NONCE).unwrap(),
            Utc.with_ymd_and_hms(2050, 3, 1, 10, 0, 0).unwrap() + Duration::milliseconds(750),
            Duration::minutes(5),
        )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_build_and_render() {
    let rp = relying_party("https://forum.example.com/");
    let message = build(
        &rp,
        Some("Sign in to the forum"),
        &request(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), None),
    )
    .unwrap();

    assert_eq!(
        message.to_string(),
        indoc!(
            "
            forum.example.com wants you to sign in with your Ethereum account:
            0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed

            Sign in to the forum

            URI: https://forum.example.com
            Version: 1
            Chain ID: 1
            Nonce: k3Jq8TzR2mWc5YpHnL7vBx4dQe9sFa6G
            Issued At: 2050-03-01T10:00:00Z
            Expiration Time: 2050-03-01T10:05:00Z"
        )
    );
}

#[test]
fn test_build_without_statement() {
    let rp = relying_party("https://forum.example.com:8443/app/");
    let message = build(
        &rp,
        None,
        &request(Some("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), Some("137")),
    )
    .unwrap();

    assert_eq!(
        message.to_string(),
        indoc!(
            "
            forum.example.com:8443 wants you to sign in with your Ethereum account:
            0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed


            URI: https://forum.example.com:8443/app
            Version: 1
            Chain ID: 137
            Nonce: k3Jq8TzR2mWc5YpHnL7vBx4dQe9sFa6G
            Issued At: 2050-03-01T10:00:00Z
            Expiration Time: 2050-03-01T10:05:00Z"
        )
    );
}

#[test]
fn test_empty_statement_is_omitted() {
    let rp = relying_party("https://forum.example.com/");
    let message = build(
        &rp,
        Some(""),
        &request(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), None),
    )
    .unwrap();

    assert_eq!(message.statement, None);
}

#[test]
fn test_round_trip() {
    let rp = relying_party("https://forum.example.com/app");
    let message = build(
        &rp,
        Some("Sign in to the forum"),
        &request(Some("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"), Some("5")),
    )
    .unwrap();

    assert!(message.expiration_time > message.issued_at);
    assert_eq!(Eip4361Message::parse(&message.to_string()).unwrap(), message);
}

#[test]
fn test_address_is_required() {
    let rp = relying_party("https://forum.example.com/");

    assert_matches!(
        build(&rp, None, &request(None, None)),
        Err(IssueChallengeError::MissingAddress(_))
    );
    assert_matches!(
        build(&rp, None, &request(Some("   "), None)),
        Err(IssueChallengeError::MissingAddress(_))
    );
}

#[test]
fn test_malformed_inputs() {
    let rp = relying_party("https://forum.example.com/");

    assert_matches!(
        build(&rp, None, &request(Some("0x1234"), None)),
        Err(IssueChallengeError::InvalidMessage(InvalidMessageError::InvalidAddress(_)))
    );

    for chain_id in ["mainnet", "-1", "0x1", " 1"] {
        assert_matches!(
            build(
                &rp,
                None,
                &request(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), Some(chain_id))
            ),
            Err(IssueChallengeError::InvalidMessage(InvalidMessageError::InvalidChainId { .. })),
            "chain id: {chain_id}"
        );
    }
}

#[test]
fn test_blank_chain_id_defaults_to_mainnet() {
    let rp = relying_party("https://forum.example.com/");

    for chain_id in ["", "   "] {
        let message = build(
            &rp,
            None,
            &request(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), Some(chain_id)),
        )
        .unwrap();

        assert_eq!(message.chain_id.as_ref(), "1", "chain id: {chain_id:?}");
        assert!(message.to_string().contains("\nChain ID: 1\n"));
    }
}

#[test]
fn test_unchecksummed_address_without_provider() {
    let rp = relying_party("https://forum.example.com/");
    let message = Eip4361MessageBuilder::new(&rp, &PassthroughAddressChecksumProvider)
        .build(
            &request(Some("5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"), None),
            Eip4361Nonce::try_new(NONCE).unwrap(),
            Utc.with_ymd_and_hms(2050, 3, 1, 10, 0, 0).unwrap(),
            Duration::minutes(5),
        )
        .unwrap();

    assert_eq!(message.address, "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
