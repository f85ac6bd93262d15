// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{DateTime, Duration, TimeZone, Utc};
use dill::Catalog;
use pretty_assertions::assert_eq;
use siwe_auth::{Eip4361Nonce, SessionId, Web3AuthNonceEntity, Web3AuthNonceRepository};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2050, 3, 1, 10, 0, 0).unwrap()
}

fn session(id: &str) -> SessionId {
    SessionId::try_new(id).unwrap()
}

fn new_entity(session_id: &str, expires_at: DateTime<Utc>) -> Web3AuthNonceEntity {
    Web3AuthNonceEntity {
        session_id: session(session_id),
        nonce: Eip4361Nonce::generate(),
        expires_at,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_set_and_consume_nonce(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();
    let entity = new_entity("session-1", t0() + Duration::minutes(5));

    repo.set_nonce(&entity).await.unwrap();

    assert_eq!(
        repo.consume_nonce(&entity.session_id).await.unwrap(),
        Some(entity.clone())
    );
    // Single use
    assert_eq!(repo.consume_nonce(&entity.session_id).await.unwrap(), None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_consume_absent_nonce(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();

    assert_matches!(repo.consume_nonce(&session("never-issued")).await, Ok(None));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_set_nonce_replaces_previous(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();

    let first = new_entity("session-1", t0() + Duration::minutes(5));
    let second = new_entity("session-1", t0() + Duration::minutes(7));
    assert_ne!(first.nonce, second.nonce);

    repo.set_nonce(&first).await.unwrap();
    repo.set_nonce(&second).await.unwrap();

    assert_eq!(
        repo.consume_nonce(&first.session_id).await.unwrap(),
        Some(second)
    );
    assert_eq!(repo.consume_nonce(&first.session_id).await.unwrap(), None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_nonces_are_isolated_by_session(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();

    let alice = new_entity("session-alice", t0() + Duration::minutes(5));
    let bob = new_entity("session-bob", t0() + Duration::minutes(5));

    repo.set_nonce(&alice).await.unwrap();
    repo.set_nonce(&bob).await.unwrap();

    assert_eq!(
        repo.consume_nonce(&alice.session_id).await.unwrap(),
        Some(alice)
    );
    assert_eq!(
        repo.consume_nonce(&bob.session_id).await.unwrap(),
        Some(bob)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_concurrent_consume_observed_once(catalog: &Catalog) {
    const CONSUMERS: usize = 16;

    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();
    let entity = new_entity("session-1", t0() + Duration::minutes(5));
    repo.set_nonce(&entity).await.unwrap();

    let mut consumers = tokio::task::JoinSet::new();
    for _ in 0..CONSUMERS {
        let repo = Arc::clone(&repo);
        let session_id = entity.session_id.clone();
        consumers.spawn(async move { repo.consume_nonce(&session_id).await.unwrap() });
    }

    let mut observed = Vec::new();
    while let Some(res) = consumers.join_next().await {
        if let Some(consumed) = res.unwrap() {
            observed.push(consumed);
        }
    }

    assert_eq!(observed, vec![entity]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_cleanup_expired_nonces(catalog: &Catalog) {
    let repo = catalog.get_one::<dyn Web3AuthNonceRepository>().unwrap();

    let expired = new_entity("session-expired", t0() - Duration::seconds(1));
    let expiring_now = new_entity("session-expiring-now", t0());
    let live = new_entity("session-live", t0() + Duration::seconds(1));

    for entity in [&expired, &expiring_now, &live] {
        repo.set_nonce(entity).await.unwrap();
    }

    repo.cleanup_expired_nonces(t0()).await.unwrap();

    assert_eq!(repo.consume_nonce(&expired.session_id).await.unwrap(), None);
    assert_eq!(
        repo.consume_nonce(&expiring_now.session_id).await.unwrap(),
        None
    );
    assert_eq!(
        repo.consume_nonce(&live.session_id).await.unwrap(),
        Some(live)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
