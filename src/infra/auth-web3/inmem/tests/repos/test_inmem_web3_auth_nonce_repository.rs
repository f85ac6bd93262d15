// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::{Catalog, CatalogBuilder};
use siwe_auth_inmem::InMemoryWeb3AuthNonceRepository;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_set_and_consume_nonce() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_set_and_consume_nonce(&harness.catalog).await;
}

#[test_log::test(tokio::test)]
async fn test_consume_absent_nonce() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_consume_absent_nonce(&harness.catalog).await;
}

#[test_log::test(tokio::test)]
async fn test_set_nonce_replaces_previous() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_set_nonce_replaces_previous(&harness.catalog).await;
}

#[test_log::test(tokio::test)]
async fn test_nonces_are_isolated_by_session() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_nonces_are_isolated_by_session(&harness.catalog).await;
}

#[test_log::test(tokio::test)]
async fn test_concurrent_consume_observed_once() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_concurrent_consume_observed_once(&harness.catalog).await;
}

#[test_log::test(tokio::test)]
async fn test_cleanup_expired_nonces() {
    let harness = InMemoryWeb3AuthNonceRepositoryHarness::new();
    siwe_auth_repo_tests::test_cleanup_expired_nonces(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct InMemoryWeb3AuthNonceRepositoryHarness {
    catalog: Catalog,
}

impl InMemoryWeb3AuthNonceRepositoryHarness {
    pub fn new() -> Self {
        let mut catalog_builder = CatalogBuilder::new();
        catalog_builder.add::<InMemoryWeb3AuthNonceRepository>();

        Self {
            catalog: catalog_builder.build(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
