// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dill::{Singleton, component, interface, scope};
use siwe_auth::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWeb3AuthNonceRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    nonces_by_session: HashMap<SessionId, Web3AuthNonceEntity>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn Web3AuthNonceRepository)]
#[scope(Singleton)]
impl InMemoryWeb3AuthNonceRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl Web3AuthNonceRepository for InMemoryWeb3AuthNonceRepository {
    async fn set_nonce(&self, entity: &Web3AuthNonceEntity) -> Result<(), SetNonceError> {
        let mut guard = self.state.lock().unwrap();

        guard
            .nonces_by_session
            .insert(entity.session_id.clone(), entity.clone());

        Ok(())
    }

    async fn consume_nonce(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Web3AuthNonceEntity>, ConsumeNonceError> {
        let mut guard = self.state.lock().unwrap();

        Ok(guard.nonces_by_session.remove(session_id))
    }

    async fn cleanup_expired_nonces(
        &self,
        now: DateTime<Utc>,
    ) -> Result<(), CleanupExpiredNoncesError> {
        let mut guard = self.state.lock().unwrap();

        guard
            .nonces_by_session
            .retain(|_, entity| entity.expires_at > now);

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
