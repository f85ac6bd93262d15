// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use internal_error::InternalError;
use thiserror::Error;

use crate::{SessionId, Web3AuthNonceEntity};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Session-bound storage of challenge nonces: at most one per session.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait Web3AuthNonceRepository: Send + Sync {
    /// Binds the nonce to its session, replacing any previous one
    async fn set_nonce(&self, entity: &Web3AuthNonceEntity) -> Result<(), SetNonceError>;

    /// Reads and clears the session's nonce as one atomic step. Of several
    /// concurrent callers at most one observes the value.
    async fn consume_nonce(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Web3AuthNonceEntity>, ConsumeNonceError>;

    /// Drops bindings whose challenge expired at or before `now`
    async fn cleanup_expired_nonces(
        &self,
        now: DateTime<Utc>,
    ) -> Result<(), CleanupExpiredNoncesError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SetNonceError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ConsumeNonceError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CleanupExpiredNoncesError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
