// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::{Eip4361Nonce, SessionId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The single outstanding challenge nonce of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3AuthNonceEntity {
    pub session_id: SessionId,
    pub nonce: Eip4361Nonce,
    pub expires_at: DateTime<Utc>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
