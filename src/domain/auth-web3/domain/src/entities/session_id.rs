// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Identifier of the hosting application's session; the nonce is bound to it
#[nutype::nutype(
    sanitize(trim),
    validate(not_empty),
    derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Hash, TryFrom)
)]
pub struct SessionId(String);
