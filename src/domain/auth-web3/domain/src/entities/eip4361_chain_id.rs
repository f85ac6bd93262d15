// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_EIP_4361_CHAIN_ID: &str = "1";

static EIP_4361_CHAIN_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").unwrap());

/// EIP-155 chain id, kept in its decimal wire form
#[nutype::nutype(
    validate(regex = EIP_4361_CHAIN_ID_REGEX),
    derive(AsRef, Clone, Debug, Display, Eq, PartialEq, TryFrom)
)]
pub struct Eip4361ChainId(String);

impl Eip4361ChainId {
    pub fn mainnet() -> Self {
        Self::try_new(DEFAULT_EIP_4361_CHAIN_ID).unwrap()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
