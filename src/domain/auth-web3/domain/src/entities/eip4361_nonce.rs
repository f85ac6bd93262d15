// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use random_strings::get_random_string;
use regex::Regex;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// 32 alphanumeric symbols carry ~190 bits of entropy
pub const EIP_4361_NONCE_LENGTH: usize = 32;

static EIP_4361_NONCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]{8,}$").unwrap());

#[nutype::nutype(
    validate(regex = EIP_4361_NONCE_REGEX),
    derive(AsRef, Clone, Debug, Display, Eq, PartialEq, TryFrom)
)]
pub struct Eip4361Nonce(String);

impl Eip4361Nonce {
    pub fn generate() -> Self {
        let value = get_random_string(EIP_4361_NONCE_LENGTH);

        Self::try_new(value).expect("Invalid nonce generated")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
