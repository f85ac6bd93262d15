// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::OsRng;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Generates a random `[A-Za-z0-9]` string drawn from the operating system
/// CSPRNG
pub fn get_random_string(len: usize) -> String {
    Alphanumeric.sample_string(&mut OsRng, len)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
