// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod address_checksum_provider;
mod web3_auth_config;
mod web3_auth_errors;
mod web3_challenge_service;
mod web3_signature_verifier;

pub use address_checksum_provider::*;
pub use web3_auth_config::*;
pub use web3_auth_errors::*;
pub use web3_challenge_service::*;
pub use web3_signature_verifier::*;
