// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod checksum;
mod dependencies;
mod eip191_signature_verifier;
mod eip4361_binding_validator;
mod eip4361_message_builder;
mod web3_challenge_service_impl;

pub use checksum::*;
pub use dependencies::*;
pub use eip191_signature_verifier::*;
pub use eip4361_binding_validator::*;
pub use eip4361_message_builder::*;
pub use web3_challenge_service_impl::*;
