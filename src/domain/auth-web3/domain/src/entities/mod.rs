// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod eip4361_chain_id;
mod eip4361_message;
mod eip4361_message_parser;
mod eip4361_nonce;
mod evm_wallet_address;
mod relying_party;
mod session_id;
mod verified_identity;
mod web3_auth_nonce_entity;

pub use eip4361_chain_id::*;
pub use eip4361_message::*;
pub use eip4361_message_parser::*;
pub use eip4361_nonce::*;
pub use evm_wallet_address::*;
pub use relying_party::*;
pub use session_id::*;
pub use verified_identity::*;
pub use web3_auth_nonce_entity::*;
