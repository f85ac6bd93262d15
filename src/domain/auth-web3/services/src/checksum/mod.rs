// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod alloy_address_checksum_provider;
mod keccak256_address_checksum_provider;
mod passthrough_address_checksum_provider;
mod selected_address_checksum_provider;

pub use alloy_address_checksum_provider::*;
pub use keccak256_address_checksum_provider::*;
pub use passthrough_address_checksum_provider::*;
pub use selected_address_checksum_provider::*;
