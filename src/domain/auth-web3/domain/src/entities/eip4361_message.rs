// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Eip4361ChainId, Eip4361Nonce};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const EIP_4361_VERSION: &str = "1";

pub(crate) const HEADER_SUFFIX: &str = " wants you to sign in with your Ethereum account:";
pub(crate) const URI_TAG: &str = "URI: ";
pub(crate) const VERSION_TAG: &str = "Version: ";
pub(crate) const CHAIN_ID_TAG: &str = "Chain ID: ";
pub(crate) const NONCE_TAG: &str = "Nonce: ";
pub(crate) const ISSUED_AT_TAG: &str = "Issued At: ";
pub(crate) const EXPIRATION_TIME_TAG: &str = "Expiration Time: ";
pub(crate) const NOT_BEFORE_TAG: &str = "Not Before: ";
pub(crate) const REQUEST_ID_TAG: &str = "Request ID: ";
pub(crate) const RESOURCES_TAG: &str = "Resources:";
pub(crate) const RESOURCE_ITEM_PREFIX: &str = "- ";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Sign-In with Ethereum challenge.
///
/// The `Display` implementation renders the canonical plaintext that wallets
/// sign:
///
/// ```text
/// <domain> wants you to sign in with your Ethereum account:
/// <address>
///
/// <statement>
///
/// URI: <uri>
/// Version: 1
/// Chain ID: <chain id>
/// Nonce: <nonce>
/// Issued At: <timestamp>
/// Expiration Time: <timestamp>
/// ```
///
/// Without a statement the statement line and its trailing blank line are
/// replaced by a single blank line. `Not Before`, `Request ID` and
/// `Resources` follow `Expiration Time` when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip4361Message {
    /// `host[:port]` of the relying party, no scheme
    pub domain: String,
    /// Claimed signer, `0x` followed by 40 hex digits in the case it was issued
    pub address: String,
    pub statement: Option<String>,
    pub uri: String,
    pub version: String,
    pub chain_id: Eip4361ChainId,
    pub nonce: Eip4361Nonce,
    pub issued_at: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
    pub not_before: Option<DateTime<Utc>>,
    pub request_id: Option<String>,
    pub resources: Vec<String>,
}

impl Eip4361Message {
    /// Text that is expected to be covered by the wallet signature
    pub fn canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Eip4361Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{HEADER_SUFFIX}", self.domain)?;
        writeln!(f, "{}", self.address)?;
        writeln!(f)?;
        if let Some(statement) = &self.statement {
            writeln!(f, "{statement}")?;
        }
        writeln!(f)?;

        writeln!(f, "{URI_TAG}{}", self.uri)?;
        writeln!(f, "{VERSION_TAG}{}", self.version)?;
        writeln!(f, "{CHAIN_ID_TAG}{}", self.chain_id)?;
        writeln!(f, "{NONCE_TAG}{}", self.nonce)?;
        write!(f, "{ISSUED_AT_TAG}{}", format_eip4361_timestamp(&self.issued_at))?;
        write!(
            f,
            "\n{EXPIRATION_TIME_TAG}{}",
            format_eip4361_timestamp(&self.expiration_time)
        )?;

        if let Some(not_before) = &self.not_before {
            write!(f, "\n{NOT_BEFORE_TAG}{}", format_eip4361_timestamp(not_before))?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, "\n{REQUEST_ID_TAG}{request_id}")?;
        }
        if !self.resources.is_empty() {
            write!(f, "\n{RESOURCES_TAG}")?;
            for resource in &self.resources {
                write!(f, "\n{RESOURCE_ITEM_PREFIX}{resource}")?;
            }
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// RFC 3339 in UTC with a trailing `Z`; sub-second digits only when non-zero
pub fn format_eip4361_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Treats CRLF and lone CR as LF, so that transport-level line ending rewrites
/// do not alter the parsed message
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
