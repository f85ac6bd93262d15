// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::eip4361_message::*;
use crate::{Eip4361ChainId, Eip4361Nonce, NotAnAddressError, strip_evm_address_prefix};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Eip4361Message {
    /// Reconstructs a challenge from its plaintext form. The input must follow
    /// the canonical layout line by line; anything else is rejected.
    pub fn parse(text: &str) -> Result<Self, Eip4361ParseError> {
        let normalized = normalize_line_endings(text);
        let normalized = normalized.strip_suffix('\n').unwrap_or(&normalized);

        if normalized.trim().is_empty() {
            return Err(Eip4361ParseError::Empty);
        }

        let mut cursor = LineCursor::new(normalized);

        // Preamble
        let header = cursor.next_line("header")?;
        let domain = header
            .strip_suffix(HEADER_SUFFIX)
            .filter(|d| !d.is_empty() && !d.contains(char::is_whitespace))
            .ok_or(Eip4361ParseError::InvalidHeader)?;

        let address = cursor.next_line("address")?;
        if !address.starts_with("0x") {
            return Err(NotAnAddressError {
                value: address.to_string(),
            }
            .into());
        }
        strip_evm_address_prefix(address)?;

        cursor.expect_blank_line()?;

        let statement = match cursor.peek() {
            Some("") => {
                cursor.advance();
                None
            }
            Some(line) if !line.starts_with(URI_TAG) => {
                cursor.advance();
                cursor.expect_blank_line()?;
                Some(line.to_string())
            }
            Some(_) => return Err(cursor.unexpected_line()),
            None => return Err(Eip4361ParseError::MissingLine("statement")),
        };

        // Fields
        let uri = cursor.tagged_line(URI_TAG, "URI")?;
        if uri.is_empty() {
            return Err(Eip4361ParseError::invalid_field("URI", "value is empty"));
        }

        let version = cursor.tagged_line(VERSION_TAG, "Version")?;
        if version != EIP_4361_VERSION {
            return Err(Eip4361ParseError::UnsupportedVersion(version.to_string()));
        }

        let chain_id = Eip4361ChainId::try_new(cursor.tagged_line(CHAIN_ID_TAG, "Chain ID")?)
            .map_err(|e| Eip4361ParseError::invalid_field("Chain ID", e.to_string()))?;

        let nonce = Eip4361Nonce::try_new(cursor.tagged_line(NONCE_TAG, "Nonce")?)
            .map_err(|e| Eip4361ParseError::invalid_field("Nonce", e.to_string()))?;

        let issued_at = parse_timestamp(
            cursor.tagged_line(ISSUED_AT_TAG, "Issued At")?,
            "Issued At",
        )?;

        let expiration_time = parse_timestamp(
            cursor.tagged_line(EXPIRATION_TIME_TAG, "Expiration Time")?,
            "Expiration Time",
        )?;
        if expiration_time <= issued_at {
            return Err(Eip4361ParseError::invalid_field(
                "Expiration Time",
                "must be after Issued At",
            ));
        }

        // Optional trailer
        let not_before = cursor
            .optional_tagged_line(NOT_BEFORE_TAG)
            .map(|value| parse_timestamp(value, "Not Before"))
            .transpose()?;

        let request_id = cursor
            .optional_tagged_line(REQUEST_ID_TAG)
            .map(ToString::to_string);

        let mut resources = Vec::new();
        if cursor.peek() == Some(RESOURCES_TAG) {
            cursor.advance();
            while let Some(resource) = cursor.optional_tagged_line(RESOURCE_ITEM_PREFIX) {
                resources.push(resource.to_string());
            }
        }

        if cursor.peek().is_some() {
            return Err(cursor.unexpected_line());
        }

        Ok(Self {
            domain: domain.to_string(),
            address: address.to_string(),
            statement,
            uri: uri.to_string(),
            version: version.to_string(),
            chain_id,
            nonce,
            issued_at,
            expiration_time,
            not_before,
            request_id,
            resources,
        })
    }
}

impl FromStr for Eip4361Message {
    type Err = Eip4361ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Only the canonical rendering is accepted, otherwise the text re-derived for
/// signature checking would differ from the one that was signed
fn parse_timestamp(value: &str, field: &'static str) -> Result<DateTime<Utc>, Eip4361ParseError> {
    let t = DateTime::parse_from_rfc3339(value)
        .map_err(|e| Eip4361ParseError::invalid_field(field, e.to_string()))?
        .with_timezone(&Utc);

    if format_eip4361_timestamp(&t) != value {
        return Err(Eip4361ParseError::invalid_field(
            field,
            format!("'{value}' is not a canonical UTC timestamp"),
        ));
    }

    Ok(t)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn next_line(&mut self, what: &'static str) -> Result<&'a str, Eip4361ParseError> {
        let line = self.peek().ok_or(Eip4361ParseError::MissingLine(what))?;
        self.advance();
        Ok(line)
    }

    fn expect_blank_line(&mut self) -> Result<(), Eip4361ParseError> {
        match self.peek() {
            Some("") => {
                self.advance();
                Ok(())
            }
            Some(_) => Err(self.unexpected_line()),
            None => Err(Eip4361ParseError::MissingLine("blank line")),
        }
    }

    fn tagged_line(
        &mut self,
        tag: &'static str,
        what: &'static str,
    ) -> Result<&'a str, Eip4361ParseError> {
        match self.peek() {
            Some(line) => match line.strip_prefix(tag) {
                Some(value) => {
                    self.advance();
                    Ok(value)
                }
                None => Err(Eip4361ParseError::MissingLine(what)),
            },
            None => Err(Eip4361ParseError::MissingLine(what)),
        }
    }

    fn optional_tagged_line(&mut self, tag: &'static str) -> Option<&'a str> {
        let value = self.peek()?.strip_prefix(tag)?;
        self.advance();
        Some(value)
    }

    fn unexpected_line(&self) -> Eip4361ParseError {
        Eip4361ParseError::UnexpectedLine {
            line_no: self.position + 1,
            line: self.peek().unwrap_or_default().to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Eip4361ParseError {
    #[error("Message is empty")]
    Empty,

    #[error("Missing line: {0}")]
    MissingLine(&'static str),

    #[error("Invalid header line")]
    InvalidHeader,

    #[error(transparent)]
    InvalidAddress(#[from] NotAnAddressError),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error("Unexpected line {line_no}: '{line}'")]
    UnexpectedLine { line_no: usize, line: String },
}

impl Eip4361ParseError {
    fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
