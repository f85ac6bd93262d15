// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use siwe_auth::*;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Checks a parsed challenge against what the relying party knows to be true.
///
/// Checks run in a fixed order and the first failure wins:
/// domain, URI, nonce. Expiration is judged by the signature verifier.
pub struct Eip4361BindingValidator<'a> {
    relying_party: &'a RelyingParty,
}

impl<'a> Eip4361BindingValidator<'a> {
    pub fn new(relying_party: &'a RelyingParty) -> Self {
        Self { relying_party }
    }

    pub fn validate(
        &self,
        message: &Eip4361Message,
        session_nonce: Option<&Eip4361Nonce>,
    ) -> Result<(), VerifyChallengeError> {
        self.validate_domain(message)?;
        self.validate_uri(message)?;
        Self::validate_nonce(message, session_nonce)?;
        Ok(())
    }

    pub fn validate_domain(&self, message: &Eip4361Message) -> Result<(), InvalidDomainError> {
        let expected = self.relying_party.domain();

        if message.domain.eq_ignore_ascii_case(expected) {
            Ok(())
        } else {
            Err(InvalidDomainError::Mismatch {
                expected: expected.to_string(),
                actual: message.domain.clone(),
            })
        }
    }

    pub fn validate_uri(&self, message: &Eip4361Message) -> Result<(), InvalidUriError> {
        let reject = |reason: &str| InvalidUriError {
            uri: message.uri.clone(),
            expected: self.relying_party.uri(),
            reason: reason.to_string(),
        };

        let uri = Url::parse(&message.uri).map_err(|e| reject(&e.to_string()))?;
        let origin = self.relying_party.origin();

        if !uri.username().is_empty() || uri.password().is_some() {
            return Err(reject("credentials are not allowed"));
        }
        if uri.scheme() != origin.scheme() {
            return Err(reject("scheme differs"));
        }
        if uri.host_str() != origin.host_str() {
            return Err(reject("host differs"));
        }
        if uri.port_or_known_default() != origin.port_or_known_default() {
            return Err(reject("port differs"));
        }
        if !Self::is_path_within(uri.path(), self.relying_party.base_path()) {
            return Err(reject("path is outside of the base path"));
        }

        Ok(())
    }

    // An empty (or root) path addresses the origin itself and is accepted
    fn is_path_within(path: &str, base_path: &str) -> bool {
        if base_path.is_empty() || path.is_empty() || path == "/" {
            return true;
        }

        match path.strip_prefix(base_path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    pub fn validate_nonce(
        message: &Eip4361Message,
        session_nonce: Option<&Eip4361Nonce>,
    ) -> Result<(), InvalidNonceError> {
        match session_nonce {
            None => Err(InvalidNonceError::Absent),
            Some(nonce) if *nonce == message.nonce => Ok(()),
            Some(_) => Err(InvalidNonceError::Mismatch),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
