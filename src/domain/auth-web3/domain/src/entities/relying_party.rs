// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The service's own identity as seen in challenges: derived once from its
/// configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelyingParty {
    domain: String,
    origin: Url,
    base_path: String,
}

impl RelyingParty {
    pub fn from_base_url(base_url: &Url) -> Result<Self, UnusableBaseUrlError> {
        let unusable = || UnusableBaseUrlError {
            base_url: base_url.to_string(),
        };

        if base_url.cannot_be_a_base() {
            return Err(unusable());
        }

        let host = base_url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(unusable)?;

        let domain = match base_url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let mut origin = base_url.clone();
        origin.set_path("");
        origin.set_query(None);
        origin.set_fragment(None);

        Ok(Self {
            domain,
            origin,
            base_path: base_url.path().trim_end_matches('/').to_string(),
        })
    }

    /// `host[:port]` without scheme
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Path prefix under which the service lives, without a trailing slash;
    /// empty when the service is mounted at the root
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// URI placed into issued challenges
    pub fn uri(&self) -> String {
        format!(
            "{}{}",
            self.origin.as_str().trim_end_matches('/'),
            self.base_path
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Base URL '{base_url}' has no usable host")]
pub struct UnusableBaseUrlError {
    pub base_url: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
