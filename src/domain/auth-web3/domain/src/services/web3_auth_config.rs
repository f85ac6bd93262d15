// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_CHALLENGE_TTL_SECS: u64 = 5 * 60;
pub const MAX_CHALLENGE_TTL_SECS: u64 = 24 * 60 * 60;

pub const ENV_VAR_SIWE_BASE_URL: &str = "SIWE_BASE_URL";
pub const ENV_VAR_SIWE_STATEMENT: &str = "SIWE_STATEMENT";
pub const ENV_VAR_SIWE_CHALLENGE_TTL_SECS: &str = "SIWE_CHALLENGE_TTL_SECS";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Web3AuthConfig {
    /// Public URL of the relying party. Its host (and non-default port) is the
    /// challenge domain, its path is the base every challenge URI must fall
    /// under.
    pub base_url: Url,

    /// Optional human-readable line shown to the user by the wallet
    #[serde(default)]
    pub statement: Option<String>,

    #[serde(default = "Web3AuthConfig::default_challenge_ttl_secs")]
    pub challenge_ttl_secs: u64,
}

impl Web3AuthConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            statement: None,
            challenge_ttl_secs: DEFAULT_CHALLENGE_TTL_SECS,
        }
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    pub fn with_challenge_ttl_secs(mut self, challenge_ttl_secs: u64) -> Self {
        self.challenge_ttl_secs = challenge_ttl_secs;
        self
    }

    fn default_challenge_ttl_secs() -> u64 {
        DEFAULT_CHALLENGE_TTL_SECS
    }

    pub fn challenge_ttl(&self) -> Duration {
        let secs = self.challenge_ttl_secs.min(MAX_CHALLENGE_TTL_SECS);
        // Bounded above, cannot overflow
        Duration::seconds(i64::try_from(secs).unwrap_or(0))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(statement) = &self.statement
            && (statement.is_empty() || statement.contains(['\n', '\r']))
        {
            return Err(ConfigError::InvalidValue {
                name: ENV_VAR_SIWE_STATEMENT,
                reason: "statement must be a single non-empty line".to_string(),
            });
        }

        if !(1..=MAX_CHALLENGE_TTL_SECS).contains(&self.challenge_ttl_secs) {
            return Err(ConfigError::InvalidValue {
                name: ENV_VAR_SIWE_CHALLENGE_TTL_SECS,
                reason: format!("must be within 1..={MAX_CHALLENGE_TTL_SECS} seconds"),
            });
        }

        Ok(())
    }

    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Reads the settings through an arbitrary variable lookup and validates
    /// the result
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_blank(ENV_VAR_SIWE_BASE_URL)
            .ok_or(ConfigError::MissingValue {
                name: ENV_VAR_SIWE_BASE_URL,
            })?;
        let base_url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidValue {
            name: ENV_VAR_SIWE_BASE_URL,
            reason: e.to_string(),
        })?;

        let mut config = Self::new(base_url);
        config.statement = non_blank(ENV_VAR_SIWE_STATEMENT);

        if let Some(ttl) = non_blank(ENV_VAR_SIWE_CHALLENGE_TTL_SECS) {
            config.challenge_ttl_secs =
                ttl.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        name: ENV_VAR_SIWE_CHALLENGE_TTL_SECS,
                        reason: e.to_string(),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    #[cfg(any(feature = "testing", test))]
    pub fn sample() -> Self {
        Self::new(Url::parse("https://forum.example.com/").unwrap())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting {name}")]
    MissingValue { name: &'static str },

    #[error("Invalid setting {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
