// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use url::Url;

use crate::api::{DEFAULT_API_BASE, PodcastApi};
use crate::error::ConfigError;
use crate::http::ReqwestClient;

/// Settings for talking to the podcast API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the podcast API
    pub api_base: Url,
    /// Per-request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
}

impl Config {
    /// Build a configuration from a base URL string and optional timeout
    pub fn new(api_base: &str, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let api_base = Url::parse(api_base.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            value: api_base.to_string(),
            source: e,
        })?;

        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(api_base.to_string()));
        }

        Ok(Self { api_base, timeout })
    }

    /// Create an API handle backed by reqwest using these settings
    pub fn build_api(&self) -> Result<PodcastApi<ReqwestClient>, ConfigError> {
        let client = match self.timeout {
            Some(timeout) => ReqwestClient::with_timeout(timeout)?,
            None => ReqwestClient::new(),
        };
        PodcastApi::new(client, self.api_base.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("valid default API URL"),
            timeout: None,
        }
    }
}
