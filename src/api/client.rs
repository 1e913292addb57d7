// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_json::Value;
use url::Url;

use crate::error::{ConfigError, FetchError};
use crate::http::HttpClient;

use super::types::{ShowDetail, ShowSummary};

/// Default location of the podcast API
pub const DEFAULT_API_BASE: &str = "https://podcast-api.netlify.app";

/// Typed access to the podcast API's collection and detail endpoints
#[derive(Clone)]
pub struct PodcastApi<C> {
    client: C,
    base: Url,
}

impl<C: HttpClient> PodcastApi<C> {
    /// Create an API handle rooted at `base`
    ///
    /// The base must be an http(s) URL; a trailing slash is added if missing
    /// so that endpoint paths are appended rather than replacing the last
    /// path segment.
    pub fn new(client: C, mut base: Url) -> Result<Self, ConfigError> {
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedScheme(base.to_string()));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { client, base })
    }

    /// The base URL all endpoints are resolved against
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The underlying HTTP client
    pub fn http_client(&self) -> &C {
        &self.client
    }

    /// URL of the collection endpoint
    pub fn shows_url(&self) -> Url {
        self.base.clone()
    }

    /// URL of the detail endpoint for a single show
    pub fn show_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("id").push(id);
        }
        url
    }

    /// Fetch the list of all shows
    ///
    /// A response body that is not a JSON array yields an empty list.
    pub async fn fetch_shows(&self) -> Result<Vec<ShowSummary>, FetchError> {
        let url = self.shows_url();
        let value = self.get_json(&url).await?;

        if !value.is_array() {
            tracing::warn!("Collection response from {} is not an array, treating as empty", url);
            return Ok(Vec::new());
        }

        let shows: Vec<ShowSummary> =
            serde_json::from_value(value).map_err(|e| FetchError::ParseFailed {
                url: url.to_string(),
                source: e,
            })?;

        tracing::debug!("Fetched {} shows from {}", shows.len(), url);
        Ok(shows)
    }

    /// Fetch the full detail of a single show
    pub async fn fetch_show(&self, id: &str) -> Result<ShowDetail, FetchError> {
        let url = self.show_url(id);
        let value = self.get_json(&url).await?;

        let detail: ShowDetail =
            serde_json::from_value(value).map_err(|e| FetchError::ParseFailed {
                url: url.to_string(),
                source: e,
            })?;

        tracing::debug!(
            "Fetched show '{}' with {} seasons from {}",
            detail.title,
            detail.seasons.len(),
            url
        );
        Ok(detail)
    }

    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .await
            .map_err(|e| FetchError::NetworkError {
                url: url.to_string(),
                source: e,
            })?;

        if !response.is_success() {
            return Err(FetchError::FetchFailed {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| FetchError::ParseFailed {
            url: url.to_string(),
            source: e,
        })
    }
}
