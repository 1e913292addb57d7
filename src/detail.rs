// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{PodcastApi, Season, ShowDetail};
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// State of the currently requested show detail
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    /// No show has been requested
    #[default]
    Idle,
    /// The detail for `show_id` is being fetched
    Loading { show_id: String },
    /// The detail has been loaded
    Ready(Box<ShowDetail>),
    /// Loading `show_id` failed with the given message
    Failed { show_id: String, message: String },
}

/// Handle for an in-flight detail request
///
/// Only the ticket of the most recent request is accepted by
/// [`ShowDetailLoader::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    show_id: String,
}

impl DetailTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn show_id(&self) -> &str {
        &self.show_id
    }
}

/// Loads the full detail of one show at a time, ignoring stale responses
#[derive(Debug, Clone, Default)]
pub struct ShowDetailLoader {
    state: DetailState,
    generation: u64,
    selected_season: usize,
}

impl ShowDetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading { .. })
    }

    /// The loaded show, if the latest request succeeded
    pub fn detail(&self) -> Option<&ShowDetail> {
        match &self.state {
            DetailState::Ready(detail) => Some(&**detail),
            _ => None,
        }
    }

    /// Error message of the latest request, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Id of the show most recently requested
    pub fn show_id(&self) -> Option<&str> {
        match &self.state {
            DetailState::Idle => None,
            DetailState::Loading { show_id } | DetailState::Failed { show_id, .. } => {
                Some(show_id.as_str())
            }
            DetailState::Ready(detail) => Some(detail.id.as_str()),
        }
    }

    /// Index of the selected season within the loaded show
    pub fn selected_season_index(&self) -> usize {
        self.selected_season
    }

    /// The selected season of the loaded show
    pub fn selected_season(&self) -> Option<&Season> {
        self.detail()
            .and_then(|detail| detail.seasons.get(self.selected_season))
    }

    /// Select a season by index; out-of-range indices are rejected
    pub fn select_season(&mut self, index: usize) -> bool {
        let season_count = self.detail().map_or(0, |detail| detail.seasons.len());
        if index < season_count {
            self.selected_season = index;
            true
        } else {
            false
        }
    }

    /// Start a request for `show_id`, superseding any request in flight
    ///
    /// Any previously loaded detail is dropped.
    pub fn begin(&mut self, show_id: &str) -> DetailTicket {
        self.generation += 1;
        self.state = DetailState::Loading {
            show_id: show_id.to_string(),
        };
        self.selected_season = 0;

        DetailTicket {
            generation: self.generation,
            show_id: show_id.to_string(),
        }
    }

    /// Apply the outcome of a request
    ///
    /// Returns `false` and leaves the state untouched if a newer request has
    /// been started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: &DetailTicket,
        result: Result<ShowDetail, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Ignoring stale response for show {} (generation {}, latest {})",
                ticket.show_id,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.selected_season = 0;
        self.state = match result {
            Ok(detail) => DetailState::Ready(Box::new(detail)),
            Err(e) => DetailState::Failed {
                show_id: ticket.show_id.clone(),
                message: e.to_string(),
            },
        };
        true
    }

    /// Fetch and apply the detail for `show_id`
    ///
    /// Failures are recorded in the loader rather than returned.
    pub async fn load<C: HttpClient>(
        &mut self,
        api: &PodcastApi<C>,
        show_id: &str,
        reporter: &SharedProgressReporter,
    ) {
        let ticket = self.begin(show_id);
        reporter.report(ProgressEvent::FetchingShow {
            generation: ticket.generation,
            show_id: show_id.to_string(),
            url: api.show_url(show_id).to_string(),
        });

        let result = api.fetch_show(show_id).await;
        self.finish(&ticket, result, reporter);
    }

    /// Apply a result and report what happened to it
    pub fn finish(
        &mut self,
        ticket: &DetailTicket,
        result: Result<ShowDetail, FetchError>,
        reporter: &SharedProgressReporter,
    ) -> bool {
        let error = result.as_ref().err().map(ToString::to_string);

        if !self.complete(ticket, result) {
            reporter.report(ProgressEvent::StaleResponseIgnored {
                generation: ticket.generation,
                latest_generation: self.generation,
                show_id: ticket.show_id.clone(),
            });
            return false;
        }

        match (error, self.detail()) {
            (Some(error), _) => {
                tracing::warn!("Failed to load show {}: {}", ticket.show_id, error);
                reporter.report(ProgressEvent::ShowFailed {
                    generation: ticket.generation,
                    show_id: ticket.show_id.clone(),
                    error,
                });
            }
            (None, Some(detail)) => {
                tracing::info!(
                    "Loaded show '{}' ({} seasons)",
                    detail.title,
                    detail.seasons.len()
                );
                reporter.report(ProgressEvent::ShowLoaded {
                    generation: ticket.generation,
                    show_title: detail.title.clone(),
                    season_count: detail.seasons.len(),
                    episode_count: detail.episode_count(),
                });
            }
            (None, None) => {}
        }
        true
    }
}
