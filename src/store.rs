// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{PodcastApi, ShowSummary};
use crate::filter::{FilterState, SortOption, apply_filters};
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Lifecycle of the show collection load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been requested yet
    #[default]
    Idle,
    /// The collection request is in flight
    Loading,
    /// The collection has been loaded
    Ready,
    /// The load failed with the given message
    Failed(String),
}

/// Holds the fetched show list, the filter state and the derived view
///
/// The derived list is recomputed from the unmodified full list after every
/// transition that touches the list or any filter field, so it is always
/// `apply_filters(shows, filter)`.
#[derive(Debug, Clone, Default)]
pub struct PodcastStore {
    shows: Vec<ShowSummary>,
    visible: Vec<ShowSummary>,
    filter: FilterState,
    load_state: LoadState,
}

impl PodcastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All shows as returned by the API, unfiltered
    pub fn shows(&self) -> &[ShowSummary] {
        &self.shows
    }

    /// Shows after search, genre filter and sorting have been applied
    pub fn visible(&self) -> &[ShowSummary] {
        &self.visible
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Error message of a failed load
    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Look up a show in the full list by id
    pub fn find(&self, id: &str) -> Option<&ShowSummary> {
        self.shows.iter().find(|show| show.id == id)
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.filter.search_text = search_text.into();
        self.recompute();
    }

    pub fn set_genre_filter(&mut self, genre_filter: Option<u32>) {
        self.filter.genre_filter = genre_filter;
        self.recompute();
    }

    pub fn set_sort_option(&mut self, sort_option: SortOption) {
        self.filter.sort_option = sort_option;
        self.recompute();
    }

    /// Replace the whole filter state at once
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.recompute();
    }

    /// Mark the collection load as started
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Store a successfully loaded collection as the authoritative list
    pub fn load_succeeded(&mut self, shows: Vec<ShowSummary>) {
        self.shows = shows;
        self.load_state = LoadState::Ready;
        self.recompute();
    }

    /// Record a failed load; both lists are emptied
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.shows.clear();
        self.load_state = LoadState::Failed(message.into());
        self.recompute();
    }

    /// Fetch the show collection and apply the result
    ///
    /// Failures are recorded in the store rather than returned; check
    /// [`PodcastStore::error`] afterwards.
    pub async fn load<C: HttpClient>(
        &mut self,
        api: &PodcastApi<C>,
        reporter: &SharedProgressReporter,
    ) {
        self.begin_load();
        reporter.report(ProgressEvent::FetchingShows {
            url: api.shows_url().to_string(),
        });

        match api.fetch_shows().await {
            Ok(shows) => {
                tracing::info!("Loaded {} shows", shows.len());
                reporter.report(ProgressEvent::ShowsLoaded { count: shows.len() });
                self.load_succeeded(shows);
            }
            Err(e) => {
                tracing::warn!("Failed to load shows: {}", e);
                reporter.report(ProgressEvent::ShowsFailed {
                    error: e.to_string(),
                });
                self.load_failed(e.to_string());
            }
        }
    }

    fn recompute(&mut self) {
        self.visible = apply_filters(&self.shows, &self.filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;

    use crate::api::mock::{BASE, Canned, MockHttpClient, api};
    use crate::genre::Genre;
    use crate::progress::NoopReporter;
    use crate::progress::tests::RecordingReporter;

    const ALPHA_BETA: &str = r#"[
        {"id": "a", "title": "Alpha", "genres": [1], "updated": 100},
        {"id": "b", "title": "Beta", "genres": [2], "updated": 200}
    ]"#;

    fn make_show(id: &str, title: &str, genre: u32, updated_millis: i64) -> ShowSummary {
        ShowSummary {
            id: id.to_string(),
            title: title.to_string(),
            image: String::new(),
            genres: vec![Genre::Id(genre)],
            updated: DateTime::from_timestamp_millis(updated_millis),
            description: None,
            seasons: None,
        }
    }

    fn loaded_store() -> PodcastStore {
        let mut store = PodcastStore::new();
        store.load_succeeded(vec![
            make_show("a", "Alpha", 1, 100),
            make_show("b", "Beta", 2, 200),
        ]);
        store
    }

    fn visible_titles(store: &PodcastStore) -> Vec<&str> {
        store.visible().iter().map(|show| show.title.as_str()).collect()
    }

    #[test]
    fn new_store_is_idle_and_empty() {
        let store = PodcastStore::new();

        assert_eq!(store.load_state(), &LoadState::Idle);
        assert!(!store.is_loading());
        assert!(store.shows().is_empty());
        assert!(store.visible().is_empty());
        assert!(store.error().is_none());
    }

    #[test]
    fn load_succeeded_seeds_visible_list_in_original_order() {
        let store = loaded_store();

        assert_eq!(store.load_state(), &LoadState::Ready);
        assert_eq!(visible_titles(&store), vec!["Alpha", "Beta"]);
        assert_eq!(store.visible(), store.shows());
    }

    #[test]
    fn setters_recompute_visible_list() {
        let mut store = loaded_store();

        store.set_search_text("al");
        assert_eq!(visible_titles(&store), vec!["Alpha"]);

        store.set_search_text("");
        store.set_genre_filter(Some(2));
        assert_eq!(visible_titles(&store), vec!["Beta"]);

        store.set_genre_filter(None);
        store.set_sort_option(SortOption::UpdatedDesc);
        assert_eq!(visible_titles(&store), vec!["Beta", "Alpha"]);

        // The full list is never reordered or filtered
        assert_eq!(store.shows()[0].title, "Alpha");
        assert_eq!(store.shows().len(), 2);
    }

    #[test]
    fn filter_set_before_load_applies_once_shows_arrive() {
        let mut store = PodcastStore::new();
        store.set_genre_filter(Some(2));
        assert!(store.visible().is_empty());

        store.load_succeeded(vec![
            make_show("a", "Alpha", 1, 100),
            make_show("b", "Beta", 2, 200),
        ]);
        assert_eq!(visible_titles(&store), vec!["Beta"]);
    }

    #[test]
    fn load_failed_empties_both_lists() {
        let mut store = loaded_store();
        store.load_failed("boom");

        assert!(store.shows().is_empty());
        assert!(store.visible().is_empty());
        assert_eq!(store.error(), Some("boom"));
        assert!(!store.is_loading());
    }

    #[test]
    fn find_looks_up_by_id() {
        let store = loaded_store();

        assert_eq!(store.find("b").map(|show| show.title.as_str()), Some("Beta"));
        assert!(store.find("zzz").is_none());
    }

    #[tokio::test]
    async fn load_fetches_collection() {
        let client = MockHttpClient::default().with(BASE, Canned::Json(200, ALPHA_BETA.to_string()));
        let api = api(client);
        let mut store = PodcastStore::new();

        store.load(&api, &NoopReporter::shared()).await;

        assert_eq!(store.load_state(), &LoadState::Ready);
        assert_eq!(visible_titles(&store), vec!["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn load_with_server_error_sets_error_and_clears_lists() {
        let client = MockHttpClient::default().with(BASE, Canned::Json(500, String::new()));
        let api = api(client);
        let mut store = loaded_store();
        let reporter = std::sync::Arc::new(RecordingReporter::default());
        let shared: SharedProgressReporter = reporter.clone();

        store.load(&api, &shared).await;

        assert!(store.shows().is_empty());
        assert!(store.visible().is_empty());
        assert!(!store.is_loading());
        assert!(store.error().is_some_and(|message| message.contains("500")));
        assert!(
            reporter
                .events()
                .iter()
                .any(|event| matches!(event, ProgressEvent::ShowsFailed { .. }))
        );
    }

    #[tokio::test]
    async fn load_keeps_shows_with_unrecognized_genres() {
        let body = r#"[{"id": "a", "title": "Alpha", "genres": [1]}, {"id": "b", "title": "Beta", "genres": [null]}]"#;
        let client = MockHttpClient::default().with(BASE, Canned::Json(200, body.to_string()));
        let api = api(client);
        let mut store = PodcastStore::new();

        store.load(&api, &NoopReporter::shared()).await;

        assert_eq!(store.load_state(), &LoadState::Ready);
        assert_eq!(visible_titles(&store), vec!["Alpha", "Beta"]);
        assert_eq!(
            store.find("b").map(|show| show.genres[0].label().into_owned()),
            Some("Unknown".to_string())
        );
    }

    #[tokio::test]
    async fn load_with_network_error_sets_error() {
        let client = MockHttpClient::default().with(BASE, Canned::Unreachable);
        let api = api(client);
        let mut store = PodcastStore::new();

        store.load(&api, &NoopReporter::shared()).await;

        assert!(matches!(store.load_state(), LoadState::Failed(_)));
        assert!(store.shows().is_empty());
    }
}
