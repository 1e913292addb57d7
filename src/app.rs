// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use crate::api::PodcastApi;
use crate::detail::ShowDetailLoader;
use crate::error::IntentError;
use crate::filter::SortOption;
use crate::genre::parse_genre;
use crate::http::HttpClient;
use crate::progress::SharedProgressReporter;
use crate::route::Route;
use crate::store::PodcastStore;
use crate::view;

/// Help text for the interactive browser
pub const HELP: &str = "\
Commands:
  search <text>     Filter shows by title (no text clears the search)
  genre <id|name>   Filter shows by genre ('all' clears the filter)
  sort <option>     none, title-asc, title-desc, updated-asc, updated-desc
  reset             Clear search, genre and sort
  open <path>       Navigate to '/' or '/show/<id>'
  show <id>         Open the detail view of a show
  season <n>        Select a season of the open show
  back              Return to the show list
  genres            List all genres
  help              Show this help
  quit              Leave the browser";

/// A user intent issued from the interactive browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    Genre(Option<u32>),
    Sort(SortOption),
    Reset,
    Navigate(Route),
    Back,
    /// 1-based season number
    Season(usize),
    Genres,
    Help,
    Quit,
}

impl FromStr for Intent {
    type Err = IntentError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Intent::Search(argument.to_string())),
            "genre" | "g" => match argument.to_ascii_lowercase().as_str() {
                "" => Err(IntentError::MissingArgument {
                    command: "genre",
                    usage: "genre <id|name|all>",
                }),
                "all" | "none" => Ok(Intent::Genre(None)),
                _ => parse_genre(argument)
                    .map(|id| Intent::Genre(Some(id)))
                    .ok_or_else(|| IntentError::UnknownGenre(argument.to_string())),
            },
            "sort" => Ok(Intent::Sort(argument.parse()?)),
            "reset" => Ok(Intent::Reset),
            "open" | "o" => {
                if argument.is_empty() {
                    return Err(IntentError::MissingArgument {
                        command: "open",
                        usage: "open <path>",
                    });
                }
                Ok(Intent::Navigate(Route::parse(argument)?))
            }
            "show" => {
                if argument.is_empty() {
                    return Err(IntentError::MissingArgument {
                        command: "show",
                        usage: "show <id>",
                    });
                }
                Ok(Intent::Navigate(Route::Show(argument.to_string())))
            }
            "season" => argument
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Intent::Season)
                .ok_or_else(|| IntentError::InvalidSeason(argument.to_string())),
            "back" | "b" | "home" => Ok(Intent::Back),
            "genres" => Ok(Intent::Genres),
            "help" | "?" => Ok(Intent::Help),
            "quit" | "exit" | "q" => Ok(Intent::Quit),
            _ => Err(IntentError::UnknownCommand(line.to_string())),
        }
    }
}

/// What the caller should do after an intent was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this text
    Render(String),
    /// Leave the browser
    Quit,
}

/// Application state: one show store for the whole session, the detail
/// loader for the current show, and the current route.
///
/// The store is never reset by navigation, so returning to the list keeps
/// the filter state.
pub struct App<C> {
    api: PodcastApi<C>,
    reporter: SharedProgressReporter,
    store: PodcastStore,
    detail: ShowDetailLoader,
    route: Route,
}

impl<C: HttpClient> App<C> {
    pub fn new(api: PodcastApi<C>, reporter: SharedProgressReporter) -> Self {
        Self {
            api,
            reporter,
            store: PodcastStore::new(),
            detail: ShowDetailLoader::new(),
            route: Route::List,
        }
    }

    pub fn store(&self) -> &PodcastStore {
        &self.store
    }

    pub fn detail(&self) -> &ShowDetailLoader {
        &self.detail
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Load the show collection; called once when the session starts
    pub async fn start(&mut self) {
        self.store.load(&self.api, &self.reporter).await;
    }

    /// Move to `route`, fetching show detail when entering a detail route
    pub async fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {}", route);

        if let Route::Show(id) = &route {
            self.detail.load(&self.api, id, &self.reporter).await;
        }
        self.route = route;
    }

    /// Apply an intent and return what to display
    pub async fn handle(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Search(text) => self.store.set_search_text(text),
            Intent::Genre(genre) => self.store.set_genre_filter(genre),
            Intent::Sort(sort) => self.store.set_sort_option(sort),
            Intent::Reset => self.store.set_filter(Default::default()),
            Intent::Navigate(route) => self.navigate(route).await,
            Intent::Back => self.navigate(Route::List).await,
            Intent::Season(number) => {
                let selected = self.route != Route::List
                    && number
                        .checked_sub(1)
                        .is_some_and(|index| self.detail.select_season(index));
                if !selected {
                    return Outcome::Render(view::render_error(&format!(
                        "No season {number} in the current show"
                    )));
                }
            }
            Intent::Genres => return Outcome::Render(view::render_genre_table()),
            Intent::Help => return Outcome::Render(HELP.to_string()),
            Intent::Quit => return Outcome::Quit,
        }

        Outcome::Render(self.render())
    }

    /// Render the view for the current route
    pub fn render(&self) -> String {
        match &self.route {
            Route::List => format!(
                "{}\n\n{}",
                view::render_header(self.store.filter()),
                view::render_show_list(&self.store, None)
            ),
            Route::Show(_) => view::render_show_detail(&self.detail),
        }
    }
}
