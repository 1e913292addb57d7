pub mod api;
pub mod app;
pub mod config;
pub mod date;
pub mod detail;
pub mod error;
pub mod filter;
pub mod genre;
pub mod http;
pub mod pagination;
pub mod progress;
pub mod route;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use api::{DEFAULT_API_BASE, Episode, PodcastApi, Season, ShowDetail, ShowSummary};
pub use app::{App, Intent, Outcome};
pub use config::Config;
pub use date::{format_date, format_date_str, format_timestamp_millis};
pub use detail::{DetailState, DetailTicket, ShowDetailLoader};
pub use error::{ConfigError, FetchError, IntentError, RouteError};
pub use filter::{FilterState, SortOption, apply_filters};
pub use genre::{GENRES, Genre, genre_label, parse_genre};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use route::Route;
pub use store::{LoadState, PodcastStore};
