use thiserror::Error;

/// Errors that can occur when fetching shows from the podcast API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {url}: HTTP {status}")]
    FetchFailed { url: String, status: u16 },

    #[error("Network error while fetching {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse response from {url}: {source}")]
    ParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when resolving a route path
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("Missing show id in '{0}'")]
    MissingShowId(String),
}

/// Errors that can occur when parsing an interactive command
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntentError {
    #[error("Unknown command '{0}' (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Unknown genre '{0}' (use an id from 1 to 9 or a genre name)")]
    UnknownGenre(String),

    #[error("Invalid season number '{0}'")]
    InvalidSeason(String),

    #[error(transparent)]
    Sort(#[from] crate::filter::ParseSortOptionError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Errors that can occur when building the client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
