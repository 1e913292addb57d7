use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// A location within the directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/`: the filtered show list
    #[default]
    List,
    /// `/show/{id}`: detail of a single show
    Show(String),
}

impl Route {
    /// Parse a path such as `/` or `/show/10716`
    ///
    /// A trailing slash is ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');

        if normalized.is_empty() {
            return Ok(Route::List);
        }

        let mut segments = normalized.trim_start_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("show"), Some(id), None) if !id.is_empty() => Ok(Route::Show(id.to_string())),
            (Some("show"), None, None) => Err(RouteError::MissingShowId(trimmed.to_string())),
            _ => Err(RouteError::NotFound(trimmed.to_string())),
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Show(id) => format!("/show/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_list() {
        assert_eq!(Route::parse("/"), Ok(Route::List));
        assert_eq!(Route::parse(""), Ok(Route::List));
    }

    #[test]
    fn show_paths_carry_the_id() {
        assert_eq!(Route::parse("/show/10716"), Ok(Route::Show("10716".to_string())));
        assert_eq!(Route::parse("/show/abc/"), Ok(Route::Show("abc".to_string())));
        assert_eq!(Route::parse("show/abc"), Ok(Route::Show("abc".to_string())));
    }

    #[test]
    fn show_without_id_is_rejected() {
        assert_eq!(
            Route::parse("/show"),
            Err(RouteError::MissingShowId("/show".to_string()))
        );
        assert_eq!(
            Route::parse("/show/"),
            Err(RouteError::MissingShowId("/show/".to_string()))
        );
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert!(matches!(Route::parse("/shows"), Err(RouteError::NotFound(_))));
        assert!(matches!(Route::parse("/show/a/b"), Err(RouteError::NotFound(_))));
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::List, Route::Show("42".to_string())] {
            assert_eq!(Route::parse(&route.path()), Ok(route.clone()));
            assert_eq!(route.to_string(), route.path());
        }
    }
}
