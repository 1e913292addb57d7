use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for genre ids missing from [`GENRES`]
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Genre ids and their display labels as published by the podcast API
pub const GENRES: [(u32, &str); 9] = [
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// A genre entry as it appears in API responses.
///
/// The collection endpoint lists numeric ids, while show details may carry
/// labels directly or objects with a `title` field. Entries of any other
/// shape are kept as [`Genre::Unrecognized`] and label as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    Id(u32),
    Label(String),
    Titled { title: Option<String> },
    Unrecognized(serde_json::Value),
}

impl Genre {
    /// Numeric id of this genre, if the entry carries one
    pub fn id(&self) -> Option<u32> {
        match self {
            Genre::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Display label for this genre
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Genre::Label(label) => Cow::Borrowed(label.as_str()),
            Genre::Titled { title: Some(title) } if !title.is_empty() => {
                Cow::Borrowed(title.as_str())
            }
            Genre::Titled { .. } | Genre::Unrecognized(_) => Cow::Borrowed(UNKNOWN_GENRE),
            Genre::Id(id) => Cow::Borrowed(genre_label(*id)),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<u32> for Genre {
    fn from(id: u32) -> Self {
        Genre::Id(id)
    }
}

/// Look up the label for a numeric genre id
pub fn genre_label(id: u32) -> &'static str {
    GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_GENRE)
}

/// Parse a user-supplied genre given either as an id or as a label
///
/// Labels match case-insensitively. Returns `None` for anything that is not
/// in [`GENRES`].
pub fn parse_genre(input: &str) -> Option<u32> {
    let input = input.trim();

    if let Ok(id) = input.parse::<u32>() {
        return GENRES.iter().any(|(genre_id, _)| *genre_id == id).then_some(id);
    }

    GENRES
        .iter()
        .find(|(_, label)| label.eq_ignore_ascii_case(input))
        .map(|(id, _)| *id)
}
