// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use feruca::Collator;
use thiserror::Error;

use crate::api::ShowSummary;

/// Order in which the derived show list is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Keep the order returned by the API
    #[default]
    None,
    TitleAsc,
    TitleDesc,
    /// Oldest update first
    UpdatedAsc,
    /// Newest update first
    UpdatedDesc,
}

impl SortOption {
    /// All options, in the order they are offered to the user
    pub const ALL: [SortOption; 5] = [
        SortOption::None,
        SortOption::TitleAsc,
        SortOption::TitleDesc,
        SortOption::UpdatedAsc,
        SortOption::UpdatedDesc,
    ];

    /// Human-readable description
    pub fn label(self) -> &'static str {
        match self {
            SortOption::None => "Default",
            SortOption::TitleAsc => "Title (A-Z)",
            SortOption::TitleDesc => "Title (Z-A)",
            SortOption::UpdatedAsc => "Oldest updated",
            SortOption::UpdatedDesc => "Last updated",
        }
    }

    /// Canonical name accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            SortOption::None => "none",
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::UpdatedAsc => "updated-asc",
            SortOption::UpdatedDesc => "updated-desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a sort option name is not recognized
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown sort option '{0}' (expected one of: none, title-asc, title-desc, updated-asc, updated-desc)")]
pub struct ParseSortOptionError(String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "default" => Ok(SortOption::None),
            "title" | "title-asc" | "a-z" => Ok(SortOption::TitleAsc),
            "title-desc" | "z-a" => Ok(SortOption::TitleDesc),
            "updated-asc" | "oldest" => Ok(SortOption::UpdatedAsc),
            "updated" | "updated-desc" | "newest" => Ok(SortOption::UpdatedDesc),
            _ => Err(ParseSortOptionError(s.to_string())),
        }
    }
}

/// Search text, genre selection and sort option driving the derived list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub genre_filter: Option<u32>,
    pub sort_option: SortOption,
}

impl FilterState {
    /// Whether applying this state leaves the show list unchanged
    pub fn is_default(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.genre_filter.is_none()
            && self.sort_option == SortOption::None
    }
}

/// Derive the visible show list from the full list and the filter state
///
/// Search matches titles case-insensitively against the search text as
/// typed; blank search text matches everything. Sorting is stable, so shows
/// comparing equal keep their original relative order.
pub fn apply_filters(shows: &[ShowSummary], filter: &FilterState) -> Vec<ShowSummary> {
    let searching = !filter.search_text.trim().is_empty();
    let query = filter.search_text.to_lowercase();

    let mut results: Vec<ShowSummary> = shows
        .iter()
        .filter(|show| !searching || show.title.to_lowercase().contains(&query))
        .filter(|show| filter.genre_filter.is_none_or(|genre| show.has_genre(genre)))
        .cloned()
        .collect();

    match filter.sort_option {
        SortOption::None => {}
        SortOption::TitleAsc => {
            let mut collator = Collator::default();
            results.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortOption::TitleDesc => {
            let mut collator = Collator::default();
            results.sort_by(|a, b| collator.collate(b.title.as_str(), a.title.as_str()));
        }
        SortOption::UpdatedAsc => results.sort_by(|a, b| a.updated.cmp(&b.updated)),
        SortOption::UpdatedDesc => results.sort_by(|a, b| b.updated.cmp(&a.updated)),
    }

    results
}

/// Compare titles with the Unicode Collation Algorithm (CLDR root order)
///
/// Accents and case only break ties between otherwise equal letters, and
/// titles differing only in case put the lowercase form first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;

    use crate::genre::Genre;

    fn make_show(title: &str, genres: &[u32], updated_secs: i64) -> ShowSummary {
        ShowSummary {
            id: title.to_lowercase(),
            title: title.to_string(),
            image: String::new(),
            genres: genres.iter().copied().map(Genre::Id).collect(),
            updated: DateTime::from_timestamp(updated_secs, 0),
            description: None,
            seasons: None,
        }
    }

    fn alpha_beta() -> Vec<ShowSummary> {
        vec![make_show("Alpha", &[1], 100), make_show("Beta", &[2], 200)]
    }

    fn titles(shows: &[ShowSummary]) -> Vec<&str> {
        shows.iter().map(|show| show.title.as_str()).collect()
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let filter = FilterState {
            search_text: "al".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&alpha_beta(), &filter)), vec!["Alpha"]);

        let filter = FilterState {
            search_text: "BET".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&alpha_beta(), &filter)), vec!["Beta"]);
    }

    #[test]
    fn search_text_is_matched_as_typed() {
        let filter = FilterState {
            search_text: "alpha ".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&alpha_beta(), &filter).is_empty());

        let shows = vec![make_show("Alpha Centauri", &[1], 100), make_show("Alphabet", &[1], 200)];
        assert_eq!(titles(&apply_filters(&shows, &filter)), vec!["Alpha Centauri"]);
    }

    #[test]
    fn empty_or_blank_search_keeps_everything() {
        let shows = alpha_beta();

        for search_text in ["", "   "] {
            let filter = FilterState {
                search_text: search_text.to_string(),
                ..Default::default()
            };
            assert_eq!(apply_filters(&shows, &filter), shows);
        }
    }

    #[test]
    fn genre_filter_keeps_matching_shows() {
        let filter = FilterState {
            genre_filter: Some(2),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&alpha_beta(), &filter)), vec!["Beta"]);

        let filter = FilterState {
            genre_filter: Some(7),
            ..Default::default()
        };
        assert!(apply_filters(&alpha_beta(), &filter).is_empty());
    }

    #[test]
    fn search_and_genre_combine() {
        let shows = vec![
            make_show("Alpha", &[1, 2], 100),
            make_show("Alpaca", &[3], 150),
            make_show("Beta", &[2], 200),
        ];
        let filter = FilterState {
            search_text: "alp".to_string(),
            genre_filter: Some(2),
            ..Default::default()
        };

        assert_eq!(titles(&apply_filters(&shows, &filter)), vec!["Alpha"]);
    }

    #[test]
    fn updated_desc_puts_newest_first() {
        let filter = FilterState {
            sort_option: SortOption::UpdatedDesc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&alpha_beta(), &filter)),
            vec!["Beta", "Alpha"]
        );

        let filter = FilterState {
            sort_option: SortOption::UpdatedAsc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&alpha_beta(), &filter)),
            vec!["Alpha", "Beta"]
        );
    }

    #[test]
    fn title_sort_ignores_case() {
        let shows = vec![
            make_show("banana", &[], 0),
            make_show("Cherry", &[], 0),
            make_show("apple", &[], 0),
        ];

        let filter = FilterState {
            sort_option: SortOption::TitleAsc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&shows, &filter)),
            vec!["apple", "banana", "Cherry"]
        );

        let filter = FilterState {
            sort_option: SortOption::TitleDesc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&shows, &filter)),
            vec!["Cherry", "banana", "apple"]
        );
    }

    #[test]
    fn title_sort_places_accented_letters_with_their_base_letter() {
        let shows = vec![
            make_show("Zebra Talk", &[], 0),
            make_show("Émile Show", &[], 0),
            make_show("apple", &[], 0),
            make_show("Ångström Hour", &[], 0),
        ];

        let filter = FilterState {
            sort_option: SortOption::TitleAsc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&shows, &filter)),
            vec!["Ångström Hour", "apple", "Émile Show", "Zebra Talk"]
        );

        let filter = FilterState {
            sort_option: SortOption::TitleDesc,
            ..Default::default()
        };
        assert_eq!(
            titles(&apply_filters(&shows, &filter)),
            vec!["Zebra Talk", "Émile Show", "apple", "Ångström Hour"]
        );
    }

    #[test]
    fn sorting_is_stable_for_equal_keys() {
        let mut first = make_show("Same", &[], 100);
        first.id = "first".to_string();
        let mut second = make_show("Other", &[], 100);
        second.id = "second".to_string();

        let filter = FilterState {
            sort_option: SortOption::UpdatedDesc,
            ..Default::default()
        };
        let result = apply_filters(&[first, second], &filter);

        assert_eq!(result[0].id, "first");
        assert_eq!(result[1].id, "second");
    }

    #[test]
    fn missing_timestamps_sort_as_oldest() {
        let mut undated = make_show("Undated", &[], 0);
        undated.updated = None;
        let shows = vec![undated, make_show("Dated", &[], 50)];

        let filter = FilterState {
            sort_option: SortOption::UpdatedDesc,
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&shows, &filter)), vec!["Dated", "Undated"]);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let shows = vec![
            make_show("Gamma", &[1], 300),
            make_show("alpha", &[1], 100),
            make_show("Beta", &[2], 200),
        ];
        let filter = FilterState {
            search_text: "a".to_string(),
            genre_filter: Some(1),
            sort_option: SortOption::TitleAsc,
        };

        let once = apply_filters(&shows, &filter);
        let twice = apply_filters(&once, &filter);
        assert_eq!(once, twice);
        assert_eq!(titles(&once), vec!["alpha", "Gamma"]);
    }

    #[test]
    fn compare_titles_is_a_total_order_on_case_variants() {
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("A", "a"), Ordering::Greater);
        assert_eq!(compare_titles("abc", "abc"), Ordering::Equal);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("Émile", "Zebra"), Ordering::Less);
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn sort_option_parses_names_and_aliases() {
        assert_eq!("title".parse::<SortOption>(), Ok(SortOption::TitleAsc));
        assert_eq!("Z-A".parse::<SortOption>(), Ok(SortOption::TitleDesc));
        assert_eq!("newest".parse::<SortOption>(), Ok(SortOption::UpdatedDesc));
        assert_eq!("".parse::<SortOption>(), Ok(SortOption::None));
        assert!("random".parse::<SortOption>().is_err());

        for option in SortOption::ALL {
            assert_eq!(option.name().parse::<SortOption>(), Ok(option));
        }
    }
}
