// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain-text rendering of the directory state.
//!
//! Every function here is a pure projection of store or loader state into
//! lines of text; none of them change state.

use crate::api::{Episode, Season, ShowDetail, ShowSummary};
use crate::date::format_date;
use crate::detail::{DetailState, ShowDetailLoader};
use crate::filter::FilterState;
use crate::genre::{GENRES, Genre, genre_label};
use crate::pagination::Pagination;
use crate::store::{LoadState, PodcastStore};

/// Maximum length of a description shown in a list entry
const MAX_PREVIEW_LENGTH: usize = 120;

pub const APP_TITLE: &str = "Podcast Explorer";

/// Inline error placeholder
pub fn render_error(message: &str) -> String {
    if message.is_empty() {
        "Error: Something went wrong. Please try again.".to_string()
    } else {
        format!("Error: {message}")
    }
}

/// The header with the current filter controls
pub fn render_header(filter: &FilterState) -> String {
    let search = if filter.search_text.trim().is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", filter.search_text)
    };
    let genre = filter
        .genre_filter
        .map(genre_label)
        .unwrap_or("All genres");

    format!(
        "{APP_TITLE}\nSearch: {search} | Genre: {genre} | Sort by: {}",
        filter.sort_option.label()
    )
}

/// Genre labels as inline tags, e.g. `[Comedy] [History]`
pub fn render_genre_tags(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|genre| format!("[{}]", genre.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single entry of the show list
pub fn render_show_card(show: &ShowSummary) -> String {
    let mut lines = vec![format!("{}  (/show/{})", display_title(&show.title), show.id)];

    let mut facts = Vec::new();
    if let Some(seasons) = show.seasons {
        facts.push(format!(
            "{} season{}",
            seasons,
            if seasons == 1 { "" } else { "s" }
        ));
    }
    if let Some(updated) = &show.updated {
        facts.push(format!("Updated {}", format_date(updated)));
    }
    if !facts.is_empty() {
        lines.push(format!("  {}", facts.join(" | ")));
    }

    let tags = render_genre_tags(&show.genres);
    if !tags.is_empty() {
        lines.push(format!("  {tags}"));
    }

    if let Some(description) = show.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!(
            "  {}",
            truncate(&clean_text(description), MAX_PREVIEW_LENGTH)
        ));
    }

    lines.join("\n")
}

/// The dormant pagination control; hidden when there is only one page
pub fn render_pagination(pagination: &Pagination) -> Option<String> {
    if !pagination.is_visible() {
        return None;
    }

    let previous = if pagination.has_previous() {
        "< Previous"
    } else {
        "  --------"
    };
    let next = if pagination.has_next() {
        "Next >"
    } else {
        "------"
    };

    Some(format!(
        "{previous}   Page {} of {}   {next}",
        pagination.current_page, pagination.total_pages
    ))
}

/// The list view: loading and error placeholders or the derived show list
///
/// When `page` is given only that page of the derived list is shown.
pub fn render_show_list(store: &PodcastStore, page: Option<(usize, usize)>) -> String {
    match store.load_state() {
        LoadState::Loading => return "Loading podcasts...".to_string(),
        LoadState::Failed(message) => return render_error(message),
        LoadState::Idle | LoadState::Ready => {}
    }

    let shows = store.visible();
    if shows.is_empty() {
        return "No podcasts found.".to_string();
    }

    let pagination = page.map(|(page, per_page)| Pagination::new(shows.len(), per_page, page));
    let visible = match &pagination {
        Some(pagination) => &shows[pagination.range()],
        None => shows,
    };

    let mut sections = vec![format!(
        "Podcasts ({} of {})",
        shows.len(),
        store.shows().len()
    )];
    sections.extend(visible.iter().map(render_show_card));
    if let Some(control) = pagination.as_ref().and_then(render_pagination) {
        sections.push(control);
    }

    sections.join("\n\n")
}

/// The detail panel: title, genres, description and last update
pub fn render_detail_panel(detail: &ShowDetail) -> String {
    let mut lines = vec![display_title(&detail.title).to_string()];

    let tags = render_genre_tags(&detail.genres);
    if !tags.is_empty() {
        lines.push(format!("Genres: {tags}"));
    }
    if let Some(updated) = &detail.updated {
        lines.push(format!("Last updated: {}", format_date(updated)));
    }
    lines.push(format!(
        "{} season{}, {} episode{}",
        detail.seasons.len(),
        if detail.seasons.len() == 1 { "" } else { "s" },
        detail.episode_count(),
        if detail.episode_count() == 1 { "" } else { "s" },
    ));

    let description = clean_text(&detail.description);
    if !description.is_empty() {
        lines.push(String::new());
        lines.push(description);
    }

    lines.join("\n")
}

/// Season selector listing every season, marking the selected one
pub fn render_season_selector(seasons: &[Season], selected: usize) -> String {
    seasons
        .iter()
        .enumerate()
        .map(|(index, season)| {
            let marker = if index == selected { ">" } else { " " };
            format!(
                "{marker} {}. {} ({} episode{})",
                index + 1,
                season_title(season, index),
                season.episodes.len(),
                if season.episodes.len() == 1 { "" } else { "s" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Episodes of a season, in the order the API returned them
pub fn render_episode_list(season: &Season, index: usize) -> String {
    let mut lines = vec![season_title(season, index)];

    if season.episodes.is_empty() {
        lines.push("  No episodes.".to_string());
    }
    for (position, episode) in season.episodes.iter().enumerate() {
        lines.push(render_episode(episode, position));
    }

    lines.join("\n")
}

fn render_episode(episode: &Episode, position: usize) -> String {
    let number = episode.episode.map_or(position + 1, |n| n as usize);
    let mut lines = vec![format!("  {number:>3}. {}", display_title(&episode.title))];

    let description = clean_text(&episode.description);
    if !description.is_empty() {
        lines.push(format!("       {}", truncate(&description, MAX_PREVIEW_LENGTH)));
    }

    lines.join("\n")
}

/// The detail view: loading and error placeholders or the full show
pub fn render_show_detail(loader: &ShowDetailLoader) -> String {
    match loader.state() {
        DetailState::Idle => "No show selected.".to_string(),
        DetailState::Loading { .. } => "Loading show...".to_string(),
        DetailState::Failed { message, .. } => render_error(message),
        DetailState::Ready(detail) => {
            let mut sections = vec![render_detail_panel(detail)];

            if detail.seasons.is_empty() {
                sections.push("No seasons available.".to_string());
            } else {
                let selected = loader.selected_season_index();
                sections.push(format!(
                    "Seasons\n{}",
                    render_season_selector(&detail.seasons, selected)
                ));
                if let Some(season) = loader.selected_season() {
                    sections.push(render_episode_list(season, selected));
                }
            }

            sections.join("\n\n")
        }
    }
}

/// Table of all known genres with their ids
pub fn render_genre_table() -> String {
    GENRES
        .iter()
        .map(|(id, label)| format!("{id:>2}  {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn season_title(season: &Season, index: usize) -> String {
    if !season.title.trim().is_empty() {
        season.title.trim().to_string()
    } else {
        format!("Season {}", season.season.map_or(index + 1, |n| n as usize))
    }
}

fn display_title(title: &str) -> &str {
    let title = title.trim();
    if title.is_empty() { "Untitled" } else { title }
}

/// Decode HTML entities and collapse whitespace
fn clean_text(text: &str) -> String {
    html_escape::decode_html_entities(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten `text` to at most `max_chars` characters, ending with "..."
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept.trim_end())
    }
}
