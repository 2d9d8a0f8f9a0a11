// Row rendering for the watchlist

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::db::schema::{Movie, MovieStatus};

/// One rendered list row. Everything the frontend needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub status: MovieStatus,
    pub label: String,
    pub text_color: String,
    pub toggle_label: String,
    pub toggle_color: String,
    pub delete_label: String,
    pub delete_color: String,
    pub delete_hover_color: String,
}

/// A full render of the visible list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistView {
    pub rows: Vec<MovieRow>,
    pub search: String,
    pub total: i64,
    pub watched: i64,
}

impl WatchlistView {
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
    }
}

pub fn status_emoji(status: MovieStatus) -> &'static str {
    match status {
        MovieStatus::Watched => EMOJI_WATCHED,
        MovieStatus::Pending => EMOJI_PENDING,
    }
}

/// "✅ Title (Genre)", or just "⏳ Title" without a genre
pub fn row_label(movie: &Movie) -> String {
    let emoji = status_emoji(movie.status);
    match movie.genre.as_deref() {
        Some(genre) => format!("{} {} ({})", emoji, movie.title, genre),
        None => format!("{} {}", emoji, movie.title),
    }
}

pub fn render_row(movie: &Movie) -> MovieRow {
    let (text_color, toggle_label, toggle_color) = match movie.status {
        MovieStatus::Watched => (TEXT_COLOR_WATCHED, TOGGLE_LABEL_WATCHED, TOGGLE_COLOR_WATCHED),
        MovieStatus::Pending => (TEXT_COLOR_PENDING, TOGGLE_LABEL_PENDING, TOGGLE_COLOR_PENDING),
    };

    MovieRow {
        id: movie.id,
        title: movie.title.clone(),
        genre: movie.genre.clone(),
        status: movie.status,
        label: row_label(movie),
        text_color: text_color.to_string(),
        toggle_label: toggle_label.to_string(),
        toggle_color: toggle_color.to_string(),
        delete_label: DELETE_LABEL.to_string(),
        delete_color: DELETE_COLOR.to_string(),
        delete_hover_color: DELETE_HOVER_COLOR.to_string(),
    }
}

pub fn render(movies: &[Movie], search: &str, total: i64, watched: i64) -> WatchlistView {
    WatchlistView {
        rows: movies.iter().map(render_row).collect(),
        search: search.to_string(),
        total,
        watched,
    }
}
