// Watchlist presenter
// Every user action runs one storage statement on a fresh connection and then
// re-renders the whole visible list from a new query. Nothing is cached.

pub mod view;

use std::path::{Path, PathBuf};

use crate::db::{open_db, schema};
use crate::db::schema::{MovieStatus, NewMovie};
use crate::error::{FilmListError, Result};

pub use view::{MovieRow, WatchlistView};

#[derive(Debug, Clone)]
pub struct Watchlist {
    db_path: PathBuf,
    search: String,
}

impl Watchlist {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            search: String::new(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Add a pending movie. A blank title is rejected before touching the database.
    pub fn add(&mut self, title: &str, genre: &str) -> Result<WatchlistView> {
        let movie = match NewMovie::new(title, genre) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Rejected movie: {}", e);
                return Err(e);
            }
        };

        {
            let conn = open_db(&self.db_path)?;
            let id = schema::insert_movie(&conn, &movie)?;
            log::info!("Added movie {} '{}'", id, movie.title);
        }

        self.refresh()
    }

    pub fn toggle(&mut self, id: i64) -> Result<WatchlistView> {
        let status: MovieStatus = {
            let conn = open_db(&self.db_path)?;
            schema::toggle_movie_status(&conn, id)?
        };
        log::info!("Marked movie {} as {}", id, status);

        self.refresh()
    }

    pub fn delete(&mut self, id: i64) -> Result<WatchlistView> {
        {
            let conn = open_db(&self.db_path)?;
            schema::delete_movie(&conn, id)?;
        }
        log::info!("Deleted movie {}", id);

        self.refresh()
    }

    /// Replace the search text (raw, as typed) and re-render.
    pub fn set_search(&mut self, text: &str) -> Result<WatchlistView> {
        self.search = text.to_string();
        self.refresh()
    }

    /// Settle a toggle/delete result for the window. A row that no longer
    /// exists (removed by another process) still yields a fresh render so the
    /// stale row disappears; other errors pass through.
    pub fn refresh_on_missing(&self, result: Result<WatchlistView>) -> Result<WatchlistView> {
        match result {
            Err(FilmListError::MovieNotFound(id)) => {
                log::warn!("Movie {} no longer exists, re-rendering", id);
                self.refresh()
            }
            other => other,
        }
    }

    /// Re-query with the current search and render every row.
    pub fn refresh(&self) -> Result<WatchlistView> {
        let conn = open_db(&self.db_path)?;
        let movies = schema::list_movies(&conn, &self.search)?;
        let (total, watched) = schema::count_movies(&conn)?;
        Ok(view::render(&movies, &self.search, total, watched))
    }
}
