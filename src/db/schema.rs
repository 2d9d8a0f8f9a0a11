// Database schema types and query helpers

use rusqlite::{Connection, params, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::constants::{FOLD_CASE_FN, LIKE_ESCAPE, STATUS_PENDING, STATUS_WATCHED};
use crate::error::{FilmListError, Result};

// ----- Status -----

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovieStatus {
    #[default]
    Pending,
    Watched,
}

impl MovieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Pending => STATUS_PENDING,
            MovieStatus::Watched => STATUS_WATCHED,
        }
    }

    /// Anything other than "Watched" (including NULL) reads as pending.
    pub fn from_db(value: Option<&str>) -> Self {
        match value {
            Some(STATUS_WATCHED) => MovieStatus::Watched,
            _ => MovieStatus::Pending,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MovieStatus::Pending => MovieStatus::Watched,
            MovieStatus::Watched => MovieStatus::Pending,
        }
    }
}

impl std::fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ----- Movie -----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub status: MovieStatus,
}

/// A validated movie ready for insert. Title is trimmed and non-empty;
/// a blank genre becomes None.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre: Option<String>,
}

impl NewMovie {
    pub fn new(title: &str, genre: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FilmListError::EmptyTitle);
        }

        let genre = genre.trim();
        Ok(Self {
            title: title.to_string(),
            genre: if genre.is_empty() { None } else { Some(genre.to_string()) },
        })
    }
}

pub fn insert_movie(conn: &Connection, movie: &NewMovie) -> Result<i64> {
    conn.execute(
        "INSERT INTO movies (title, genre, status) VALUES (?1, ?2, ?3)",
        params![movie.title, movie.genre, MovieStatus::Pending.as_str()],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted movie {} '{}'", id, movie.title);
    Ok(id)
}

pub fn get_movie(conn: &Connection, id: i64) -> Result<Option<Movie>> {
    let result = conn.query_row(
        "SELECT id, title, genre, status FROM movies WHERE id = ?1",
        params![id],
        map_movie,
    ).optional()?;
    Ok(result)
}

/// List movies whose title or genre contains `search` (case-insensitive),
/// newest first. An empty search lists everything.
pub fn list_movies(conn: &Connection, search: &str) -> Result<Vec<Movie>> {
    let pattern = like_pattern(search);

    // fold_case is registered by db::register_functions; SQLite's LOWER() only folds ASCII
    let mut stmt = conn.prepare(&format!(
        r"SELECT id, title, genre, status FROM movies
         WHERE {f}(title) LIKE ?1 ESCAPE '\' OR {f}(genre) LIKE ?1 ESCAPE '\'
         ORDER BY id DESC",
        f = FOLD_CASE_FN,
    ))?;

    let movies = stmt
        .query_map(params![pattern], map_movie)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    log::debug!("Listed {} movies for search '{}'", movies.len(), search);
    Ok(movies)
}

/// Flip Pending <-> Watched in one statement and return the new status.
pub fn toggle_movie_status(conn: &Connection, id: i64) -> Result<MovieStatus> {
    let status: Option<Option<String>> = conn.query_row(
        "UPDATE movies
         SET status = CASE WHEN status = ?1 THEN ?2 ELSE ?1 END
         WHERE id = ?3
         RETURNING status",
        params![STATUS_WATCHED, STATUS_PENDING, id],
        |row| row.get(0),
    ).optional()?;

    let status = status.ok_or(FilmListError::MovieNotFound(id))?;
    let status = MovieStatus::from_db(status.as_deref());
    log::debug!("Movie {} is now {}", id, status);
    Ok(status)
}

pub fn delete_movie(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(FilmListError::MovieNotFound(id));
    }
    log::debug!("Deleted movie {}", id);
    Ok(())
}

/// Returns (total, watched) over the whole table, ignoring any search.
pub fn count_movies(conn: &Connection) -> Result<(i64, i64)> {
    let counts: (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN status = ?1 THEN 1 ELSE 0 END), 0) FROM movies",
        params![STATUS_WATCHED],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(counts)
}

fn map_movie(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
    let genre: Option<String> = row.get(2)?;
    let status: Option<String> = row.get(3)?;
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        // Older files stored "" for a missing genre
        genre: genre.filter(|g| !g.trim().is_empty()),
        status: MovieStatus::from_db(status.as_deref()),
    })
}

/// Lowercase the search text, escape LIKE wildcards, and wrap it in `%...%`.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.to_lowercase().chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::register_functions(&conn).unwrap();
        crate::db::migrations::run_migrations(&conn).unwrap();
        conn
    }

    fn add(conn: &Connection, title: &str, genre: &str) -> i64 {
        insert_movie(conn, &NewMovie::new(title, genre).unwrap()).unwrap()
    }

    #[test]
    fn test_new_movie_validation() {
        assert!(matches!(NewMovie::new("", "Drama"), Err(FilmListError::EmptyTitle)));
        assert!(matches!(NewMovie::new("   \t", ""), Err(FilmListError::EmptyTitle)));

        let movie = NewMovie::new("  Arrival ", "  ").unwrap();
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.genre, None);

        let movie = NewMovie::new("Arrival", " Sci-Fi ").unwrap();
        assert_eq!(movie.genre, Some("Sci-Fi".to_string()));
    }

    #[test]
    fn test_insert_starts_pending() {
        let conn = setup_db();
        let id = add(&conn, "Arrival", "Sci-Fi");

        let movie = get_movie(&conn, id).unwrap().unwrap();
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(movie.status, MovieStatus::Pending);
        assert!(get_movie(&conn, id + 1).unwrap().is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let conn = setup_db();
        let a = add(&conn, "Alien", "Horror");
        let b = add(&conn, "Brazil", "Comedy");
        let c = add(&conn, "Casablanca", "Drama");

        let ids: Vec<i64> = list_movies(&conn, "").unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn test_search_title_or_genre_case_insensitive() {
        let conn = setup_db();
        add(&conn, "The Thing", "Horror");
        add(&conn, "Paddington", "Family");
        add(&conn, "Nosferatu", "");

        let hits = list_movies(&conn, "HOR").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Thing");

        let hits = list_movies(&conn, "ferat").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Nosferatu");

        let hits = list_movies(&conn, "fam").unwrap();
        assert_eq!(hits[0].title, "Paddington");

        assert!(list_movies(&conn, "western").unwrap().is_empty());
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let conn = setup_db();
        add(&conn, "ÉLITE", "Drama");
        add(&conn, "Amélie", "ROMANCE À PARIS");
        add(&conn, "Heat", "Crime");

        let hits = list_movies(&conn, "ÉLITE").unwrap();
        assert_eq!(hits.len(), 1, "exact title must always match");
        assert_eq!(hits[0].title, "ÉLITE");

        let hits = list_movies(&conn, "élite").unwrap();
        assert_eq!(hits.len(), 1);

        let hits = list_movies(&conn, "AMÉL").unwrap();
        assert_eq!(hits[0].title, "Amélie");

        let hits = list_movies(&conn, "à paris").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Amélie");
    }

    #[test]
    fn test_legacy_empty_genre_reads_as_none() {
        let conn = setup_db();
        conn.execute("INSERT INTO movies (title, genre, status) VALUES ('Heat', '', 'Pending')", [])
            .unwrap();
        let id = conn.last_insert_rowid();

        assert_eq!(get_movie(&conn, id).unwrap().unwrap().genre, None);
        assert_eq!(list_movies(&conn, "heat").unwrap()[0].genre, None);
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let conn = setup_db();
        add(&conn, "100% Wolf", "Animation");
        add(&conn, "1000 Wolves", "Documentary");
        add(&conn, "snake_case", "");

        let hits = list_movies(&conn, "100%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% Wolf");

        let hits = list_movies(&conn, "e_c").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "snake_case");

        assert!(list_movies(&conn, "%").unwrap().len() == 1);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let conn = setup_db();
        let id = add(&conn, "Heat", "Crime");

        assert_eq!(toggle_movie_status(&conn, id).unwrap(), MovieStatus::Watched);
        assert_eq!(get_movie(&conn, id).unwrap().unwrap().status, MovieStatus::Watched);

        assert_eq!(toggle_movie_status(&conn, id).unwrap(), MovieStatus::Pending);
        assert_eq!(get_movie(&conn, id).unwrap().unwrap().status, MovieStatus::Pending);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let conn = setup_db();
        assert!(matches!(toggle_movie_status(&conn, 42), Err(FilmListError::MovieNotFound(42))));
    }

    #[test]
    fn test_toggle_legacy_null_status() {
        let conn = setup_db();
        conn.execute("INSERT INTO movies (title, genre, status) VALUES ('Old', NULL, NULL)", [])
            .unwrap();
        let id = conn.last_insert_rowid();

        assert_eq!(get_movie(&conn, id).unwrap().unwrap().status, MovieStatus::Pending);
        assert_eq!(toggle_movie_status(&conn, id).unwrap(), MovieStatus::Watched);
    }

    #[test]
    fn test_delete_and_ids_not_reused() {
        let conn = setup_db();
        let a = add(&conn, "Alien", "Horror");
        let b = add(&conn, "Aliens", "Action");

        delete_movie(&conn, b).unwrap();
        assert!(get_movie(&conn, b).unwrap().is_none());
        assert!(matches!(delete_movie(&conn, b), Err(FilmListError::MovieNotFound(_))));

        let c = add(&conn, "Alien 3", "Horror");
        assert!(c > b, "AUTOINCREMENT must not reuse deleted ids");
        assert!(get_movie(&conn, a).unwrap().is_some());
    }

    #[test]
    fn test_count_movies() {
        let conn = setup_db();
        assert_eq!(count_movies(&conn).unwrap(), (0, 0));

        let a = add(&conn, "Alien", "Horror");
        add(&conn, "Heat", "Crime");
        toggle_movie_status(&conn, a).unwrap();

        assert_eq!(count_movies(&conn).unwrap(), (2, 1));
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(MovieStatus::from_db(Some("Watched")), MovieStatus::Watched);
        assert_eq!(MovieStatus::from_db(Some("watched")), MovieStatus::Pending);
        assert_eq!(MovieStatus::from_db(None), MovieStatus::Pending);
        assert_eq!(MovieStatus::Pending.toggled(), MovieStatus::Watched);
        assert_eq!(MovieStatus::default(), MovieStatus::Pending);
        assert_eq!(serde_json::to_string(&MovieStatus::Watched).unwrap(), "\"Watched\"");
    }

    #[test]
    fn test_like_pattern_escaping() {
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("AbC"), "%abc%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
