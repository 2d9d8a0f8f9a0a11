// Film List Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmListError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Shown verbatim in the warning dialog
    #[error("Please enter a title!")]
    EmptyTitle,

    #[error("Movie not found: {0}")]
    MovieNotFound(i64),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FilmListError {
    fn from(err: anyhow::Error) -> Self {
        FilmListError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilmListError>;
