// Runtime configuration
//
// Database path resolution order:
// 1) Explicit path (CLI --db)
// 2) Environment variable override (FILMLIST_DB_PATH)
// 3) Platform data directory
// 4) movies.db in the working directory

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;

use crate::constants::{
    APP_DIR_NAME, APP_ORGANIZATION, APP_QUALIFIER, DB_FILENAME, ENV_DB_PATH, ENV_LOG_LEVEL,
};
use crate::error::{FilmListError, Result};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: LevelFilter,
    /// Problems found while loading, held until a logger is installed
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Build the config from an optional explicit path and the process environment.
    pub fn load(explicit_db: Option<PathBuf>) -> Self {
        Self::from_values(
            explicit_db,
            env::var(ENV_DB_PATH).ok(),
            env::var(ENV_LOG_LEVEL).ok(),
        )
    }

    pub fn from_values(
        explicit_db: Option<PathBuf>,
        env_db: Option<String>,
        env_log: Option<String>,
    ) -> Self {
        let mut warnings = Vec::new();
        let log_level = match parse_log_level(env_log.as_deref()) {
            Ok(level) => level,
            Err(e) => {
                warnings.push(format!("{}, using {}", e, DEFAULT_LOG_LEVEL));
                DEFAULT_LOG_LEVEL
            }
        };

        Self {
            db_path: resolve_db_path(explicit_db, env_db),
            log_level,
            warnings,
        }
    }

    /// Log anything deferred by `load`. Call once the logger is up.
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }
}

/// Pick the database file location.
pub fn resolve_db_path(explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Some(v) = env_value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    default_db_path()
}

/// `<data_dir>/movies.db`, or `./movies.db` when there is no home directory.
pub fn default_db_path() -> PathBuf {
    directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_DIR_NAME)
        .map(|dirs| dirs.data_dir().join(DB_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILENAME))
}

/// Parse a log level name. Unset or blank means `info`.
pub fn parse_log_level(value: Option<&str>) -> Result<LevelFilter> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(v) => LevelFilter::from_str(v).map_err(|_| {
            FilmListError::Config(format!("Unknown {} value '{}'", ENV_LOG_LEVEL, v))
        }),
    }
}

/// Create the directory holding the database file if it does not exist yet.
pub fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    if db_path.as_os_str().is_empty() {
        return Err(FilmListError::InvalidPath("empty database path".to_string()));
    }

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::error!("Cannot create data directory {}: {}", parent.display(), e);
                return Err(FilmListError::Io(e));
            }
        }
    }

    Ok(())
}
