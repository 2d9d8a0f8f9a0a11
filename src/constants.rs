// Film List Constants

pub const APP_NAME: &str = "Film List";
pub const WINDOW_TITLE: &str = "Movie Watchlist Pro v1.2";
pub const WARNING_DIALOG_TITLE: &str = "Warning";

// Project directory identifiers (directories::ProjectDirs)
pub const APP_QUALIFIER: &str = "org";
pub const APP_ORGANIZATION: &str = "filmlist";
pub const APP_DIR_NAME: &str = "film-list";

// Paths
pub const DB_FILENAME: &str = "movies.db";

// Environment overrides
pub const ENV_DB_PATH: &str = "FILMLIST_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FILMLIST_LOG";

// SQLite
pub const DB_BUSY_TIMEOUT_MS: u32 = 5000;
pub const LIKE_ESCAPE: char = '\\';
// Unicode-aware lowercase, registered on every connection
pub const FOLD_CASE_FN: &str = "fold_case";

// Stored status values
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_WATCHED: &str = "Watched";

// ----- Row presentation -----

pub const EMOJI_WATCHED: &str = "✅";
pub const EMOJI_PENDING: &str = "⏳";

pub const TEXT_COLOR_WATCHED: &str = "#2ecc71";
pub const TEXT_COLOR_PENDING: &str = "white";

// The toggle button offers the opposite action of the current status
pub const TOGGLE_LABEL_WATCHED: &str = "Undo";
pub const TOGGLE_LABEL_PENDING: &str = "Watched";
pub const TOGGLE_COLOR_WATCHED: &str = "#3498db";
pub const TOGGLE_COLOR_PENDING: &str = "#27ae60";

pub const DELETE_LABEL: &str = "Delete";
pub const DELETE_COLOR: &str = "#cc3300";
pub const DELETE_HOVER_COLOR: &str = "#990000";
