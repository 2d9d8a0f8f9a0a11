// Database module
// Every operation opens its own short-lived connection and drops it when done.
// Statements run in autocommit mode, so each one is committed as it returns.

pub mod migrations;
pub mod schema;

use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use std::path::Path;

use crate::config::ensure_parent_dir;
use crate::constants::{DB_BUSY_TIMEOUT_MS, FOLD_CASE_FN};
use crate::error::Result;

/// Open or create the watchlist database at the given path
pub fn open_db(db_path: &Path) -> Result<Connection> {
    ensure_parent_dir(db_path)?;

    let conn = Connection::open(db_path)?;
    conn.execute_batch(&format!("PRAGMA busy_timeout = {};", DB_BUSY_TIMEOUT_MS))?;
    register_functions(&conn)?;

    migrations::run_migrations(&conn)?;

    log::debug!("Opened database {}", db_path.display());
    Ok(conn)
}

/// Register the SQL helpers queries rely on (must be done per connection).
/// `fold_case(text)` lowercases with full Unicode rules; NULL stays NULL.
pub fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        FOLD_CASE_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )?;
    Ok(())
}
